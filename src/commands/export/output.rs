//! Output formatting for export command results.

use super::execute::ExportResult;
use crate::output::{format_warnings, Outputable};

impl Outputable for ExportResult {
    fn to_table(&self) -> String {
        let mut lines = vec![
            format!("Exported schema to {}", self.output.display()),
            String::new(),
            format!("Classes:       {}", self.classes),
            format!("Relationships: {}", self.relationships),
            format!("Attributes:    {}", self.attributes),
        ];

        let warnings = format_warnings(&self.warnings);
        if !warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warnings);
        }

        lines.join("\n")
    }
}
