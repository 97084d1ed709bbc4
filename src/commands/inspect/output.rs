//! Output formatting for inspect command results.

use crate::output::{format_warnings, Outputable};
use crate::schema::Conversion;

impl Outputable for Conversion {
    fn to_table(&self) -> String {
        let document = &self.document;
        let mut lines = Vec::new();

        if document.classes.is_empty() {
            lines.push("No classes found.".to_string());
        } else {
            lines.push(format!("Classes ({}):", document.classes.len()));
            for class in &document.classes {
                lines.push(format!("  {}", class.label));
                for attribute in &class.attributes {
                    lines.push(format!("    {}: {}", attribute.label, attribute.data_type));
                }
            }
        }

        lines.push(String::new());
        if document.relationships.is_empty() {
            lines.push("No relationships found.".to_string());
        } else {
            lines.push(format!("Relationships ({}):", document.relationships.len()));
            for rel in &document.relationships {
                lines.push(format!(
                    "  ({})-[:{}]->({})",
                    rel.start_label, rel.label, rel.end_label
                ));
            }
        }

        let warnings = format_warnings(&self.warnings);
        if !warnings.is_empty() {
            lines.push(String::new());
            lines.extend(warnings);
        }

        lines.join("\n")
    }
}
