//! Output formatting for types command results.

use super::execute::TypeMappingResult;
use crate::output::Outputable;

impl Outputable for TypeMappingResult {
    fn to_table(&self) -> String {
        let width = self
            .mappings
            .iter()
            .map(|m| m.source.len())
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!("Type mappings ({}):", self.mappings.len())];
        for mapping in &self.mappings {
            lines.push(format!(
                "  {:<width$} -> {}",
                mapping.source,
                mapping.target,
                width = width
            ));
        }
        lines.push(String::new());
        lines.push(format!("Anything else -> {}", self.fallback));

        lines.join("\n")
    }
}
