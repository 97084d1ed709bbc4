//! Final document assembly.

use super::extractor::{ClassMap, RelationshipMap};
use super::model::SchemaDocument;

pub struct SchemaAssembler;

impl SchemaAssembler {
    /// Flatten both maps into the document, keeping their insertion order.
    pub fn assemble(classes: ClassMap, relationships: RelationshipMap) -> SchemaDocument {
        SchemaDocument {
            classes: classes.into_values().collect(),
            relationships: relationships.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::{Class, Relationship};
    use rstest::rstest;

    #[rstest]
    fn test_assemble_keeps_insertion_order() {
        let mut classes = ClassMap::new();
        classes.insert("Zebra".to_string(), Class::new("Zebra", "z"));
        classes.insert("Ant".to_string(), Class::new("Ant", "a"));

        let mut relationships = RelationshipMap::new();
        relationships.insert(
            "EATS".to_string(),
            Relationship {
                uuid: "r".to_string(),
                start: "z".to_string(),
                start_label: "Zebra".to_string(),
                end_label: "Ant".to_string(),
                end_id: "a".to_string(),
                label: "EATS".to_string(),
            },
        );

        let document = SchemaAssembler::assemble(classes, relationships);

        let labels: Vec<_> = document.classes.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Zebra", "Ant"]);
        assert_eq!(document.relationships.len(), 1);
        assert_eq!(document.relationships[0].label, "EATS");
    }

    #[rstest]
    fn test_assemble_empty() {
        let document = SchemaAssembler::assemble(ClassMap::new(), RelationshipMap::new());
        assert_eq!(document, SchemaDocument::default());
    }
}
