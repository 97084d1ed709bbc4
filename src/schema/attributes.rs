//! Attach property-type records to the extracted classes.

use indexmap::IndexMap;
use tracing::warn;

use super::diagnostics::{ConsistencyError, SchemaWarning};
use super::extractor::ClassMap;
use super::model::Attribute;
use super::types::{map_source_type, TargetType};
use crate::db::PropertyTypeRecord;

/// Turns property-type records into attributes on existing classes.
///
/// Only records owned by exactly one label are attached. Every class receives
/// its attributes in a single write once all records have been checked.
#[derive(Debug, Default)]
pub struct AttributeCollector {
    warnings: Vec<SchemaWarning>,
}

impl AttributeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append attributes to `classes` and return the warnings raised on the way.
    pub fn collect(
        mut self,
        records: &[PropertyTypeRecord],
        classes: &mut ClassMap,
    ) -> Result<Vec<SchemaWarning>, ConsistencyError> {
        let mut pending: IndexMap<&str, Vec<Attribute>> = IndexMap::new();

        for record in records {
            let [label] = record.owner_labels.as_slice() else {
                self.warn(SchemaWarning::UnsupportedShape {
                    property: record.property_name.clone(),
                    labels: record.owner_labels.clone(),
                });
                continue;
            };

            if !classes.contains_key(label) {
                return Err(ConsistencyError::UnknownLabel {
                    label: label.clone(),
                    property: record.property_name.clone(),
                });
            }

            let data_type = self.resolve_type(label, record);
            pending.entry(label.as_str()).or_default().push(Attribute {
                label: record.property_name.clone(),
                data_type,
            });
        }

        for (label, attributes) in pending {
            if let Some(class) = classes.get_mut(label) {
                class.attributes.extend(attributes);
            }
        }

        Ok(self.warnings)
    }

    /// First observed type wins; anything outside the mapping table becomes STRING.
    fn resolve_type(&mut self, label: &str, record: &PropertyTypeRecord) -> TargetType {
        let Some((chosen, discarded)) = record.observed_types.split_first() else {
            self.warn(SchemaWarning::UnrecognizedType {
                label: label.to_string(),
                property: record.property_name.clone(),
                source_type: None,
            });
            return TargetType::FALLBACK;
        };

        if !discarded.is_empty() {
            self.warn(SchemaWarning::AmbiguousType {
                label: label.to_string(),
                property: record.property_name.clone(),
                chosen: chosen.clone(),
                discarded: discarded.to_vec(),
            });
        }

        match map_source_type(chosen) {
            Some(target) => target,
            None => {
                self.warn(SchemaWarning::UnrecognizedType {
                    label: label.to_string(),
                    property: record.property_name.clone(),
                    source_type: Some(chosen.clone()),
                });
                TargetType::FALLBACK
            }
        }
    }

    fn warn(&mut self, warning: SchemaWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::model::Class;
    use rstest::{fixture, rstest};

    #[fixture]
    fn classes() -> ClassMap {
        let mut classes = ClassMap::new();
        classes.insert("Person".to_string(), Class::new("Person", "p-1"));
        classes.insert("Company".to_string(), Class::new("Company", "c-1"));
        classes
    }

    fn attribute(label: &str, data_type: TargetType) -> Attribute {
        Attribute {
            label: label.to_string(),
            data_type,
        }
    }

    #[rstest]
    fn test_single_label_record_appends_attribute(mut classes: ClassMap) {
        let records = vec![PropertyTypeRecord::new(["Person"], "age", ["Long"])];

        let warnings = AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(
            classes["Person"].attributes,
            vec![attribute("age", TargetType::Number)]
        );
        assert!(classes["Company"].attributes.is_empty());
    }

    #[rstest]
    fn test_attributes_keep_arrival_order(mut classes: ClassMap) {
        let records = vec![
            PropertyTypeRecord::new(["Person"], "name", ["String"]),
            PropertyTypeRecord::new(["Company"], "founded", ["Date"]),
            PropertyTypeRecord::new(["Person"], "active", ["Boolean"]),
            PropertyTypeRecord::new(["Person"], "score", ["Double"]),
        ];

        AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert_eq!(
            classes["Person"].attributes,
            vec![
                attribute("name", TargetType::String),
                attribute("active", TargetType::Boolean),
                attribute("score", TargetType::Double),
            ]
        );
        assert_eq!(
            classes["Company"].attributes,
            vec![attribute("founded", TargetType::Date)]
        );
    }

    #[rstest]
    #[case(vec!["Person", "Company"])]
    #[case(vec![])]
    fn test_non_single_label_record_is_skipped(mut classes: ClassMap, #[case] labels: Vec<&str>) {
        let records = vec![PropertyTypeRecord::new(labels.clone(), "name", ["String"])];

        let warnings = AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert!(classes.values().all(|c| c.attributes.is_empty()));
        assert_eq!(
            warnings,
            vec![SchemaWarning::UnsupportedShape {
                property: "name".to_string(),
                labels: labels.into_iter().map(String::from).collect(),
            }]
        );
    }

    #[rstest]
    fn test_unrecognized_type_falls_back_to_string(mut classes: ClassMap) {
        let records = vec![PropertyTypeRecord::new(["Person"], "origin", ["Alien"])];

        let warnings = AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert_eq!(
            classes["Person"].attributes,
            vec![attribute("origin", TargetType::String)]
        );
        assert_eq!(
            warnings,
            vec![SchemaWarning::UnrecognizedType {
                label: "Person".to_string(),
                property: "origin".to_string(),
                source_type: Some("Alien".to_string()),
            }]
        );
    }

    #[rstest]
    fn test_first_observed_type_wins(mut classes: ClassMap) {
        let records = vec![PropertyTypeRecord::new(
            ["Person"],
            "born",
            ["Long", "String", "Date"],
        )];

        let warnings = AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert_eq!(
            classes["Person"].attributes,
            vec![attribute("born", TargetType::Number)]
        );
        assert_eq!(
            warnings,
            vec![SchemaWarning::AmbiguousType {
                label: "Person".to_string(),
                property: "born".to_string(),
                chosen: "Long".to_string(),
                discarded: vec!["String".to_string(), "Date".to_string()],
            }]
        );
    }

    #[rstest]
    fn test_ambiguous_and_unrecognized_both_reported(mut classes: ClassMap) {
        let records = vec![PropertyTypeRecord::new(["Person"], "blob", ["Alien", "Long"])];

        let warnings = AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert_eq!(warnings.len(), 2);
        assert_eq!(classes["Person"].attributes[0].data_type, TargetType::String);
    }

    #[rstest]
    fn test_missing_observed_type_falls_back_to_string(mut classes: ClassMap) {
        let records = vec![PropertyTypeRecord::new(["Person"], "blob", Vec::<String>::new())];

        let warnings = AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert_eq!(classes["Person"].attributes[0].data_type, TargetType::String);
        assert!(matches!(
            warnings.as_slice(),
            [SchemaWarning::UnrecognizedType { source_type: None, .. }]
        ));
    }

    #[rstest]
    fn test_unknown_label_aborts(mut classes: ClassMap) {
        let records = vec![
            PropertyTypeRecord::new(["Person"], "name", ["String"]),
            PropertyTypeRecord::new(["Planet"], "mass", ["Double"]),
        ];

        let err = AttributeCollector::new()
            .collect(&records, &mut classes)
            .unwrap_err();

        assert_eq!(
            err,
            ConsistencyError::UnknownLabel {
                label: "Planet".to_string(),
                property: "mass".to_string(),
            }
        );
        // Nothing is attached when the run aborts.
        assert!(classes["Person"].attributes.is_empty());
    }

    #[rstest]
    fn test_every_attribute_type_is_in_target_enumeration(mut classes: ClassMap) {
        let source_types = [
            "String", "Long", "Double", "StringArray", "Date", "Point", "Boolean", "Alien",
            "LongArray", "Map", "",
        ];
        let records: Vec<_> = source_types
            .iter()
            .enumerate()
            .map(|(i, t)| PropertyTypeRecord::new(["Person"], format!("p{i}"), [*t]))
            .collect();

        AttributeCollector::new().collect(&records, &mut classes).unwrap();

        assert_eq!(classes["Person"].attributes.len(), source_types.len());
        for attribute in &classes["Person"].attributes {
            assert!(TargetType::ALL.contains(&attribute.data_type));
        }
    }
}
