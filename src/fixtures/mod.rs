//! Schema dumps shared by tests.

/// Three labels, three relationship types, and one property row for each
/// collector path: mapped, ambiguous, unrecognized, multi-label and bare label.
///
/// Converts to 6 attributes and 3 warnings.
pub const SOCIAL_GRAPH: &str = r#"{
  "visualization": {
    "nodes": [
      {"id": -1, "name": "Person"},
      {"id": -2, "name": "Company"},
      {"id": -3, "name": "City"}
    ],
    "relationships": [
      {"start": -1, "end": -1, "type": "KNOWS"},
      {"start": -1, "end": -2, "type": "WORKS_AT"},
      {"start": -2, "end": -3, "type": "LOCATED_IN"}
    ]
  },
  "nodeTypeProperties": [
    {"nodeType": ":`Person`", "nodeLabels": ["Person"], "propertyName": "name", "propertyTypes": ["String"], "mandatory": true},
    {"nodeType": ":`Person`", "nodeLabels": ["Person"], "propertyName": "age", "propertyTypes": ["Long"], "mandatory": false},
    {"nodeType": ":`Person`", "nodeLabels": ["Person"], "propertyName": "born", "propertyTypes": ["Date", "String"], "mandatory": false},
    {"nodeType": ":`Company`", "nodeLabels": ["Company"], "propertyName": "name", "propertyTypes": ["String"], "mandatory": true},
    {"nodeType": ":`Company`", "nodeLabels": ["Company"], "propertyName": "location", "propertyTypes": ["Point"], "mandatory": false},
    {"nodeType": ":`City`", "nodeLabels": ["City"], "propertyName": "population", "propertyTypes": ["LongArray"], "mandatory": false},
    {"nodeType": ":`Person`:`Company`", "nodeLabels": ["Person", "Company"], "propertyName": "since", "propertyTypes": ["Long"], "mandatory": false},
    {"nodeType": ":`City`", "nodeLabels": ["City"], "propertyName": null, "propertyTypes": null, "mandatory": false}
  ]
}"#;
