//! Column mapping for imported tabular rows.
//!
//! Rows arriving from spreadsheet imports are loosely shaped: the
//! same logical field shows up under different column headers
//! depending on who exported the sheet and in which language.  Rather
//! than reading rows by ad hoc string keys, an import declares a
//! [`SchemaMapping`] up front: one [`FieldSpec`] per logical field
//! with the accepted column aliases.  Mapping a row then produces a
//! typed record plus structured warnings for whatever did not line
//! up, instead of silently defaulting to placeholder values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One logical field of an import schema and the column headers that
/// may carry it.  Aliases are tried in order; the first one present
/// in the row wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Canonical field name in the mapped record.
    pub field: String,
    /// Accepted column headers, e.g. `["Name", "الاسم"]`.
    pub aliases: Vec<String>,
}

/// A declared import schema: the ordered list of fields a row is
/// expected to carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaMapping {
    pub fields: Vec<FieldSpec>,
}

/// The outcome of mapping one row against a [`SchemaMapping`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappedRow {
    /// Canonical field name → value taken from the row.
    pub fields: BTreeMap<String, Value>,
    /// Declared fields for which no alias matched.  The caller decides
    /// whether a missing field is fatal for its import.
    pub missing: Vec<String>,
    /// Row columns no field spec claimed.
    pub unmapped: Vec<String>,
}

impl SchemaMapping {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        SchemaMapping { fields }
    }

    /// Maps a raw row onto the declared fields.
    ///
    /// Null values count as absent, matching how empty spreadsheet
    /// cells arrive from the parsing layer.
    pub fn map_row(&self, row: &Map<String, Value>) -> MappedRow {
        let mut mapped = MappedRow::default();
        let mut claimed: Vec<&str> = Vec::new();

        for spec in &self.fields {
            let hit = spec
                .aliases
                .iter()
                .find_map(|alias| match row.get(alias) {
                    Some(Value::Null) | None => None,
                    Some(value) => Some((alias.as_str(), value.clone())),
                });
            match hit {
                Some((alias, value)) => {
                    claimed.push(alias);
                    mapped.fields.insert(spec.field.clone(), value);
                }
                None => mapped.missing.push(spec.field.clone()),
            }
        }

        for column in row.keys() {
            if !claimed.contains(&column.as_str()) {
                mapped.unmapped.push(column.clone());
            }
        }
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer_schema() -> SchemaMapping {
        SchemaMapping::new(vec![
            FieldSpec {
                field: "name".into(),
                aliases: vec!["Name".into(), "الاسم".into()],
            },
            FieldSpec {
                field: "phone".into(),
                aliases: vec!["Phone".into(), "Mobile".into(), "الهاتف".into()],
            },
        ])
    }

    fn row(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn maps_by_first_matching_alias() {
        let mapped = customer_schema().map_row(&row(json!({
            "الاسم": "سارة",
            "Mobile": "0100000000"
        })));
        assert_eq!(mapped.fields["name"], json!("سارة"));
        assert_eq!(mapped.fields["phone"], json!("0100000000"));
        assert!(mapped.missing.is_empty());
        assert!(mapped.unmapped.is_empty());
    }

    #[test]
    fn reports_missing_fields_instead_of_defaulting() {
        let mapped = customer_schema().map_row(&row(json!({"Name": "Omar"})));
        assert_eq!(mapped.fields.len(), 1);
        assert_eq!(mapped.missing, vec!["phone".to_string()]);
    }

    #[test]
    fn reports_unclaimed_columns() {
        let mapped = customer_schema().map_row(&row(json!({
            "Name": "Omar",
            "Phone": "0111111111",
            "Favourite Colour": "green"
        })));
        assert_eq!(mapped.unmapped, vec!["Favourite Colour".to_string()]);
    }

    #[test]
    fn null_cells_count_as_absent() {
        let mapped = customer_schema().map_row(&row(json!({
            "Name": null,
            "الاسم": "ليلى"
        })));
        assert_eq!(mapped.fields["name"], json!("ليلى"));
        // The null column was not claimed, so it surfaces as unmapped.
        assert_eq!(mapped.unmapped, vec!["Name".to_string()]);
    }
}
