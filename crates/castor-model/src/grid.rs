//! Grid templates and reconstructed grid tables.

use serde::{Deserialize, Serialize};

use crate::enums::FieldType;
use crate::value::Interpreted;

/// Layout template attached to a grid field (the `field_summary_template`
/// of the vendor field object). `fieldTypes` and `optionLists` are
/// parallel arrays describing the sub-field of each grid column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTemplate {
    pub field_types: Vec<String>,
    pub option_lists: Vec<Option<String>>,
    pub row_names: Vec<String>,
    pub column_names: Vec<String>,
}

impl GridTemplate {
    /// Parsed field type of the sub-field at a column index.
    pub fn field_type_at(&self, index: usize) -> Option<FieldType> {
        self.field_types
            .get(index)
            .map(|tag| FieldType::parse(tag))
    }

    /// Option-list id of the sub-field at a column index, if any.
    pub fn option_list_at(&self, index: usize) -> Option<&str> {
        self.option_lists
            .get(index)
            .and_then(|id| id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// A reconstructed grid: labeled rows and columns, with every cell
/// independently interpreted according to its column's sub-field type.
/// Cells are stored column-major (`columns[c][r]`).
#[derive(Debug, Clone, PartialEq)]
pub struct GridTable {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// Sub-field type of each column, kept for serialization.
    pub column_types: Vec<FieldType>,
    pub columns: Vec<Vec<Interpreted>>,
}

impl GridTable {
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_columns(&self) -> usize {
        self.column_labels.len()
    }

    /// Cell at (row, column), if in bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Interpreted> {
        self.columns.get(column).and_then(|col| col.get(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_deserializes_camel_case() {
        let json = r#"{
            "fieldTypes": ["radio", "numeric"],
            "optionLists": ["og-1", null],
            "rowNames": ["Baseline ", "Follow-up"],
            "columnNames": ["Answer", "Score"]
        }"#;
        let template: GridTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.field_type_at(0), Some(FieldType::Radio));
        assert_eq!(template.field_type_at(1), Some(FieldType::Numeric));
        assert_eq!(template.field_type_at(2), None);
        assert_eq!(template.option_list_at(0), Some("og-1"));
        assert_eq!(template.option_list_at(1), None);
        assert_eq!(template.row_names.len(), 2);
    }

    #[test]
    fn test_unknown_sub_field_type() {
        let template = GridTemplate {
            field_types: vec!["signature".to_string()],
            option_lists: vec![None],
            row_names: vec![],
            column_names: vec![],
        };
        assert_eq!(template.field_type_at(0), Some(FieldType::Unknown));
    }
}
