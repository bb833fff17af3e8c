//! Grid sub-table reconstruction.
//!
//! A grid's raw value is a JSON object whose values are the grid rows;
//! the field's summary template declares the sub-field type and option
//! list of each column plus the row/column labels. Reconstruction builds
//! a rectangular table, orients it so columns line up with the declared
//! field types, and interprets every cell independently through the full
//! dispatch. Any failure anywhere discards the partial table and degrades
//! in-band to [`Interpreted::Failed`].

use thiserror::Error;

use castor_model::{
    CastorError, FieldDescriptor, FieldType, FieldValue, GridTable, GridTemplate, Interpreted,
    OptionGroupResolver, StudyConfig,
};

use crate::interpret::interpret;

#[derive(Debug, Error)]
enum GridError {
    #[error("malformed grid template: {0}")]
    Template(serde_json::Error),
    #[error("malformed grid payload: {0}")]
    Payload(serde_json::Error),
    #[error("grid payload is not a JSON object of rows")]
    PayloadShape,
    #[error("grid cell is not a scalar")]
    CellShape,
    #[error("grid rows have unequal lengths")]
    Ragged,
    #[error("square grid with no label-homogeneous axis; orientation is ambiguous")]
    AmbiguousOrientation,
    #[error("template declares {expected} column types but the table has {actual} columns")]
    ColumnMismatch { expected: usize, actual: usize },
    #[error("template labels do not match the table dimensions")]
    LabelMismatch,
    #[error(transparent)]
    Cell(#[from] CastorError),
}

/// Interpret a grid field. Empty raw values and fields without a summary
/// template have no table to reconstruct and map to NaN.
pub(crate) fn interpret_grid(
    field: &FieldDescriptor,
    raw: &str,
    config: &StudyConfig,
    groups: &dyn OptionGroupResolver,
) -> Interpreted {
    let template = field.summary_template.as_deref().unwrap_or("");
    if raw.is_empty() || template.is_empty() {
        return Interpreted::Value(FieldValue::nan());
    }
    match reconstruct(field, raw, template, config, groups) {
        Ok(table) => Interpreted::Value(FieldValue::Table(table)),
        Err(error) => {
            tracing::warn!(
                field_id = %field.id,
                field_name = %field.name,
                %error,
                "grid reconstruction failed"
            );
            Interpreted::Failed
        }
    }
}

fn reconstruct(
    field: &FieldDescriptor,
    raw: &str,
    template_json: &str,
    config: &StudyConfig,
    groups: &dyn OptionGroupResolver,
) -> Result<GridTable, GridError> {
    let template: GridTemplate =
        serde_json::from_str(template_json).map_err(GridError::Template)?;
    let rows = parse_rows(raw)?;

    let width = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != width) {
        return Err(GridError::Ragged);
    }

    // Orient the table so that columns line up with the template's
    // fieldTypes. A non-square table is transposed when its width does
    // not match; a square table is disambiguated by which axis has
    // labels sharing the same first whitespace-delimited token.
    let n_field_types = template.field_types.len();
    let (table, row_names, col_names) = if rows.len() != width {
        if n_field_types == width {
            (rows, &template.row_names, &template.column_names)
        } else {
            (transpose(rows), &template.column_names, &template.row_names)
        }
    } else if homogeneous_prefix(&template.column_names) {
        (transpose(rows), &template.column_names, &template.row_names)
    } else if homogeneous_prefix(&template.row_names) {
        (rows, &template.row_names, &template.column_names)
    } else {
        return Err(GridError::AmbiguousOrientation);
    };

    let width = table.first().map_or(0, Vec::len);
    if n_field_types != width {
        return Err(GridError::ColumnMismatch {
            expected: n_field_types,
            actual: width,
        });
    }
    if row_names.len() != table.len() || col_names.len() != width {
        return Err(GridError::LabelMismatch);
    }

    let mut column_types = Vec::with_capacity(width);
    let mut columns = Vec::with_capacity(width);
    for col in 0..width {
        let field_type = template
            .field_type_at(col)
            .ok_or(GridError::ColumnMismatch {
                expected: n_field_types,
                actual: width,
            })?;
        let sub_field = cell_field(field, field_type, template.option_list_at(col));
        let mut cells = Vec::with_capacity(table.len());
        for row in &table {
            cells.push(interpret(&sub_field, &row[col], config, groups)?);
        }
        column_types.push(field_type);
        columns.push(cells);
    }

    Ok(GridTable {
        row_labels: row_names.iter().map(|name| name.trim().to_string()).collect(),
        column_labels: col_names.iter().map(|name| name.trim().to_string()).collect(),
        column_types,
        columns,
    })
}

/// Parse the raw payload into rows of raw cell strings, keeping the
/// export's row order.
fn parse_rows(raw: &str) -> Result<Vec<Vec<String>>, GridError> {
    let payload: serde_json::Value = serde_json::from_str(raw).map_err(GridError::Payload)?;
    let rows = payload.as_object().ok_or(GridError::PayloadShape)?;
    rows.values().map(row_cells).collect()
}

fn row_cells(row: &serde_json::Value) -> Result<Vec<String>, GridError> {
    match row {
        serde_json::Value::Array(items) => items.iter().map(scalar_cell).collect(),
        serde_json::Value::Object(map) => map.values().map(scalar_cell).collect(),
        _ => Err(GridError::PayloadShape),
    }
}

fn scalar_cell(value: &serde_json::Value) -> Result<String, GridError> {
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text.clone()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(GridError::CellShape),
    }
}

fn transpose(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.first().map_or(0, Vec::len);
    let mut out: Vec<Vec<String>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
    for row in rows {
        for (col, cell) in row.into_iter().enumerate() {
            out[col].push(cell);
        }
    }
    out
}

/// True when every label starts with the same first whitespace-delimited
/// token (e.g. "Visit 1", "Visit 2", ...).
fn homogeneous_prefix(names: &[String]) -> bool {
    let mut prefixes = names
        .iter()
        .map(|name| name.split_whitespace().next().unwrap_or(""));
    match prefixes.next() {
        Some(first) => prefixes.all(|prefix| prefix == first),
        None => false,
    }
}

/// Synthetic descriptor for one grid cell, carrying the column's declared
/// sub-field type and option list.
fn cell_field(
    parent: &FieldDescriptor,
    field_type: FieldType,
    option_list: Option<&str>,
) -> FieldDescriptor {
    let mut sub = FieldDescriptor::new(
        parent.id.clone(),
        format!("{} - grid object", parent.name),
        field_type,
    );
    if let Some(group_id) = option_list {
        sub = sub.with_option_group(group_id);
    }
    sub
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string(), "e".to_string(), "f".to_string()],
        ];
        let out = transpose(rows);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], vec!["a".to_string(), "d".to_string()]);
        assert_eq!(out[2], vec!["c".to_string(), "f".to_string()]);
    }

    #[test]
    fn test_homogeneous_prefix() {
        let visits = vec!["Visit 1".to_string(), "Visit 2".to_string()];
        assert!(homogeneous_prefix(&visits));

        let mixed = vec!["Visit 1".to_string(), "Baseline".to_string()];
        assert!(!homogeneous_prefix(&mixed));

        assert!(!homogeneous_prefix(&[]));
    }

    #[test]
    fn test_scalar_cells() {
        assert_eq!(scalar_cell(&serde_json::Value::Null).unwrap(), "");
        assert_eq!(scalar_cell(&serde_json::json!("x")).unwrap(), "x");
        assert_eq!(scalar_cell(&serde_json::json!(7)).unwrap(), "7");
        assert!(scalar_cell(&serde_json::json!([1])).is_err());
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let rows = parse_rows(r#"{"1": ["a"], "0": ["b"]}"#).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string()], vec!["b".to_string()]]);
    }
}
