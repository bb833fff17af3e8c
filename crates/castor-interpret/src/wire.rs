//! Export-compatible serialization of interpreted values.
//!
//! Downstream consumers of the original export pipeline expect in-band
//! markers: `"Error"` for degraded values, `"Missing value not
//! recognized"` for unclassifiable missings, negative sentinel codes and
//! pseudo-dates for recognized ones, and `null` where a number is NaN.
//! Those literals exist only here; everywhere else the outcome stays
//! tagged.

use serde_json::{json, Value};

use castor_model::{FieldType, FieldValue, GridTable, Interpreted};

/// In-band marker for degraded values.
pub const ERROR_MARKER: &str = "Error";
/// In-band marker for a missing value with no recognized reason.
pub const NOT_RECOGNIZED: &str = "Missing value not recognized";

/// Render an interpreted outcome in the export-compatible JSON shape.
///
/// The field type is needed because numberdate fields render the
/// unrecognized-missing marker as a pair.
pub fn to_json(value: &Interpreted, field_type: FieldType) -> Value {
    match value {
        Interpreted::Failed => json!(ERROR_MARKER),
        Interpreted::Unrecognized => {
            if field_type == FieldType::Numberdate {
                json!([NOT_RECOGNIZED, NOT_RECOGNIZED])
            } else {
                json!(NOT_RECOGNIZED)
            }
        }
        Interpreted::Missing { sentinel, .. } => sentinel_to_json(sentinel),
        Interpreted::Value(value) => value_to_json(value),
    }
}

fn sentinel_to_json(value: &FieldValue) -> Value {
    match value {
        // sentinel codes are integers on the wire, unlike parsed reals
        FieldValue::NumberDate { number, date } => json!([*number as i64, date]),
        other => value_to_json(other),
    }
}

fn value_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Number(number) if number.is_nan() => Value::Null,
        FieldValue::Number(number) => json!(number),
        FieldValue::Int(int) => json!(int),
        FieldValue::Text(text) => json!(text),
        FieldValue::NumberDate { number, date } => {
            let number = if number.is_nan() {
                Value::Null
            } else {
                json!(number)
            };
            json!([number, date])
        }
        FieldValue::Table(table) => table_to_json(table),
    }
}

fn table_to_json(table: &GridTable) -> Value {
    let data: Vec<Value> = (0..table.n_rows())
        .map(|row| {
            let cells: Vec<Value> = (0..table.n_columns())
                .map(|col| {
                    let cell = table.cell(row, col).unwrap_or(&Interpreted::Failed);
                    let cell_type = table
                        .column_types
                        .get(col)
                        .copied()
                        .unwrap_or(FieldType::Unknown);
                    to_json(cell, cell_type)
                })
                .collect();
            json!(cells)
        })
        .collect();
    json!({
        "rows": table.row_labels,
        "columns": table.column_labels,
        "data": data,
    })
}
