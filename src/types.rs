//! Core data model types.
//!
//! Ingestion loads a CSV file into an in-memory [`DataSet`] shaped by a [`Schema`] (a list of
//! typed [`Field`]s). Every cleaning stage in [`crate::processing`] takes a [`DataSet`] and
//! returns a new one.

use std::fmt;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of fields describing the shape of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed cell in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// True-missing value (empty cell in the source file).
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float. Ingestion never produces non-finite values.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Convenience constructor for text cells.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Utf8(s.into())
    }

    /// Returns the string slice for text cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Renders the cell the way it is written to CSV; `Null` renders as an empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Utf8(s) => f.write_str(s),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Create a new dataset by applying `mapper` to every row.
    ///
    /// The returned dataset preserves the original schema.
    ///
    /// # Panics
    ///
    /// Panics if `mapper` returns a row with a different length than the schema field count.
    pub fn map_rows<F>(&self, mut mapper: F) -> Self
    where
        F: FnMut(&[Value]) -> Vec<Value>,
    {
        let expected_len = self.schema.fields.len();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let out = mapper(row.as_slice());
                assert!(
                    out.len() == expected_len,
                    "mapped row length {} does not match schema length {}",
                    out.len(),
                    expected_len
                );
                out
            })
            .collect();

        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Consume the dataset and replace every cell of column `idx` with `mapper(cell)`.
    ///
    /// Other columns are moved through untouched. An out-of-range `idx` is a no-op.
    pub fn map_column<F>(mut self, idx: usize, mut mapper: F) -> Self
    where
        F: FnMut(Value) -> Value,
    {
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(idx) {
                let old = std::mem::replace(cell, Value::Null);
                *cell = mapper(old);
            }
        }
        self
    }

    /// Consume the dataset and declare column `idx` as `data_type`.
    ///
    /// Stages call this when they change what a column holds. An out-of-range `idx` is a no-op.
    pub fn with_column_type(mut self, idx: usize, data_type: DataType) -> Self {
        if let Some(field) = self.schema.fields.get_mut(idx) {
            field.data_type = data_type;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("score", DataType::Float64),
            Field::new("name", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Float64(1.5), Value::text("a")],
            vec![Value::Int64(2), Value::Null, Value::text("b")],
            vec![Value::Int64(3), Value::Float64(3.0), Value::text("c")],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn schema_index_of_works() {
        let ds = sample_dataset();
        assert_eq!(ds.schema.index_of("id"), Some(0));
        assert_eq!(ds.schema.index_of("name"), Some(2));
        assert_eq!(ds.schema.index_of("missing"), None);
        assert_eq!(ds.schema.field_names().collect::<Vec<_>>(), vec!["id", "score", "name"]);
    }

    #[test]
    fn display_renders_csv_cells() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Int64(-4).to_string(), "-4");
        assert_eq!(Value::Float64(3.0).to_string(), "3");
        assert_eq!(Value::Float64(2.25).to_string(), "2.25");
        assert_eq!(Value::text("x y").to_string(), "x y");
    }

    #[test]
    fn filter_rows_preserves_schema_and_order() {
        let ds = sample_dataset();
        let out = ds.filter_rows(|row| !row[1].is_null());
        assert_eq!(out.schema, ds.schema);
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0][0], Value::Int64(1));
        assert_eq!(out.rows[1][0], Value::Int64(3));
        // Original unchanged
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn map_column_only_touches_target_column() {
        let ds = sample_dataset();
        let out = ds.clone().map_column(2, |v| match v {
            Value::Utf8(s) => Value::Utf8(s.to_uppercase()),
            other => other,
        });
        assert_eq!(
            out.column(2).collect::<Vec<_>>(),
            vec![&Value::text("A"), &Value::text("B"), &Value::text("C")]
        );
        assert_eq!(out.rows[1][1], Value::Null);
        assert_eq!(out.rows[0][0], ds.rows[0][0]);
    }

    #[test]
    fn map_column_out_of_range_is_noop() {
        let ds = sample_dataset();
        let out = ds.clone().map_column(9, |_| Value::Null);
        assert_eq!(out, ds);
    }

    #[test]
    fn with_column_type_updates_only_the_schema() {
        let ds = sample_dataset();
        let out = ds.clone().with_column_type(1, DataType::Utf8);
        assert_eq!(out.schema.fields[1].data_type, DataType::Utf8);
        assert_eq!(out.schema.fields[0].data_type, DataType::Int64);
        assert_eq!(out.rows, ds.rows);
        assert_eq!(ds.clone().with_column_type(9, DataType::Utf8), ds);
    }

    #[test]
    #[should_panic(expected = "mapped row length")]
    fn map_rows_panics_if_mapper_returns_wrong_arity() {
        let ds = sample_dataset();
        let _ = ds.map_rows(|_row| vec![Value::Int64(1)]);
    }
}
