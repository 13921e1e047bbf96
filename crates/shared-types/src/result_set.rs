//! Result-set abstraction: ordered, index-addressable rows of
//! heterogeneously-typed cells.
//!
//! The result set itself is owned by an external collaborator (the query
//! layer); this core only requires lossless, type-preserving string
//! serialization per cell so encrypted cells can be restored to their
//! original variant.

use serde::{Deserialize, Serialize};

use crate::errors::RowElementError;

/// One typed cell of a result-set row.
///
/// `value_as_string` and [`RowElement::from_tag_and_value`] form a
/// lossless round trip for every variant; `f64` uses Rust's shortest
/// round-trip formatting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RowElement {
    String(String),
    Integer(i64),
    Double(f64),
    /// Zoned timestamp kept verbatim as text; the query layer owns the format
    Timestamp(String),
    Json(serde_json::Value),
}

impl RowElement {
    /// Type tag prepended to the serialized value before encryption.
    pub fn type_tag(&self) -> &'static str {
        match self {
            RowElement::String(_) => "string",
            RowElement::Integer(_) => "integer",
            RowElement::Double(_) => "double",
            RowElement::Timestamp(_) => "timestamp",
            RowElement::Json(_) => "json",
        }
    }

    /// Lossless string serialization of the cell value.
    pub fn value_as_string(&self) -> String {
        match self {
            RowElement::String(value) => value.clone(),
            RowElement::Integer(value) => value.to_string(),
            RowElement::Double(value) => value.to_string(),
            RowElement::Timestamp(value) => value.clone(),
            RowElement::Json(value) => value.to_string(),
        }
    }

    /// Reconstruct a cell from its type tag and serialized value.
    pub fn from_tag_and_value(tag: &str, value: &str) -> Result<Self, RowElementError> {
        match tag {
            "string" => Ok(RowElement::String(value.to_owned())),
            "integer" => Ok(RowElement::Integer(value.parse()?)),
            "double" => Ok(RowElement::Double(value.parse()?)),
            "timestamp" => Ok(RowElement::Timestamp(value.to_owned())),
            "json" => Ok(RowElement::Json(serde_json::from_str(value)?)),
            other => Err(RowElementError::UnknownTypeTag(other.to_owned())),
        }
    }
}

/// One result-set row: an ordered list of cells.
pub type Row = Vec<RowElement>;

/// Named column of a result set; `path` addresses the source query node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub path: String,
}

impl Column {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Ordered rows plus their column schema. One column is designated as
/// the record-identifier column by the caller, by index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Index of the first column with the given name, if any.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}
