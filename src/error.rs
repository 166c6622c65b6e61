//! Defines the error type shared by the whole crate.
use thiserror::Error;

use std::io;


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors raised while reading a sample, growing a tree,
/// or classifying an instance.
#[derive(Debug, Error)]
pub enum Error {
    /// An instance has no value for an attribute
    /// that the tree (or the domain) requires.
    #[error("the instance has no value for attribute `{attribute}`")]
    MissingAttribute {
        /// Name of the missing attribute.
        attribute: String,
    },


    /// An instance takes a value that is not part of the domain
    /// seen during training.
    #[error("value `{value}` of attribute `{attribute}` is not in the domain")]
    UnknownValue {
        /// Name of the attribute.
        attribute: String,
        /// The offending value.
        value: String,
    },


    /// The attribute is not part of the domain.
    #[error("attribute `{0}` is not in the domain")]
    UnknownAttribute(String),


    /// The target (class) column does not exist.
    #[error("the target column `{0}` does not exist")]
    MissingTarget(String),


    /// A CSV row has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// 1-indexed line number.
        line: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },


    /// A label cannot be read as a boolean.
    #[error("line {line}: `{value}` is not a boolean label")]
    InvalidLabel {
        /// 1-indexed line (or row) number.
        line: usize,
        /// The raw label.
        value: String,
    },


    /// A `DataFrame` cell is null.
    #[error("column `{column}` is null at row {row}")]
    NullValue {
        /// Column name.
        column: String,
        /// 0-indexed row.
        row: usize,
    },


    /// I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),


    /// Failure inside `polars`.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),


    /// Failure while (de)serializing a tree.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


impl Error {
    /// Returns `true` if the error means that an instance does not fit
    /// the domain the tree was trained on.
    pub fn is_domain_mismatch(&self) -> bool {
        matches!(
            self,
            Self::MissingAttribute { .. } | Self::UnknownValue { .. }
        )
    }
}
