//! Error types for the contact lookup service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these escape the store's public contract: the store reports setup and
//! initialization failures as booleans and logs the underlying error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding a card file or extracting fields from a card record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// A content line has no `:` between the name and the value
    #[error("line {line}: missing ':' separator")]
    MissingSeparator { line: usize },

    /// A content line has an empty or malformed property name
    #[error("line {line}: invalid property name '{name}'")]
    InvalidPropertyName { line: usize, name: String },

    /// A `BEGIN:VCARD` appeared while a record was still open
    #[error("line {line}: nested BEGIN:VCARD")]
    NestedRecord { line: usize },

    /// An `END:VCARD` appeared with no open record
    #[error("line {line}: END:VCARD without matching BEGIN:VCARD")]
    UnmatchedEnd { line: usize },

    /// The input ended while a record was still open
    #[error("record starting at line {line} is not closed with END:VCARD")]
    UnterminatedRecord { line: usize },

    /// A field is present in the record but carries no values
    #[error("field '{0}' has no values")]
    EmptyField(String),

    /// A field carries a text payload where a structured payload was required
    #[error("field '{0}' is not a structured value")]
    NotStructured(String),

    /// A structured payload has fewer components than required
    #[error("field '{field}' has no component at index {index}")]
    MissingComponent { field: String, index: usize },

    /// The full-name value contains no name tokens
    #[error("full name is blank")]
    BlankName,
}

/// Errors that can occur while configuring or initializing a contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The path does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// The path exists but is not a regular file
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    /// The path does not carry the required extension
    #[error("Expected a .{expected} file: {path}")]
    WrongExtension { path: PathBuf, expected: String },

    /// `initialize` was called before a valid path was accepted
    #[error("Contacts file path not set")]
    PathNotSet,

    /// The file could not be read
    #[error("Failed to read contacts file: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be decoded into card records
    #[error("Failed to decode contacts file: {0}")]
    Decode(#[from] CardError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Command-line arguments (or their environment fallbacks) could not be read
    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

/// Convenience type alias for Results with CardError
pub type CardResult<T> = Result<T, CardError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
