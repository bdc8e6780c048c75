//! Error types for docxstyle library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docxstyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a package and building a profile.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("File not found")]
    FileNotFound(PathBuf),

    /// The file format is not recognized as a DOCX package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The ZIP container could not be read.
    #[error("Package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A required package part is missing.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A package part is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Encoding error.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
