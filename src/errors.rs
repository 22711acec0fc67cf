use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("writing a file")]
    Write,
    #[error("creating a directory")]
    Mkdir,
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(
    code(spacefurnio::io),
    help("Check file permissions, disk space, or that the path is correct.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("Unable to serialize package manifest for '{path}'")]
#[diagnostic(code(spacefurnio::manifest))]
pub struct ManifestError {
    pub path: std::path::PathBuf,
    #[source]
    pub source: serde_json::Error,
}
impl ManifestError {
    pub fn new(path: std::path::PathBuf, error: serde_json::Error) -> Self {
        Self {
            path,
            source: error,
        }
    }
}
