use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {}", .source)]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Unknown current class '{}' for current '{}'", .class, .current)]
    UnknownCurrentType { class: String, current: String },
    #[error("Missing parameter '{}' in current '{}'", .field, .current)]
    MissingParameter { field: String, current: String },
    #[error("Cannot load current parameter file {:?} included by neuron '{}': {}", .path, .neuron, .what)]
    IncludeLoad {
        neuron: String,
        path: PathBuf,
        what: String,
    },
    #[error("Cannot load model file {:?}: {}", .path, .what)]
    FileLoad { path: PathBuf, what: String },
    #[error("Schema error: {}", .what)]
    Schema { what: String },
    #[error("Parse error: {}", .what)]
    Parse { what: String },
    #[error("In neuron '{}': {}", .neuron, .source)]
    Neuron {
        neuron: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Strip the neuron context, if any.
    pub fn root(&self) -> &Error {
        match self {
            Error::Neuron { source, .. } => source.root(),
            e => e,
        }
    }
}

pub fn schema_error<T: Into<String>>(what: T) -> Error {
    Error::Schema { what: what.into() }
}

pub fn parse_error<T: Into<String>>(what: T) -> Error {
    Error::Parse { what: what.into() }
}

pub fn missing<F: Into<String>, C: Into<String>>(field: F, current: C) -> Error {
    Error::MissingParameter {
        field: field.into(),
        current: current.into(),
    }
}
