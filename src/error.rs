use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CegisError {
    #[error("Invalid cegis-max-prog-size value '{value}'")]
    InvalidMaxProgSize {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Malformed command line: {0}")]
    CommandLine(String),
    #[error("An error reading or writing an options file")]
    Io(#[from] std::io::Error),
    #[error("Invalid options file: {0}")]
    OptionsFile(String),
    #[error("Command line value '{value}' of {key} would read back as unset from an options file")]
    NotRepresentable { key: String, value: String },
}

#[cfg(feature = "toml")]
impl From<toml_edit::de::Error> for CegisError {
    fn from(value: toml_edit::de::Error) -> Self {
        CegisError::OptionsFile(value.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml_edit::ser::Error> for CegisError {
    fn from(value: toml_edit::ser::Error) -> Self {
        CegisError::OptionsFile(value.to_string())
    }
}
