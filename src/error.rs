// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Asset(AssetError),
    /// A preview handle that was never opened or is already closed.
    UnknownSession(u64),
}

/// Failures while resolving bundled image assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No asset is bundled under this name.
    Missing(String),

    /// The asset exists but its header could not be read.
    Decode { name: String, message: String },
}

impl AssetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetError::Missing(_) => "error-asset-missing",
            AssetError::Decode { .. } => "error-asset-decode",
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing(name) => write!(f, "No asset named '{}'", name),
            AssetError::Decode { name, message } => {
                write!(f, "Cannot read asset '{}': {}", name, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
            Error::UnknownSession(id) => write!(f, "No open preview session #{}", id),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
