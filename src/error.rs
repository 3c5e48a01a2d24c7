//! Errors surfaced to the host. Arithmetic itself never fails; a division by
//! zero shows up as the `Error` display instead.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unrecognized key `{0}`")]
    UnknownKey(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}
