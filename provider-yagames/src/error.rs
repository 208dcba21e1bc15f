//! Error types for the web games host provider

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Web games host provider errors
#[derive(Error, Debug)]
pub enum YaGamesError {
    /// A host payload did not match the expected document
    #[error("Failed to parse {payload} payload: {message}")]
    ParseError {
        payload: &'static str,
        message: String,
    },

    #[error(transparent)]
    BridgeError(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, YaGamesError>;

impl From<YaGamesError> for BridgeError {
    fn from(error: YaGamesError) -> Self {
        match error {
            YaGamesError::ParseError { payload, message } => {
                BridgeError::Serialization(format!("{payload}: {message}"))
            }
            YaGamesError::BridgeError(e) => e,
        }
    }
}

/// Decode a host JSON document.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    payload: &'static str,
    json: &str,
) -> Result<T> {
    serde_json::from_str(json).map_err(|e| YaGamesError::ParseError {
        payload,
        message: e.to_string(),
    })
}
