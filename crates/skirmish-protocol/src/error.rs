//! Error types for the protocol layer.

/// Errors that can occur while framing, encoding, or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a message into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning a payload into a message).
    ///
    /// Common causes: malformed JSON, missing required fields, wrong
    /// field types.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The message is invalid at the protocol level even though it
    /// deserialized. Reserved for validation rules layered on top of the
    /// schema; the current schema has none.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
