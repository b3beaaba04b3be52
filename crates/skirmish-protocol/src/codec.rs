//! Codec trait and implementations for serializing/deserializing messages.
//!
//! A codec converts between typed messages and the payload bytes that sit
//! between newline delimiters. The server doesn't care how payloads are
//! serialized — it only needs something implementing [`Codec`]. Currently
//! that is [`JsonLineCodec`]; a binary codec could be swapped in without
//! touching the handler or transport.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode messages to framed bytes and decode payloads
/// back into messages.
///
/// `Send + Sync + 'static` because the codec is shared across per-connection
/// tasks on the Tokio runtime.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a complete wire frame, including the
    /// trailing delimiter if the wire format has one.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes one delimiter-free payload back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the payload is malformed,
    /// truncated, or doesn't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        payload: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonLineCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] for the newline-delimited JSON wire format.
///
/// `encode` appends the `\n` frame delimiter, so an encoded response can be
/// written to the socket as-is and a client reading line-by-line sees one
/// complete frame. Compact JSON never contains a raw newline, so the
/// delimiter is unambiguous.
///
/// Behind the `json` feature flag (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLineCodec;

#[cfg(feature = "json")]
impl Codec for JsonLineCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        let mut frame =
            serde_json::to_vec(value).map_err(ProtocolError::Encode)?;
        frame.push(b'\n');
        Ok(frame)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        payload: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(payload).map_err(ProtocolError::Decode)
    }
}
