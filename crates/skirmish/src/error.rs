//! Unified error type for the Skirmish service.

use skirmish_protocol::ProtocolError;
use skirmish_transport::TransportError;

/// Top-level error that wraps the layer-specific errors.
///
/// Embedders deal with this single type instead of importing errors from
/// each sub-crate. The `#[from]` attribute on each variant auto-generates
/// `From` impls, so the `?` operator converts layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum SkirmishError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy");
        let err: SkirmishError = TransportError::BindFailed(io).into();
        assert!(matches!(err, SkirmishError::Transport(_)));
        assert!(err.to_string().contains("bind failed"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err: SkirmishError =
            ProtocolError::InvalidMessage("bad".into()).into();
        assert!(matches!(err, SkirmishError::Protocol(_)));
        assert!(err.to_string().contains("bad"));
    }
}
