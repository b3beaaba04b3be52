//! Wire protocol for Skirmish.
//!
//! This crate defines the "language" that clients and the combat service
//! speak:
//!
//! - **Types** ([`CombatRequest`], [`CombatResult`], [`CombatEvent`], etc.) —
//!   the message structures that travel on the wire.
//! - **Framing** ([`LineFramer`]) — how a raw TCP byte stream is cut into
//!   discrete newline-delimited payloads.
//! - **Codec** ([`Codec`] trait, [`JsonLineCodec`]) — how payloads are
//!   converted to/from typed messages.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the resolver
//! (combat rules). It doesn't know about sockets or tasks — it only knows
//! how to frame, serialize, and deserialize messages.
//!
//! ```text
//! Transport (byte chunks) → Framer (payloads) → Codec (CombatRequest)
//! ```

mod codec;
mod error;
mod framing;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonLineCodec;
pub use error::ProtocolError;
pub use framing::LineFramer;
pub use types::{
    CombatEvent, CombatRequest, CombatResult, EventKind, MatchId, PlayerAction,
    PlayerId, PlayerState,
};
