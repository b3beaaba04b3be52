//! Core protocol types for Skirmish's wire format.
//!
//! Every type here is part of the wire contract: requests arrive as one
//! JSON object per line, responses leave the same way. Field names are the
//! wire names — renaming a field here is a protocol break.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A player's identifier within one request.
///
/// Newtype over `i32` so a player id can't be confused with an hp or damage
/// value in a signature. `#[serde(transparent)]` keeps the wire form a bare
/// number — `PlayerId(7)` serializes as `7`, not `{"0":7}`.
///
/// Uniqueness is only expected *within* a single request's player set; it is
/// not enforced. Duplicate ids resolve to the first matching entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// Identifier of the match a request belongs to.
///
/// Carried through for correlation only — requests are stateless and the
/// service keeps no per-match data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub i64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// One player's position and health at the moment the request was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The player's id, referenced by [`PlayerAction::id`].
    pub id: PlayerId,
    /// World-space x coordinate.
    pub x: f32,
    /// World-space y coordinate.
    pub y: f32,
    /// Hit points in the request snapshot. Never mutated by resolution.
    pub hp: i32,
}

/// One action a player attempted this request.
///
/// `action` is a free-form verb rather than a closed enum: unknown verbs are
/// skipped during resolution, not rejected at decode time, so older servers
/// tolerate newer clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAction {
    /// Id of the acting player.
    pub id: PlayerId,
    /// The action verb. Only `"ATTACK"` currently produces events.
    pub action: String,
    /// Aim direction, x component. Carried on the wire but unused by
    /// current resolution logic.
    pub dirx: f32,
    /// Aim direction, y component. See `dirx`.
    pub diry: f32,
}

/// A complete combat request: one self-contained snapshot plus the actions
/// to resolve against it.
///
/// Immutable after decode; has no relationship to any other request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRequest {
    /// The match this request belongs to.
    pub match_id: MatchId,
    /// All players in the snapshot.
    pub players: Vec<PlayerState>,
    /// Actions to resolve, in order.
    pub actions: Vec<PlayerAction>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// What kind of combat event occurred.
///
/// Serialized as `"HIT"` / `"DEATH"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// An attack landed.
    Hit,
    /// The hit reduced the target's snapshot hp to zero or below.
    Death,
}

/// A single combat outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Event kind. Wire name is `type`.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// The attacking player.
    pub attacker: PlayerId,
    /// The player that was hit.
    pub target: PlayerId,
    /// Damage dealt. Zero for `DEATH` events.
    pub damage: i32,
}

/// The response to one [`CombatRequest`].
///
/// `events` preserves insertion order: events appear in the order the
/// actions that produced them were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    /// Ordered events produced by resolution. May be empty.
    pub events: Vec<CombatEvent>,
}
