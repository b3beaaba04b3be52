//! Combat resolution for Skirmish.
//!
//! This crate is the rules layer: a single pure function mapping one
//! [`CombatRequest`] to one [`CombatResult`]. No I/O, no shared state, no
//! locking — the resolver is deterministic and reentrant, so the server can
//! call it from any number of connection tasks concurrently.

use skirmish_protocol::{
    CombatEvent, CombatRequest, CombatResult, EventKind, PlayerState,
};

/// The only action verb that currently produces events.
pub const ATTACK_ACTION: &str = "ATTACK";

/// Maximum distance, in world units, at which an attack lands.
pub const ATTACK_RANGE: f32 = 1.5;

/// Damage dealt by one landed attack.
pub const ATTACK_DAMAGE: i32 = 10;

/// Resolves one combat request into an ordered event sequence.
///
/// Actions are processed in request order. For each `ATTACK`:
///
/// 1. The attacker is looked up by id; an unknown id skips the action.
/// 2. The nearest *other* player is selected by squared Euclidean distance.
///    Ties keep the player that appears first in the request's player list.
/// 3. Within [`ATTACK_RANGE`], a `HIT` for [`ATTACK_DAMAGE`] is emitted; if
///    the hit would take the target's snapshot hp to zero or below, a
///    `DEATH` follows immediately for the same attacker/target pair.
///
/// Hp is read from the request snapshot only and never decremented, so a
/// target "killed" by one action can still be hit by a later action in the
/// same request. Total over any structurally valid request — missing ids
/// and lone players are skips, not errors.
pub fn resolve(req: &CombatRequest) -> CombatResult {
    let mut events = Vec::new();

    for act in &req.actions {
        if act.action != ATTACK_ACTION {
            continue;
        }
        let Some(attacker) = req.players.iter().find(|p| p.id == act.id)
        else {
            continue;
        };
        let Some((target, dist_sq)) = nearest_other(&req.players, attacker)
        else {
            continue;
        };
        if dist_sq > ATTACK_RANGE * ATTACK_RANGE {
            continue;
        }

        events.push(CombatEvent {
            kind: EventKind::Hit,
            attacker: attacker.id,
            target: target.id,
            damage: ATTACK_DAMAGE,
        });
        if target.hp - ATTACK_DAMAGE <= 0 {
            events.push(CombatEvent {
                kind: EventKind::Death,
                attacker: attacker.id,
                target: target.id,
                damage: 0,
            });
        }
    }

    CombatResult { events }
}

/// Finds the player nearest to `attacker`, excluding the attacker itself.
///
/// Returns the player and the squared distance. The strict `<` comparison
/// makes the scan stable: on equal distances the earlier player in the
/// list wins.
fn nearest_other<'a>(
    players: &'a [PlayerState],
    attacker: &PlayerState,
) -> Option<(&'a PlayerState, f32)> {
    let mut best: Option<(&PlayerState, f32)> = None;
    for p in players {
        if p.id == attacker.id {
            continue;
        }
        let dx = p.x - attacker.x;
        let dy = p.y - attacker.y;
        let dist_sq = dx * dx + dy * dy;
        if best.is_none_or(|(_, d)| dist_sq < d) {
            best = Some((p, dist_sq));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_protocol::{MatchId, PlayerAction, PlayerId};

    fn player(id: i32, x: f32, y: f32, hp: i32) -> PlayerState {
        PlayerState {
            id: PlayerId(id),
            x,
            y,
            hp,
        }
    }

    fn attack(id: i32) -> PlayerAction {
        PlayerAction {
            id: PlayerId(id),
            action: ATTACK_ACTION.to_string(),
            dirx: 0.0,
            diry: 0.0,
        }
    }

    fn request(
        players: Vec<PlayerState>,
        actions: Vec<PlayerAction>,
    ) -> CombatRequest {
        CombatRequest {
            match_id: MatchId(1),
            players,
            actions,
        }
    }

    #[test]
    fn test_hit_at_exact_range_boundary() {
        // Squared distance exactly 2.25 (1.5 on the x axis).
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.5, 0.0, 100)],
            vec![attack(1)],
        );
        let res = resolve(&req);
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].kind, EventKind::Hit);
        assert_eq!(res.events[0].attacker, PlayerId(1));
        assert_eq!(res.events[0].target, PlayerId(2));
        assert_eq!(res.events[0].damage, ATTACK_DAMAGE);
    }

    #[test]
    fn test_no_hit_just_past_range() {
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.5001, 0.0, 100)],
            vec![attack(1)],
        );
        assert!(resolve(&req).events.is_empty());
    }

    #[test]
    fn test_death_when_hp_at_damage() {
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.0, 0.0, 10)],
            vec![attack(1)],
        );
        let kinds: Vec<EventKind> =
            resolve(&req).events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Hit, EventKind::Death]);
    }

    #[test]
    fn test_no_death_when_hp_survives() {
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.0, 0.0, 11)],
            vec![attack(1)],
        );
        let kinds: Vec<EventKind> =
            resolve(&req).events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Hit]);
    }

    #[test]
    fn test_death_event_carries_zero_damage() {
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.0, 0.0, 5)],
            vec![attack(1)],
        );
        let res = resolve(&req);
        assert_eq!(res.events[1].kind, EventKind::Death);
        assert_eq!(res.events[1].damage, 0);
        assert_eq!(res.events[1].attacker, PlayerId(1));
        assert_eq!(res.events[1].target, PlayerId(2));
    }

    #[test]
    fn test_unknown_attacker_is_skipped() {
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.0, 0.0, 100)],
            vec![attack(99)],
        );
        assert!(resolve(&req).events.is_empty());
    }

    #[test]
    fn test_lone_player_has_no_target() {
        let req = request(vec![player(1, 0.0, 0.0, 100)], vec![attack(1)]);
        assert!(resolve(&req).events.is_empty());
    }

    #[test]
    fn test_non_attack_actions_are_skipped() {
        let mut act = attack(1);
        act.action = "DEFEND".to_string();
        let req = request(
            vec![player(1, 0.0, 0.0, 100), player(2, 1.0, 0.0, 100)],
            vec![act],
        );
        assert!(resolve(&req).events.is_empty());
    }

    #[test]
    fn test_tie_break_prefers_earlier_player() {
        // Players 2 and 3 are equidistant from player 1; 2 appears first.
        let req = request(
            vec![
                player(1, 0.0, 0.0, 100),
                player(2, 1.0, 0.0, 100),
                player(3, -1.0, 0.0, 100),
            ],
            vec![attack(1)],
        );
        let res = resolve(&req);
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].target, PlayerId(2));
    }

    #[test]
    fn test_nearest_target_wins_over_closer_listed() {
        let req = request(
            vec![
                player(1, 0.0, 0.0, 100),
                player(2, 1.4, 0.0, 100),
                player(3, 0.5, 0.0, 100),
            ],
            vec![attack(1)],
        );
        let res = resolve(&req);
        assert_eq!(res.events[0].target, PlayerId(3));
    }

    #[test]
    fn test_hp_is_snapshot_not_running_total() {
        // Two attacks on the same 10-hp target: both see the original hp,
        // so both produce HIT + DEATH.
        let req = request(
            vec![
                player(1, 0.0, 0.0, 100),
                player(2, 0.0, 1.0, 10),
                player(3, 0.0, 2.0, 100),
            ],
            vec![attack(1), attack(3)],
        );
        let kinds: Vec<EventKind> =
            resolve(&req).events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Hit,
                EventKind::Death,
                EventKind::Hit,
                EventKind::Death
            ]
        );
    }

    #[test]
    fn test_events_follow_action_order() {
        let req = request(
            vec![
                player(1, 0.0, 0.0, 100),
                player(2, 1.0, 0.0, 100),
            ],
            vec![attack(2), attack(1)],
        );
        let res = resolve(&req);
        assert_eq!(res.events.len(), 2);
        assert_eq!(res.events[0].attacker, PlayerId(2));
        assert_eq!(res.events[1].attacker, PlayerId(1));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let req = request(
            vec![
                player(1, 0.3, -0.2, 15),
                player(2, 1.1, 0.4, 10),
                player(3, -0.9, 0.9, 100),
            ],
            vec![attack(1), attack(2), attack(3)],
        );
        assert_eq!(resolve(&req), resolve(&req));
    }

    #[test]
    fn test_empty_request_yields_empty_result() {
        let req = request(Vec::new(), Vec::new());
        assert!(resolve(&req).events.is_empty());
    }
}
