use hecs::World;

use crate::{Events, Health, Outcome, Players};

/// End the match once a fighter is out of health
pub fn check_outcome(world: &World, players: &Players, outcome: &mut Outcome, events: &mut Events) {
    if outcome.is_over() {
        return;
    }

    let mut survivors = Vec::new();
    for (slot, entity) in players.iter() {
        let alive = world
            .get::<&Health>(entity)
            .map(|health| health.is_alive())
            .unwrap_or(false);
        if alive {
            survivors.push(slot);
        } else {
            events.defeated.push(slot);
        }
    }

    *outcome = match survivors.as_slice() {
        [_, _] => return,
        [winner] => Outcome::Winner(*winner),
        _ => Outcome::Draw,
    };

    if let Some(message) = outcome.message() {
        log::info!("match over: {}", message);
    }
}
