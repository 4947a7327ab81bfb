pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the duel simulation
///
/// Does nothing once the match has an outcome. Pressed keys are left for the
/// caller to clear.
pub fn step(
    world: &mut World,
    players: &Players,
    arena: &Arena,
    config: &Config,
    input: &InputState,
    events: &mut Events,
    outcome: &mut Outcome,
) {
    if outcome.is_over() {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Gravity, floor and screen wrap
    integrate_bodies(world, players, arena, config);

    // 2. Shots already in flight
    advance_projectiles(world, arena);

    // 3. Walk, jump, crouch, fire
    apply_controls(world, players, input, config, events);

    // 4. Fighter vs fighter
    resolve_contacts(world, players, config, events);

    // 5. Shots vs fighters
    resolve_projectile_hits(world, players, config, events);

    // 6. Knockouts
    check_outcome(world, players, outcome, events);
}

/// Helper to create a fighter entity from config
pub fn create_player(world: &mut World, slot: PlayerSlot, pos: Vec2, config: &Config) -> hecs::Entity {
    let fighter = Fighter {
        slot,
        controls: Controls::for_slot(slot),
        tint: match slot {
            PlayerSlot::One => Tint::Normal,
            PlayerSlot::Two => Tint::Inverted,
        },
        speed: config.player_speed,
        jump_strength: config.jump_strength,
    };
    let body = Body::new(pos, config.player_width, config.player_height, config.crouch_height);
    world.spawn((
        fighter,
        body,
        Jumps::new(config.max_jumps),
        Health::new(config.max_health),
        Blocked::default(),
    ))
}
