use glam::Vec2;
use hecs::World;

use crate::{Blocked, Body, Config, Events, Fighter, InputState, Jumps, Players, Projectile};

/// Apply held and pressed keys to each fighter: walk, jump, crouch, fire
pub fn apply_controls(
    world: &mut World,
    players: &Players,
    input: &InputState,
    config: &Config,
    events: &mut Events,
) {
    let mut shots = Vec::new();

    for (slot, entity) in players.iter() {
        let Ok((fighter, body, jumps, blocked)) =
            world.query_one_mut::<(&Fighter, &mut Body, &mut Jumps, &Blocked)>(entity)
        else {
            continue;
        };
        let controls = fighter.controls;

        if input.is_held(controls.left) && !blocked.left {
            body.pos.x -= fighter.speed;
        }
        if input.is_held(controls.right) && !blocked.right {
            body.pos.x += fighter.speed;
        }

        if input.was_pressed(controls.jump) && jumps.try_jump() {
            body.dy = -fighter.jump_strength;
            events.jumped.push(slot);
            log::debug!("{} jumped ({}/{})", slot.label(), jumps.used, jumps.max);
        }

        body.set_crouched(input.is_held(controls.crouch));

        if input.was_pressed(controls.fire) {
            let direction = controls.facing.sign();
            let size = Vec2::new(config.projectile_width, config.projectile_height);
            let x = if direction > 0.0 {
                body.pos.x + body.width
            } else {
                body.pos.x - size.x
            };
            let y = body.pos.y + (body.height - size.y) / 2.0;
            shots.push(Projectile {
                owner: entity,
                shooter: slot,
                pos: Vec2::new(x, y),
                size,
                direction,
                speed: config.projectile_speed,
            });
            events.fired.push(slot);
            log::debug!("{} fired", slot.label());
        }
    }

    for shot in shots {
        world.spawn((shot,));
    }
}
