use hecs::World;

use crate::{Arena, Blocked, Body, Config, Jumps, Players};

/// Apply gravity, land on the floor and wrap across the side edges
pub fn integrate_bodies(world: &mut World, players: &Players, arena: &Arena, config: &Config) {
    for (_slot, entity) in players.iter() {
        let Ok((body, jumps, blocked)) =
            world.query_one_mut::<(&mut Body, &mut Jumps, &Blocked)>(entity)
        else {
            continue;
        };

        // Head against the opponent: no further upward travel
        if blocked.top && body.dy < 0.0 {
            body.dy = 0.0;
        }

        body.dy += config.gravity;
        body.pos.y += body.dy;

        if body.pos.y + body.height >= arena.floor.top() {
            body.land_on(arena.floor.top());
            jumps.reset();
        } else {
            body.on_ground = false;
        }

        body.pos.x = arena.wrap_x(body.pos.x, body.width);
    }
}
