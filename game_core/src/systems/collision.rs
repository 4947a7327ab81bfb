use hecs::{Entity, World};

use crate::{Aabb, Blocked, Body, Config, ContactRule, Events, Health, Jumps, Players};

/// Resolve fighter-vs-fighter overlap with the configured contact rule
pub fn resolve_contacts(world: &mut World, players: &Players, config: &Config, events: &mut Events) {
    match config.contact_rule {
        ContactRule::Block => {
            // Player 1 resolves first, so stacking order can differ by slot
            events.players_touching |= block_against(world, players.one, players.two);
            events.players_touching |= block_against(world, players.two, players.one);
        }
        ContactRule::Damage => {
            events.players_touching |= damage_on_contact(world, players, config.contact_damage);
        }
    }
}

/// Resolve `mover` against `other`; returns whether they overlapped
fn block_against(world: &mut World, mover: Entity, other: Entity) -> bool {
    let other_box = match world.get::<&Body>(other) {
        Ok(body) => body.hitbox(),
        Err(_) => return false,
    };

    match world.query_one_mut::<(&mut Body, &mut Jumps, &mut Blocked)>(mover) {
        Ok((body, jumps, blocked)) => resolve_block(body, jumps, blocked, &other_box),
        Err(_) => false,
    }
}

/// Block or stack a body against another hitbox along the axis of least overlap
///
/// Sideways contact only sets a block flag; no position correction is applied.
/// Vertical contact from above rests a falling or resting body on top of the
/// other; from below it blocks upward travel. Flags are recomputed every call.
pub fn resolve_block(body: &mut Body, jumps: &mut Jumps, blocked: &mut Blocked, other: &Aabb) -> bool {
    let own = body.hitbox();
    blocked.clear();
    let Some(depth) = own.overlap_depth(other) else {
        return false;
    };

    if depth.x < depth.y {
        if own.min.x < other.min.x {
            blocked.right = true;
        } else {
            blocked.left = true;
        }
    } else if own.min.y < other.min.y {
        // A body jumping off the other's head keeps its upward velocity
        if body.dy >= 0.0 {
            body.land_on(other.min.y);
            jumps.reset();
        }
    } else {
        blocked.top = true;
    }

    true
}

/// Both fighters lose `damage` while their hitboxes overlap
fn damage_on_contact(world: &mut World, players: &Players, damage: u32) -> bool {
    let boxes = (
        world.get::<&Body>(players.one).map(|b| b.hitbox()),
        world.get::<&Body>(players.two).map(|b| b.hitbox()),
    );
    let (Ok(one), Ok(two)) = boxes else {
        return false;
    };
    if !one.overlaps(&two) {
        return false;
    }

    for (_slot, entity) in players.iter() {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.take_damage(damage);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_player, PlayerSlot};
    use glam::Vec2;

    fn setup(config: &Config, p1: Vec2, p2: Vec2) -> (World, Players) {
        let mut world = World::new();
        let one = create_player(&mut world, PlayerSlot::One, p1, config);
        let two = create_player(&mut world, PlayerSlot::Two, p2, config);
        (world, Players { one, two })
    }

    fn blocked(world: &World, entity: Entity) -> Blocked {
        *world.get::<&Blocked>(entity).unwrap()
    }

    #[test]
    fn test_stack_when_landing_on_top() {
        let mut body = Body::new(Vec2::new(100.0, 255.0), 50.0, 50.0, 30.0);
        body.dy = 3.0;
        let mut jumps = Jumps { used: 2, max: 2 };
        let mut flags = Blocked::default();
        let other = Aabb::from_pos_size(Vec2::new(110.0, 300.0), Vec2::new(50.0, 50.0));

        assert!(resolve_block(&mut body, &mut jumps, &mut flags, &other));

        assert_eq!(body.pos.y, 250.0, "rests at other.y - height");
        assert_eq!(body.dy, 0.0);
        assert!(body.on_ground);
        assert_eq!(jumps.used, 0);
        assert_eq!(flags, Blocked::default());
    }

    #[test]
    fn test_rising_body_is_not_pulled_back_down() {
        let mut body = Body::new(Vec2::new(100.0, 250.5), 50.0, 50.0, 30.0);
        body.dy = -10.0;
        let mut jumps = Jumps { used: 1, max: 2 };
        let mut flags = Blocked::default();
        let other = Aabb::from_pos_size(Vec2::new(100.0, 300.0), Vec2::new(50.0, 50.0));

        assert!(resolve_block(&mut body, &mut jumps, &mut flags, &other));

        assert_eq!(body.dy, -10.0);
        assert_eq!(body.pos.y, 250.5);
        assert_eq!(jumps.used, 1);
    }

    #[test]
    fn test_head_bump_from_below_blocks_top() {
        let mut body = Body::new(Vec2::new(100.0, 295.0), 50.0, 50.0, 30.0);
        let mut jumps = Jumps::new(2);
        let mut flags = Blocked::default();
        let other = Aabb::from_pos_size(Vec2::new(105.0, 250.0), Vec2::new(50.0, 50.0));

        assert!(resolve_block(&mut body, &mut jumps, &mut flags, &other));

        assert!(flags.top);
        assert_eq!(body.pos.y, 295.0, "no correction from below");
    }

    #[test]
    fn test_side_contact_blocks_toward_other() {
        let (mut world, players) = setup(&Config::new(), Vec2::new(100.0, 300.0), Vec2::new(140.0, 300.0));
        let mut events = Events::new();

        resolve_contacts(&mut world, &players, &Config::new(), &mut events);

        assert!(events.players_touching);
        let one = blocked(&world, players.one);
        let two = blocked(&world, players.two);
        assert!(one.right && !one.left && !one.top);
        assert!(two.left && !two.right && !two.top);
        assert_eq!(world.get::<&Body>(players.one).unwrap().pos.x, 100.0);
        assert_eq!(world.get::<&Body>(players.two).unwrap().pos.x, 140.0);
    }

    #[test]
    fn test_separation_clears_flags() {
        let config = Config::new();
        let (mut world, players) = setup(&config, Vec2::new(100.0, 300.0), Vec2::new(140.0, 300.0));
        let mut events = Events::new();
        resolve_contacts(&mut world, &players, &config, &mut events);

        world.get::<&mut Body>(players.two).unwrap().pos.x = 400.0;
        events.clear();
        resolve_contacts(&mut world, &players, &config, &mut events);

        assert!(!events.players_touching);
        assert_eq!(blocked(&world, players.one), Blocked::default());
        assert_eq!(blocked(&world, players.two), Blocked::default());
    }

    #[test]
    fn test_stacking_leaves_lower_player_unblocked() {
        let config = Config::new();
        let (mut world, players) = setup(&config, Vec2::new(100.0, 255.0), Vec2::new(100.0, 300.0));
        let mut events = Events::new();

        resolve_contacts(&mut world, &players, &config, &mut events);

        assert_eq!(world.get::<&Body>(players.one).unwrap().pos.y, 250.0);
        assert_eq!(
            blocked(&world, players.two),
            Blocked::default(),
            "after stacking the boxes only touch"
        );
    }

    #[test]
    fn test_damage_rule_hurts_both_once_per_frame() {
        let config = Config {
            contact_rule: ContactRule::Damage,
            ..Config::default()
        };
        let (mut world, players) = setup(&config, Vec2::new(100.0, 300.0), Vec2::new(140.0, 300.0));
        let mut events = Events::new();

        resolve_contacts(&mut world, &players, &config, &mut events);

        assert!(events.players_touching);
        assert_eq!(world.get::<&Health>(players.one).unwrap().current(), 19);
        assert_eq!(world.get::<&Health>(players.two).unwrap().current(), 19);
        assert_eq!(blocked(&world, players.one), Blocked::default());
        assert_eq!(world.get::<&Body>(players.one).unwrap().pos.x, 100.0);
    }

    #[test]
    fn test_damage_rule_ignores_distant_players() {
        let config = Config {
            contact_rule: ContactRule::Damage,
            ..Config::default()
        };
        let (mut world, players) = setup(&config, Vec2::new(100.0, 300.0), Vec2::new(600.0, 300.0));
        let mut events = Events::new();

        resolve_contacts(&mut world, &players, &config, &mut events);

        assert!(!events.players_touching);
        assert_eq!(world.get::<&Health>(players.one).unwrap().current(), 20);
    }
}
