use hecs::World;

use crate::{Arena, Projectile};

/// Move every projectile and despawn those that left the canvas
pub fn advance_projectiles(world: &mut World, arena: &Arena) {
    let mut to_remove = Vec::new();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.advance();
        if arena.is_outside_x(&projectile.hitbox()) {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, PlayerSlot};
    use glam::Vec2;

    fn spawn_projectile(world: &mut World, x: f32, direction: f32) -> hecs::Entity {
        let owner = world.spawn(());
        world.spawn((Projectile {
            owner,
            shooter: PlayerSlot::Two,
            pos: Vec2::new(x, 315.0),
            size: Vec2::new(40.0, 20.0),
            direction,
            speed: 8.0,
        },))
    }

    #[test]
    fn test_projectile_moves_along_direction() {
        let mut world = World::new();
        let arena = Arena::new(&Config::new());
        let right = spawn_projectile(&mut world, 100.0, 1.0);
        let left = spawn_projectile(&mut world, 100.0, -1.0);

        advance_projectiles(&mut world, &arena);

        assert_eq!(world.get::<&Projectile>(right).unwrap().pos.x, 108.0);
        assert_eq!(world.get::<&Projectile>(left).unwrap().pos.x, 92.0);
    }

    #[test]
    fn test_projectile_past_left_edge_is_removed() {
        let mut world = World::new();
        let arena = Arena::new(&Config::new());
        let shot = spawn_projectile(&mut world, -41.0, -1.0);

        advance_projectiles(&mut world, &arena);

        assert!(!world.contains(shot));
    }

    #[test]
    fn test_projectile_past_right_edge_is_removed() {
        let mut world = World::new();
        let arena = Arena::new(&Config::new());
        let shot = spawn_projectile(&mut world, 795.0, 1.0);

        advance_projectiles(&mut world, &arena);

        assert!(!world.contains(shot));
    }

    #[test]
    fn test_projectile_partly_on_screen_survives() {
        let mut world = World::new();
        let arena = Arena::new(&Config::new());
        let shot = spawn_projectile(&mut world, -20.0, -1.0);

        advance_projectiles(&mut world, &arena);

        assert!(world.contains(shot));
        assert_eq!(world.get::<&Projectile>(shot).unwrap().pos.x, -28.0);
    }
}
