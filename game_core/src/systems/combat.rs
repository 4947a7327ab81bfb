use hecs::World;

use crate::{Body, Config, Events, Health, Players, Projectile};

/// Projectiles that reach their shooter's opponent deal damage and are removed
///
/// A shot is only ever tested against the opponent, never its own shooter.
pub fn resolve_projectile_hits(world: &mut World, players: &Players, config: &Config, events: &mut Events) {
    let shots: Vec<_> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, projectile)| (entity, projectile.shooter, projectile.hitbox()))
        .collect();

    for (shot, shooter, shot_box) in shots {
        let victim_slot = shooter.opponent();
        let victim = players.get(victim_slot);

        let hit = match world.get::<&Body>(victim) {
            Ok(body) => body.hitbox().overlaps(&shot_box),
            Err(_) => false,
        };
        if !hit {
            continue;
        }

        if let Ok(mut health) = world.get::<&mut Health>(victim) {
            let applied = health.take_damage(config.projectile_damage);
            log::debug!(
                "{} hit {} for {} ({} left)",
                shooter.label(),
                victim_slot.label(),
                applied,
                health.current()
            );
        }
        events.projectile_hits.push(victim_slot);
        let _ = world.despawn(shot);
    }
}
