use hecs::{Entity, World};

use crate::{
    create_player, render_scene, step, Arena, Body, Config, ConfigError, Events, FrameScheduler,
    GameError, Health, InputState, Outcome, PlayerSlot, Players, Projectile, RenderTarget, Time,
};

/// Everything one match needs, built once and handed to the frame loop
pub struct Game {
    world: World,
    players: Players,
    arena: Arena,
    config: Config,
    input: InputState,
    events: Events,
    outcome: Outcome,
    time: Time,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected config: {}", err);
            return Err(err);
        }

        let arena = Arena::new(&config);
        let mut world = World::new();
        let one = create_player(&mut world, PlayerSlot::One, config.spawn(PlayerSlot::One), &config);
        let two = create_player(&mut world, PlayerSlot::Two, config.spawn(PlayerSlot::Two), &config);
        log::info!(
            "match started on {}x{} canvas, contact rule {:?}",
            config.canvas_width,
            config.canvas_height,
            config.contact_rule
        );

        Ok(Self {
            world,
            players: Players { one, two },
            arena,
            config,
            input: InputState::new(),
            events: Events::new(),
            outcome: Outcome::InProgress,
            time: Time::new(),
        })
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Run exactly one simulation tick and consume pressed keys
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.players,
            &self.arena,
            &self.config,
            &self.input,
            &mut self.events,
            &mut self.outcome,
        );
        self.input.clear_pressed();
        self.time.record_tick();
    }

    /// Run as many fixed ticks as `dt` seconds cover; returns the tick count
    pub fn advance(&mut self, dt: f32) -> u32 {
        let ticks = self.time.accumulate(dt);
        for _ in 0..ticks {
            self.tick();
        }
        ticks
    }

    pub fn render(&self, target: &mut impl RenderTarget) -> Result<(), GameError> {
        render_scene(&self.world, &self.players, &self.arena, &self.outcome, target)
    }

    /// One animation-frame callback: simulate, draw, ask for the next frame
    pub fn run_frame(
        &mut self,
        dt: f32,
        target: &mut impl RenderTarget,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<(), GameError> {
        self.advance(dt);
        self.render(target)?;
        scheduler.request_next_frame()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self, slot: PlayerSlot) -> Entity {
        self.players.get(slot)
    }

    pub fn body(&self, slot: PlayerSlot) -> Option<Body> {
        self.world.get::<&Body>(self.player(slot)).ok().map(|body| *body)
    }

    pub fn health(&self, slot: PlayerSlot) -> Option<Health> {
        self.world.get::<&Health>(self.player(slot)).ok().map(|health| *health)
    }

    pub fn projectiles(&self) -> Vec<Projectile> {
        self.world
            .query::<&Projectile>()
            .iter()
            .map(|(_e, projectile)| *projectile)
            .collect()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn time(&self) -> &Time {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    #[test]
    fn test_new_game_spawns_both_fighters() {
        let game = Game::new(Config::new()).unwrap();
        let one = game.body(PlayerSlot::One).unwrap();
        let two = game.body(PlayerSlot::Two).unwrap();
        assert_eq!(one.pos.x, 100.0);
        assert_eq!(two.pos.x, 600.0);
        assert_eq!(game.health(PlayerSlot::One).unwrap().current(), 20);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.projectiles().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            max_health: 0,
            ..Config::default()
        };
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn test_tick_consumes_pressed_keys() {
        let mut game = Game::new(Config::new()).unwrap();
        game.key_down(" ");
        game.tick();
        game.tick();
        assert_eq!(game.projectiles().len(), 1, "one press fires once");
        assert_eq!(game.time().frame, 2);
    }

    #[test]
    fn test_press_survives_until_a_tick_runs() {
        let mut game = Game::new(Config::new()).unwrap();
        game.key_down("w");
        assert_eq!(game.advance(Params::FIXED_DT / 4.0), 0);
        assert_eq!(game.advance(Params::FIXED_DT), 1);
        assert_eq!(game.events().jumped, vec![PlayerSlot::One]);
    }
}
