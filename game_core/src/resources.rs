use std::collections::HashSet;

use hecs::Entity;

use crate::components::PlayerSlot;
use crate::params::Params;

/// Time resource for tracking simulation ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f32,         // Total simulated time
    pub frame: u64,       // Ticks run so far
    pub accumulator: f32, // Elapsed time not yet simulated
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed wall time and return how many fixed ticks are due
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);
        let mut ticks = 0;
        while self.accumulator + Params::DT_EPSILON >= Params::FIXED_DT {
            self.accumulator = (self.accumulator - Params::FIXED_DT).max(0.0);
            ticks += 1;
        }
        ticks
    }

    pub fn record_tick(&mut self) {
        self.frame += 1;
        self.now += Params::FIXED_DT;
    }
}

/// Keyboard state keyed by `KeyboardEvent.key`
///
/// `held` follows the physical key; `pressed` is set only on the transition
/// from released to held and is cleared after every tick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
    pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        // Auto-repeat keydowns arrive while the key is already held
        if self.held.insert(key.to_owned()) {
            self.pressed.insert(key.to_owned());
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
        self.pressed.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    pub fn was_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    pub fn clear_pressed(&mut self) {
        self.pressed.clear();
    }
}

/// The two fighter entities, in processing order
#[derive(Debug, Clone, Copy)]
pub struct Players {
    pub one: Entity,
    pub two: Entity,
}

impl Players {
    pub fn get(&self, slot: PlayerSlot) -> Entity {
        match slot {
            PlayerSlot::One => self.one,
            PlayerSlot::Two => self.two,
        }
    }

    /// `(slot, entity)` pairs, Player 1 first
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, Entity)> + '_ {
        PlayerSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub jumped: Vec<PlayerSlot>,
    pub fired: Vec<PlayerSlot>,
    /// Victims of projectile hits
    pub projectile_hits: Vec<PlayerSlot>,
    pub players_touching: bool,
    pub defeated: Vec<PlayerSlot>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped.clear();
        self.fired.clear();
        self.projectile_hits.clear();
        self.players_touching = false;
        self.defeated.clear();
    }
}

/// Match result; anything but `InProgress` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Winner(PlayerSlot),
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Banner text shown once the match is over
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Winner(slot) => Some(format!("{} Wins!", slot.label())),
            Outcome::Draw => Some("Draw!".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_sets_held_and_pressed() {
        let mut input = InputState::new();
        input.key_down("w");
        assert!(input.is_held("w"));
        assert!(input.was_pressed("w"));
        assert!(!input.is_held("d"));
    }

    #[test]
    fn test_pressed_clears_but_held_remains() {
        let mut input = InputState::new();
        input.key_down("w");
        input.clear_pressed();
        assert!(input.is_held("w"));
        assert!(!input.was_pressed("w"));
    }

    #[test]
    fn test_auto_repeat_is_not_a_new_press() {
        let mut input = InputState::new();
        input.key_down("w");
        input.clear_pressed();
        input.key_down("w");
        assert!(!input.was_pressed("w"));

        input.key_up("w");
        input.key_down("w");
        assert!(input.was_pressed("w"));
    }

    #[test]
    fn test_key_up_clears_both() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        input.key_up("ArrowLeft");
        assert!(!input.is_held("ArrowLeft"));
        assert!(!input.was_pressed("ArrowLeft"));
    }

    #[test]
    fn test_time_accumulates_fixed_ticks() {
        let mut time = Time::new();
        assert_eq!(time.accumulate(0.0), 0);
        assert_eq!(time.accumulate(Params::FIXED_DT), 1);
        assert_eq!(time.accumulate(Params::FIXED_DT / 2.0), 0);
        assert_eq!(time.accumulate(Params::FIXED_DT / 2.0), 1);
    }

    #[test]
    fn test_time_clamps_large_gaps() {
        let mut time = Time::new();
        assert_eq!(time.accumulate(5.0), 6, "0.1s cap is six 60 Hz ticks");
        assert_eq!(time.accumulate(-1.0), 0);
    }

    #[test]
    fn test_outcome_message() {
        assert_eq!(Outcome::InProgress.message(), None);
        assert!(!Outcome::InProgress.is_over());
        assert_eq!(
            Outcome::Winner(PlayerSlot::Two).message().as_deref(),
            Some("Player 2 Wins!")
        );
        assert_eq!(Outcome::Draw.message().as_deref(), Some("Draw!"));
        assert!(Outcome::Draw.is_over());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.jumped.push(PlayerSlot::One);
        events.fired.push(PlayerSlot::Two);
        events.projectile_hits.push(PlayerSlot::One);
        events.players_touching = true;
        events.defeated.push(PlayerSlot::Two);

        events.clear();

        assert!(events.jumped.is_empty());
        assert!(events.fired.is_empty());
        assert!(events.projectile_hits.is_empty());
        assert!(!events.players_touching);
        assert!(events.defeated.is_empty());
    }
}
