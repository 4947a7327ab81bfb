use glam::Vec2;
use serde::Deserialize;

use crate::components::PlayerSlot;
use crate::error::ConfigError;
use crate::params::Params;

/// How overlapping fighters interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRule {
    /// Block sideways movement, stack on top when landing on the opponent
    #[default]
    Block,
    /// Both fighters lose `contact_damage` for every frame they overlap
    Damage,
}

/// Game configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub floor_height: f32,
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub crouch_height: f32,
    pub player_speed: f32,
    pub jump_strength: f32,
    pub max_jumps: u8,
    pub max_health: u32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    pub projectile_damage: u32,
    pub contact_damage: u32,
    pub contact_rule: ContactRule,
    pub player_one_spawn: [f32; 2],
    pub player_two_spawn: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            floor_height: Params::FLOOR_HEIGHT,
            gravity: Params::GRAVITY,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            crouch_height: Params::CROUCH_HEIGHT,
            player_speed: Params::PLAYER_SPEED,
            jump_strength: Params::JUMP_STRENGTH,
            max_jumps: Params::MAX_JUMPS,
            max_health: Params::MAX_HEALTH,
            projectile_width: Params::PROJECTILE_WIDTH,
            projectile_height: Params::PROJECTILE_HEIGHT,
            projectile_speed: Params::PROJECTILE_SPEED,
            projectile_damage: Params::PROJECTILE_DAMAGE,
            contact_damage: Params::CONTACT_DAMAGE,
            contact_rule: ContactRule::default(),
            player_one_spawn: Params::PLAYER_ONE_SPAWN,
            player_two_spawn: Params::PLAYER_TWO_SPAWN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("floor_height", self.floor_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("jump_strength", self.jump_strength),
            ("projectile_speed", self.projectile_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.floor_height >= self.canvas_height {
            return Err(ConfigError::FloorTooTall {
                floor: self.floor_height,
                canvas: self.canvas_height,
            });
        }

        if self.crouch_height <= 0.0 || self.crouch_height > self.player_height {
            return Err(ConfigError::InvalidCrouchHeight {
                crouch: self.crouch_height,
                standing: self.player_height,
            });
        }

        if self.max_health == 0 {
            return Err(ConfigError::ZeroHealth);
        }

        Ok(())
    }

    /// Y coordinate of the floor's top edge
    pub fn floor_top(&self) -> f32 {
        self.canvas_height - self.floor_height
    }

    /// Top-left spawn position for a fighter
    pub fn spawn(&self, slot: PlayerSlot) -> Vec2 {
        match slot {
            PlayerSlot::One => Vec2::from(self.player_one_spawn),
            PlayerSlot::Two => Vec2::from(self.player_two_spawn),
        }
    }
}
