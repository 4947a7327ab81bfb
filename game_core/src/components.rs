use glam::Vec2;
use hecs::Entity;

use crate::arena::Aabb;

/// Which side of the keyboard a fighter is played from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerSlot::One => "Player 1",
            PlayerSlot::Two => "Player 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Hardcoded key bindings, as `KeyboardEvent.key` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left: &'static str,
    pub right: &'static str,
    pub jump: &'static str,
    pub crouch: &'static str,
    pub fire: &'static str,
    /// Shots travel this way
    pub facing: Facing,
}

impl Controls {
    pub const PLAYER_ONE: Controls = Controls {
        left: "a",
        right: "d",
        jump: "w",
        crouch: "s",
        fire: " ",
        facing: Facing::Right,
    };

    pub const PLAYER_TWO: Controls = Controls {
        left: "ArrowLeft",
        right: "ArrowRight",
        jump: "ArrowUp",
        crouch: "ArrowDown",
        fire: "/",
        facing: Facing::Left,
    };

    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self::PLAYER_ONE,
            PlayerSlot::Two => Self::PLAYER_TWO,
        }
    }

    pub fn binds(&self, key: &str) -> bool {
        [self.left, self.right, self.jump, self.crouch, self.fire]
            .iter()
            .any(|bound| *bound == key)
    }
}

/// True if any fighter uses this key
pub fn is_bound_key(key: &str) -> bool {
    PlayerSlot::ALL
        .iter()
        .any(|slot| Controls::for_slot(*slot).binds(key))
}

/// Sprite colour treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Normal,
    Inverted,
}

/// Fighter identity and movement tuning
#[derive(Debug, Clone, Copy)]
pub struct Fighter {
    pub slot: PlayerSlot,
    pub controls: Controls,
    pub tint: Tint,
    pub speed: f32,
    pub jump_strength: f32,
}

/// Fighter position and vertical motion
///
/// `height` is always either `standing_height` or `crouch_height`.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2, // top-left corner
    pub dy: f32,
    pub width: f32,
    pub height: f32,
    pub standing_height: f32,
    pub crouch_height: f32,
    /// Resting on the floor or the opponent this tick; not read by the
    /// systems, kept for callers inspecting fighter state
    pub on_ground: bool,
}

impl Body {
    pub fn new(pos: Vec2, width: f32, standing_height: f32, crouch_height: f32) -> Self {
        Self {
            pos,
            dy: 0.0,
            width,
            height: standing_height,
            standing_height,
            crouch_height,
            on_ground: false,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }

    pub fn set_crouched(&mut self, crouched: bool) {
        self.height = if crouched {
            self.crouch_height
        } else {
            self.standing_height
        };
    }

    /// Rest the body's bottom edge on `top` and stop vertical motion
    pub fn land_on(&mut self, top: f32) {
        self.pos.y = top - self.height;
        self.dy = 0.0;
        self.on_ground = true;
    }
}

/// Jump budget between ground contacts
#[derive(Debug, Clone, Copy)]
pub struct Jumps {
    pub used: u8,
    pub max: u8,
}

impl Jumps {
    pub fn new(max: u8) -> Self {
        Self { used: 0, max }
    }

    /// Spend one jump if any remain
    pub fn try_jump(&mut self) -> bool {
        if self.used < self.max {
            self.used += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }
}

/// Hit points; a fighter is alive exactly while `current > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Returns the damage actually applied after clamping at zero
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Movement blocked by the opponent, set by contact resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl Blocked {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A shot in flight
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: Entity,
    pub shooter: PlayerSlot,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub direction: f32, // -1 or 1
    pub speed: f32,
}

impl Projectile {
    pub fn hitbox(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos.x += self.speed * self.direction;
    }
}
