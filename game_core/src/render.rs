//! Drawing and frame scheduling seams
//!
//! The core never touches a canvas. It describes each frame through
//! [`RenderTarget`] and asks a [`FrameScheduler`] for the next callback, so the
//! whole loop can run headlessly in tests.

use glam::Vec2;
use hecs::World;

use crate::{Aabb, Arena, Body, Fighter, GameError, Health, Outcome, Params, Players, Projectile, Tint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string, e.g. `rgb(255, 0, 0)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Static images loaded once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Character,
    Floor,
    Projectile,
}

/// Something that can draw a frame
pub trait RenderTarget {
    fn clear(&mut self) -> Result<(), GameError>;
    fn draw_sprite(&mut self, sprite: Sprite, bounds: Aabb, tint: Tint) -> Result<(), GameError>;
    fn fill_rect(&mut self, bounds: Aabb, color: Color) -> Result<(), GameError>;
    fn fill_text_centered(&mut self, text: &str, center: Vec2) -> Result<(), GameError>;
}

/// Something that calls back into the game once per display refresh
pub trait FrameScheduler {
    fn request_next_frame(&mut self) -> Result<(), GameError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartState {
    Full,
    Half,
    Empty,
}

impl HeartState {
    pub fn color(self) -> Color {
        match self {
            HeartState::Full => Color::RED,
            HeartState::Half => Color::PINK,
            HeartState::Empty => Color::GRAY,
        }
    }
}

/// Heart row for a health value; each heart is worth two points
pub fn hearts(health: &Health) -> Vec<HeartState> {
    let per_heart = Params::HEALTH_PER_HEART;
    let count = health.max().div_ceil(per_heart);
    let current = health.current();
    (0..count)
        .map(|i| {
            if current >= (i + 1) * per_heart {
                HeartState::Full
            } else if current > i * per_heart {
                HeartState::Half
            } else {
                HeartState::Empty
            }
        })
        .collect()
}

/// Green at full health fading to red at zero
pub fn health_bar_color(fraction: f32) -> Color {
    let fraction = fraction.clamp(0.0, 1.0);
    let red = ((1.0 - fraction) * 255.0).floor() as u8;
    let green = (fraction * 255.0).floor() as u8;
    Color::rgb(red, green, 0)
}

fn draw_health(target: &mut impl RenderTarget, body: &Body, health: &Health) -> Result<(), GameError> {
    let bar_pos = Vec2::new(
        body.pos.x + (body.width - Params::HEALTH_BAR_WIDTH) / 2.0,
        body.pos.y - Params::HEALTH_BAR_OFFSET,
    );
    let fraction = health.fraction();
    target.fill_rect(
        Aabb::from_pos_size(
            bar_pos,
            Vec2::new(Params::HEALTH_BAR_WIDTH * fraction, Params::HEALTH_BAR_HEIGHT),
        ),
        health_bar_color(fraction),
    )?;

    let row_y = bar_pos.y - Params::HEART_OFFSET;
    for (i, heart) in hearts(health).into_iter().enumerate() {
        let x = bar_pos.x + i as f32 * (Params::HEART_SIZE + Params::HEART_SPACING);
        target.fill_rect(
            Aabb::from_pos_size(Vec2::new(x, row_y), Vec2::splat(Params::HEART_SIZE)),
            heart.color(),
        )?;
    }
    Ok(())
}

/// Draw one frame: floor, fighters with their HUD, shots, then the result banner
pub fn render_scene(
    world: &World,
    players: &Players,
    arena: &Arena,
    outcome: &Outcome,
    target: &mut impl RenderTarget,
) -> Result<(), GameError> {
    target.clear()?;
    target.draw_sprite(Sprite::Floor, arena.floor.bounds, Tint::Normal)?;

    for (_slot, entity) in players.iter() {
        let Ok(mut query) = world.query_one::<(&Fighter, &Body, &Health)>(entity) else {
            continue;
        };
        if let Some((fighter, body, health)) = query.get() {
            target.draw_sprite(Sprite::Character, body.hitbox(), fighter.tint)?;
            draw_health(target, body, health)?;
        }
    }

    for (_entity, projectile) in world.query::<&Projectile>().iter() {
        target.draw_sprite(Sprite::Projectile, projectile.hitbox(), Tint::Normal)?;
    }

    if let Some(message) = outcome.message() {
        target.fill_text_centered(&message, arena.center())?;
    }

    Ok(())
}
