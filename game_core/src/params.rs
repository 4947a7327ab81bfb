/// Game tuning parameters for the duel
///
/// Distances are canvas pixels and velocities are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    pub const FLOOR_HEIGHT: f32 = 50.0;

    // Fighter
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const CROUCH_HEIGHT: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_STRENGTH: f32 = 10.0;
    pub const MAX_JUMPS: u8 = 2; // double jump
    pub const GRAVITY: f32 = 0.5;
    pub const MAX_HEALTH: u32 = 20; // 10 hearts, 2 points each

    // Spawns (top-left corner)
    pub const PLAYER_ONE_SPAWN: [f32; 2] = [100.0, 300.0];
    pub const PLAYER_TWO_SPAWN: [f32; 2] = [600.0, 300.0];

    // Projectile
    pub const PROJECTILE_WIDTH: f32 = 40.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const PROJECTILE_DAMAGE: u32 = 2;

    // Body contact (damage rule only)
    pub const CONTACT_DAMAGE: u32 = 1;

    // HUD
    pub const HEALTH_BAR_WIDTH: f32 = 50.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 5.0;
    pub const HEALTH_BAR_OFFSET: f32 = 15.0; // above the player
    pub const HEART_SIZE: f32 = 10.0;
    pub const HEART_SPACING: f32 = 5.0;
    pub const HEART_OFFSET: f32 = 15.0; // above the bar
    pub const HEALTH_PER_HEART: u32 = 2;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // one tick per 60 Hz frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const DT_EPSILON: f32 = 0.001; // absorbs rAF timestamp jitter
}
