use thiserror::Error;

/// Rejected game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("floor height {floor} must be less than canvas height {canvas}")]
    FloorTooTall { floor: f32, canvas: f32 },

    #[error("crouch height {crouch} must be in (0, {standing}]")]
    InvalidCrouchHeight { crouch: f32, standing: f32 },

    #[error("max health must be at least 1")]
    ZeroHealth,
}

/// Errors surfaced by the frame loop
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("render target failed: {0}")]
    Render(String),

    #[error("frame scheduling failed: {0}")]
    Schedule(String),
}
