/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (centered on the origin)
    pub const ARENA_WIDTH: f32 = 32.0;
    pub const ARENA_HEIGHT: f32 = 24.0;
    pub const WALL_THICKNESS: f32 = 1.0;
    pub const GOAL_DEPTH: f32 = 2.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.8;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_SPEED: f32 = 18.0; // units per second
    pub const PADDLE_RANGE: f32 = 10.0; // half-extent of travel
    pub const PADDLE_INSET: f32 = 1.5; // distance from the goal line

    // Puck
    pub const PUCK_RADIUS: f32 = 0.5;
    pub const PUCK_MAX_SPEED: f32 = 12.0;
    pub const PUCK_SPAWN_RANGE: f32 = 8.0;

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const MAX_SUBSTEPS: u32 = 8;
}
