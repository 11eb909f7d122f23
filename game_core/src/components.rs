use glam::Vec2;
use rand::Rng;

use crate::error::{ensure_non_negative, ensure_positive, ConfigError};
use crate::map::Aabb;
use crate::{Config, GameRng};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player1, // left
    Player2, // right
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player1, Side::Player2];

    pub fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }

    /// Player number as shown on screen (1 or 2)
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Identifier an obstacle reports when the puck touches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObstacleId {
    #[default]
    None,
    Player1,
    Player2,
}

impl ObstacleId {
    pub fn side(self) -> Option<Side> {
        match self {
            ObstacleId::None => None,
            ObstacleId::Player1 => Some(Side::Player1),
            ObstacleId::Player2 => Some(Side::Player2),
        }
    }
}

impl From<Side> for ObstacleId {
    fn from(side: Side) -> Self {
        match side {
            Side::Player1 => ObstacleId::Player1,
            Side::Player2 => ObstacleId::Player2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Solid edge; `normal` points back into the arena
    Boundary { normal: Vec2 },
    /// Sensor the puck passes through
    Goal,
}

/// Obstacle component - a static wall or goal sensor.
///
/// Holds nothing but its identity and shape; hits are reported through
/// [`crate::Events`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub kind: ObstacleKind,
    pub bounds: Aabb,
}

impl Obstacle {
    pub fn new(id: ObstacleId, kind: ObstacleKind, bounds: Aabb) -> Self {
        Self { id, kind, bounds }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.kind, ObstacleKind::Goal)
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,        // Lane position (fixed)
    pub position: f32, // Y offset, always within [-range, range]
    pub input: f32,    // Axis reading in [-1, 1]
    pub speed: f32,
    pub range: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, speed: f32, range: f32) -> Result<Self, ConfigError> {
        ensure_positive("paddle_speed", speed)?;
        ensure_positive("paddle_range", range)?;
        Ok(Self {
            side,
            x,
            position: 0.0,
            input: 0.0,
            speed,
            range,
            width: 1.0,
            height: 1.0,
        })
    }

    pub fn from_config(side: Side, config: &Config) -> Result<Self, ConfigError> {
        let paddle = Self::new(
            side,
            config.paddle_x(side),
            config.paddle_speed,
            config.paddle_range,
        )?;
        paddle.with_size(config.paddle_width, config.paddle_height)
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Result<Self, ConfigError> {
        ensure_positive("paddle_width", width)?;
        ensure_positive("paddle_height", height)?;
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Record the axis reading used by the next [`Paddle::tick`].
    pub fn set_input(&mut self, axis: f32) {
        self.input = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            log::warn!("{:?} paddle ignored non-finite input {}", self.side, axis);
            0.0
        };
    }

    pub fn tick(&mut self, dt: f32) {
        let next = self.position + self.speed * self.input * dt;
        if next.is_finite() {
            self.position = next.clamp(-self.range, self.range);
        }
    }

    /// Bounce direction for a puck striking this paddle.
    ///
    /// `local_impact_y` is the contact point in paddle-local units, -0.5 at the
    /// bottom edge to 0.5 at the top. The result points roughly -45°..45° away
    /// from the paddle and is not normalized.
    pub fn on_collision(&self, x_sign: f32, local_impact_y: f32) -> Vec2 {
        let x = if x_sign < 0.0 { -1.0 } else { 1.0 };
        let y = if local_impact_y.is_finite() {
            local_impact_y.clamp(-0.5, 0.5)
        } else {
            0.0
        };
        Vec2::new(x, y * 2.0)
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.position)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center(), Vec2::new(self.width, self.height))
    }
}

/// Puck component - moves at a constant speed
#[derive(Debug, Clone, Copy)]
pub struct Puck {
    pub pos: Vec2,
    pub vel: Vec2,
    pub max_speed: f32,
    pub spawn_range: f32,
    pub radius: f32,
}

impl Puck {
    pub fn new(
        max_speed: f32,
        spawn_range: f32,
        radius: f32,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        ensure_positive("puck_max_speed", max_speed)?;
        ensure_non_negative("puck_spawn_range", spawn_range)?;
        ensure_positive("puck_radius", radius)?;
        let mut puck = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            max_speed,
            spawn_range,
            radius,
        };
        puck.randomize_velocity(rng);
        Ok(puck)
    }

    pub fn from_config(config: &Config, rng: &mut GameRng) -> Result<Self, ConfigError> {
        Self::new(
            config.puck_max_speed,
            config.puck_spawn_range,
            config.puck_radius,
            rng,
        )
    }

    /// Pick a new heading: always left or right, with a random vertical slant.
    pub fn randomize_velocity(&mut self, rng: &mut GameRng) {
        let x = if rng.0.gen_bool(0.5) { -1.0 } else { 1.0 };
        let y: f32 = rng.0.gen_range(-1.0..=1.0);
        self.vel = Vec2::new(x, y).normalize() * self.max_speed;
    }

    /// Pin the speed back to `max_speed`. Runs every fixed step.
    pub fn tick(&mut self, rng: &mut GameRng) {
        match self.vel.try_normalize() {
            Some(dir) => self.vel = dir * self.max_speed,
            None => {
                log::warn!("Puck velocity degenerate ({:?}), re-randomizing", self.vel);
                self.randomize_velocity(rng);
            }
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Adopt the direction of `velocity`; speed is fixed up by the next tick.
    pub fn on_collision(&mut self, velocity: Vec2) {
        if velocity.is_finite() && velocity.length_squared() > f32::EPSILON {
            self.vel = velocity;
        }
    }

    pub fn reset(&mut self, rng: &mut GameRng) {
        let y = rng.0.gen_range(-self.spawn_range..=self.spawn_range);
        self.pos = Vec2::new(0.0, y);
        self.randomize_velocity(rng);
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
