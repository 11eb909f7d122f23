use crate::components::{ObstacleId, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed simulation time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player1: u8,
    pub player2: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player1 => self.player1,
            Side::Player2 => self.player2,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player1 => self.player1 = self.player1.saturating_add(1),
            Side::Player2 => self.player2 = self.player2.saturating_add(1),
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player1 >= win_score || self.player2 >= win_score {
            Some(self.leader())
        } else {
            None
        }
    }

    /// Side with the higher score; Player2 on a tie
    pub fn leader(&self) -> Side {
        if self.player1 > self.player2 {
            Side::Player1
        } else {
            Side::Player2
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something the puck touched during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PaddleHit(Side),
    BoundaryHit(ObstacleId),
    GoalHit(ObstacleId),
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// First goal recorded this step, if any
    pub fn goal(&self) -> Option<ObstacleId> {
        self.list.iter().find_map(|e| match e {
            GameEvent::GoalHit(id) => Some(*id),
            _ => None,
        })
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.list.drain(..)
    }
}
