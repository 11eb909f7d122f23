use std::cell::RefCell;
use std::rc::Rc;

use game_core::{GameEvent, ObstacleId, PresentationSink, Score, StatusText};

/// What a HUD would draw, kept up to date by [`LogSink`]
#[derive(Debug, Clone, Default)]
pub struct HudState {
    pub status: StatusText,
    pub score: Score,
    pub paddle_hits: u32,
    pub boundary_hits: u32,
    pub goals: u32,
}

impl HudState {
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.score.player1, self.score.player2)
    }
}

pub type SharedHud = Rc<RefCell<HudState>>;

/// Presentation sink for headless runs: logs every notification and mirrors
/// it into a shared [`HudState`]. Sound cues would hang off [`LogSink::event`].
#[derive(Clone, Default)]
pub struct LogSink {
    hud: SharedHud,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hud(&self) -> SharedHud {
        self.hud.clone()
    }
}

impl PresentationSink for LogSink {
    fn status_changed(&mut self, status: &StatusText) {
        match status.message.as_deref() {
            Some(message) => log::info!("Status: {}", message.replace('\n', " / ")),
            None => log::debug!("Status cleared"),
        }
        self.hud.borrow_mut().status = status.clone();
    }

    fn scores_changed(&mut self, score: Score) {
        let mut hud = self.hud.borrow_mut();
        hud.score = score;
        log::info!("Score: {}", hud.score_line());
    }

    fn event(&mut self, event: &GameEvent) {
        let mut hud = self.hud.borrow_mut();
        match event {
            GameEvent::PaddleHit(side) => {
                hud.paddle_hits += 1;
                log::debug!("{:?} hit the puck!", side);
            }
            GameEvent::BoundaryHit(_) => {
                hud.boundary_hits += 1;
                log::debug!("Boundary hit!");
            }
            GameEvent::GoalHit(ObstacleId::None) => {}
            GameEvent::GoalHit(id) => {
                hud.goals += 1;
                log::debug!("Goal for {:?}", id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    #[test]
    fn test_sink_mirrors_scores_and_status() {
        let mut sink = LogSink::new();
        let hud = sink.hud();

        sink.status_changed(&StatusText {
            message: Some("Press space to start".into()),
        });
        sink.scores_changed(Score {
            player1: 3,
            player2: 7,
        });

        let hud = hud.borrow();
        assert_eq!(hud.score_line(), "3 - 7");
        assert!(hud.status.visible());
    }

    #[test]
    fn test_sink_counts_events() {
        let mut sink = LogSink::new();
        sink.event(&GameEvent::PaddleHit(Side::Player1));
        sink.event(&GameEvent::PaddleHit(Side::Player2));
        sink.event(&GameEvent::BoundaryHit(ObstacleId::None));
        sink.event(&GameEvent::GoalHit(ObstacleId::Player1));
        sink.event(&GameEvent::GoalHit(ObstacleId::None));

        let hud = sink.hud();
        let hud = hud.borrow();
        assert_eq!(hud.paddle_hits, 2);
        assert_eq!(hud.boundary_hits, 1);
        assert_eq!(hud.goals, 1);
    }
}
