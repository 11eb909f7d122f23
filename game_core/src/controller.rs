//! Match state machine
//!
//! Owns the simulation world, the score and the status banner. It is the only
//! place that resets the puck and paddles.

use hecs::{Entity, World};

use crate::{
    create_arena, create_paddle, create_puck, step, Arena, Config, ConfigError, Events, GameEvent,
    GameRng, ObstacleId, Paddle, Puck, Score, Side, Time,
};

pub const WAIT_MESSAGE: &str = "Press space to start";

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Intro screen, simulation paused
    Waiting,
    /// Game in progress
    Playing,
    /// A player reached the win score, simulation paused
    GameOver,
}

/// Status banner shown in the middle of the screen.
///
/// The presentation layer decides how to blink it; the core only says what
/// the text is and whether it should be shown at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusText {
    pub message: Option<String>,
}

impl StatusText {
    pub fn visible(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Input sampled once per rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Vertical axis per paddle, indexed by [`Side::index`]
    pub axes: [f32; 2],
    /// Edge-triggered: true only on the frame the start key went down
    pub start_pressed: bool,
}

impl FrameInput {
    pub fn axis(&self, side: Side) -> f32 {
        self.axes[side.index()]
    }
}

/// Anything that can produce per-frame input (keyboard, script, replay)
pub trait InputSource {
    fn sample(&mut self, now: f32) -> FrameInput;
}

/// Receives everything the match wants shown or heard
pub trait PresentationSink {
    fn status_changed(&mut self, status: &StatusText);
    fn scores_changed(&mut self, score: Score);
    /// Hits and goals, for sound cues or logging
    fn event(&mut self, _event: &GameEvent) {}
}

/// Sink that drops everything
pub struct NullSink;

impl PresentationSink for NullSink {
    fn status_changed(&mut self, _status: &StatusText) {}
    fn scores_changed(&mut self, _score: Score) {}
}

pub struct MatchController {
    world: World,
    puck: Entity,
    paddles: [Entity; 2],
    config: Config,
    time: Time,
    rng: GameRng,
    events: Events,
    score: Score,
    state: MatchState,
    winner: Option<Side>,
    status: StatusText,
    sink: Box<dyn PresentationSink>,
}

impl MatchController {
    /// Build the arena, paddles and puck, then enter [`MatchState::Waiting`].
    pub fn new(
        config: Config,
        seed: u64,
        sink: Box<dyn PresentationSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_arena(&mut world, &Arena::new(&config));
        let paddles = [
            create_paddle(&mut world, Paddle::from_config(Side::Player1, &config)?),
            create_paddle(&mut world, Paddle::from_config(Side::Player2, &config)?),
        ];
        let puck = create_puck(&mut world, Puck::from_config(&config, &mut rng)?);

        let mut controller = Self {
            world,
            puck,
            paddles,
            config,
            time: Time::default(),
            rng,
            events: Events::new(),
            score: Score::new(),
            state: MatchState::Waiting,
            winner: None,
            status: StatusText::default(),
            sink,
        };
        controller.enter_wait_state();
        Ok(controller)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn status(&self) -> &StatusText {
        &self.status
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.message.as_deref()
    }

    pub fn status_visible(&self) -> bool {
        self.status.visible()
    }

    /// Whether the fixed-rate phase runs; false while paused on a banner
    pub fn is_running(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Simulation clock; frozen outside of play
    pub fn time(&self) -> Time {
        self.time
    }

    pub fn puck(&self) -> Option<Puck> {
        self.world.get::<&Puck>(self.puck).ok().map(|p| *p)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .get::<&Paddle>(self.paddles[side.index()])
            .ok()
            .map(|p| *p)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for scenario setup and debugging tools.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Variable-rate phase: handle the start key and hand axes to the paddles.
    pub fn update(&mut self, input: &FrameInput) {
        if input.start_pressed && self.state != MatchState::Playing {
            self.enter_play_state();
        }

        for side in Side::BOTH {
            if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.paddles[side.index()]) {
                paddle.set_input(input.axis(side));
            }
        }
    }

    /// Fixed-rate phase. Does nothing unless a match is in progress.
    pub fn fixed_update(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }

        self.time.dt = dt;
        step(&mut self.world, &mut self.time, &mut self.events, &mut self.rng);

        let events: Vec<GameEvent> = self.events.drain().collect();
        for event in events {
            self.sink.event(&event);
            match event {
                GameEvent::PaddleHit(side) => log::debug!("{:?} hit the puck!", side),
                GameEvent::BoundaryHit(_) => log::debug!("Boundary hit!"),
                GameEvent::GoalHit(id) => self.on_goal_hit(id),
            }
        }
    }

    /// Credit a goal. Ignored unless a match is in progress.
    pub fn on_goal_hit(&mut self, player_who_scored: ObstacleId) {
        if self.state != MatchState::Playing {
            return;
        }

        let Some(side) = player_who_scored.side() else {
            log::warn!("Goal sensor without a player id ignored");
            return;
        };

        log::info!("{:?} scored !", side);
        let mut score = self.score;
        score.increment(side);
        self.set_score(score);
    }

    fn enter_wait_state(&mut self) {
        self.set_status(Some(WAIT_MESSAGE.to_string()));
        self.set_score(Score::new());
        self.winner = None;
        self.state = MatchState::Waiting;
        log::info!("Waiting for players");
    }

    fn enter_play_state(&mut self) {
        self.set_status(None);
        self.winner = None;
        self.state = MatchState::Playing;
        self.set_score(Score::new());
        log::info!("Match started");
    }

    fn enter_game_over_state(&mut self, winner: Side) {
        self.winner = Some(winner);
        self.state = MatchState::GameOver;
        self.set_status(Some(format!(
            "Game over - Player {} won\nPress space to start over",
            winner.number()
        )));
        log::info!(
            "Game over: {:?} won {}-{}",
            winner,
            self.score.player1,
            self.score.player2
        );
    }

    /// Store the new score and either end the match or start the next round.
    fn set_score(&mut self, score: Score) {
        self.score = score;
        self.sink.scores_changed(score);

        match score.has_winner(self.config.win_score) {
            Some(winner) => self.enter_game_over_state(winner),
            None => self.reset_round(),
        }
    }

    fn reset_round(&mut self) {
        if let Ok(mut puck) = self.world.get::<&mut Puck>(self.puck) {
            puck.reset(&mut self.rng);
        }
        for entity in self.paddles {
            if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
                paddle.reset();
            }
        }
    }

    fn set_status(&mut self, message: Option<String>) {
        self.status = StatusText { message };
        self.sink.status_changed(&self.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Note {
        Status(Option<String>),
        Scores(u8, u8),
        Event(GameEvent),
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        notes: Rc<RefCell<Vec<Note>>>,
    }

    impl PresentationSink for RecordingSink {
        fn status_changed(&mut self, status: &StatusText) {
            self.notes
                .borrow_mut()
                .push(Note::Status(status.message.clone()));
        }

        fn scores_changed(&mut self, score: Score) {
            self.notes
                .borrow_mut()
                .push(Note::Scores(score.player1, score.player2));
        }

        fn event(&mut self, event: &GameEvent) {
            self.notes.borrow_mut().push(Note::Event(*event));
        }
    }

    fn controller() -> (MatchController, Rc<RefCell<Vec<Note>>>) {
        let sink = RecordingSink::default();
        let notes = sink.notes.clone();
        let controller = MatchController::new(Config::new(), 42, Box::new(sink)).unwrap();
        (controller, notes)
    }

    fn start() -> FrameInput {
        FrameInput {
            start_pressed: true,
            ..FrameInput::default()
        }
    }

    fn score_n(controller: &mut MatchController, side: Side, n: u8) {
        for _ in 0..n {
            controller.on_goal_hit(side.into());
        }
    }

    #[test]
    fn test_initial_state() {
        let (controller, notes) = controller();
        assert_eq!(controller.state(), MatchState::Waiting);
        assert_eq!(controller.score(), Score::new());
        assert_eq!(controller.status_message(), Some(WAIT_MESSAGE));
        assert!(controller.status_visible());
        assert!(!controller.is_running());
        assert_eq!(
            *notes.borrow(),
            vec![Note::Status(Some(WAIT_MESSAGE.to_string())), Note::Scores(0, 0)]
        );
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = Config {
            paddle_range: -1.0,
            ..Config::default()
        };
        assert!(MatchController::new(config, 1, Box::new(NullSink)).is_err());
    }

    #[test]
    fn test_start_enters_play() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        assert_eq!(controller.state(), MatchState::Playing);
        assert_eq!(controller.score(), Score::new());
        assert_eq!(controller.status_message(), None);
        assert!(!controller.status_visible());
        assert!(controller.is_running());

        let puck = controller.puck().unwrap();
        assert_eq!(puck.pos.x, 0.0);
        assert!(puck.pos.y.abs() <= controller.config().puck_spawn_range);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        controller.on_goal_hit(ObstacleId::Player1);
        controller.update(&start());
        assert_eq!(controller.score().player1, 1, "Restart only from banners");
    }

    #[test]
    fn test_goal_ignored_when_not_playing() {
        let (mut controller, _notes) = controller();
        controller.on_goal_hit(ObstacleId::Player1);
        assert_eq!(controller.score(), Score::new());
        assert_eq!(controller.state(), MatchState::Waiting);
    }

    #[test]
    fn test_goal_without_player_ignored() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        controller.on_goal_hit(ObstacleId::None);
        assert_eq!(controller.score(), Score::new());
    }

    #[test]
    fn test_goal_scores_and_resets_round() {
        let (mut controller, notes) = controller();
        controller.update(&start());

        // Move everything off its spawn
        {
            let world = controller.world_mut();
            for (_e, puck) in world.query_mut::<&mut Puck>() {
                puck.pos = Vec2::new(15.0, 3.0);
            }
            for (_e, paddle) in world.query_mut::<&mut Paddle>() {
                paddle.position = 4.0;
            }
        }

        controller.on_goal_hit(ObstacleId::Player2);

        assert_eq!(controller.score().player2, 1);
        assert_eq!(controller.state(), MatchState::Playing);
        assert_eq!(controller.puck().unwrap().pos.x, 0.0);
        for side in Side::BOTH {
            assert_eq!(controller.paddle(side).unwrap().position, 0.0);
        }
        assert_eq!(notes.borrow().last(), Some(&Note::Scores(0, 1)));
    }

    #[test]
    fn test_tenth_goal_ends_match() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        score_n(&mut controller, Side::Player1, 9);
        assert_eq!(controller.state(), MatchState::Playing);

        // Leave the puck somewhere recognisable to prove no reset happens
        controller
            .world_mut()
            .query_mut::<&mut Puck>()
            .into_iter()
            .for_each(|(_e, puck)| puck.pos = Vec2::new(15.5, 2.0));

        controller.on_goal_hit(ObstacleId::Player1);

        assert_eq!(controller.state(), MatchState::GameOver);
        assert_eq!(controller.winner(), Some(Side::Player1));
        assert_eq!(controller.score().player1, 10);
        assert!(!controller.is_running());
        assert_eq!(controller.puck().unwrap().pos, Vec2::new(15.5, 2.0));
        assert_eq!(
            controller.status_message(),
            Some("Game over - Player 1 won\nPress space to start over")
        );
    }

    #[test]
    fn test_player2_can_win() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        score_n(&mut controller, Side::Player1, 4);
        score_n(&mut controller, Side::Player2, 10);
        assert_eq!(controller.winner(), Some(Side::Player2));
        assert_eq!(
            controller.status_message(),
            Some("Game over - Player 2 won\nPress space to start over")
        );
    }

    #[test]
    fn test_goals_ignored_after_game_over() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        score_n(&mut controller, Side::Player2, 10);
        controller.on_goal_hit(ObstacleId::Player1);
        assert_eq!(controller.score().player1, 0);
        assert_eq!(controller.score().player2, 10);
    }

    #[test]
    fn test_restart_from_game_over() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        score_n(&mut controller, Side::Player2, 10);

        controller.update(&start());

        assert_eq!(controller.state(), MatchState::Playing);
        assert_eq!(controller.score(), Score::new());
        assert_eq!(controller.winner(), None);
        assert_eq!(controller.status_message(), None);
    }

    #[test]
    fn test_fixed_update_paused_outside_play() {
        let (mut controller, _notes) = controller();
        let before = controller.puck().unwrap().pos;
        controller.fixed_update(crate::Params::FIXED_DT);
        assert_eq!(controller.puck().unwrap().pos, before);
        assert_eq!(controller.time().now, 0.0);
    }

    #[test]
    fn test_fixed_update_moves_puck_while_playing() {
        let (mut controller, _notes) = controller();
        controller.update(&start());
        let before = controller.puck().unwrap().pos;
        controller.fixed_update(crate::Params::FIXED_DT);
        assert_ne!(controller.puck().unwrap().pos, before);
        assert!(controller.time().now > 0.0);
    }

    #[test]
    fn test_update_forwards_axes() {
        let (mut controller, _notes) = controller();
        controller.update(&FrameInput {
            axes: [1.0, -0.5],
            start_pressed: true,
        });
        assert_eq!(controller.paddle(Side::Player1).unwrap().input, 1.0);
        assert_eq!(controller.paddle(Side::Player2).unwrap().input, -0.5);

        controller.fixed_update(crate::Params::FIXED_DT);
        assert!(controller.paddle(Side::Player1).unwrap().position > 0.0);
        assert!(controller.paddle(Side::Player2).unwrap().position < 0.0);
    }

    #[test]
    fn test_goal_in_simulation_reaches_sink() {
        let (mut controller, notes) = controller();
        controller.update(&start());
        controller
            .world_mut()
            .query_mut::<&mut Puck>()
            .into_iter()
            .for_each(|(_e, puck)| {
                puck.pos = Vec2::new(-15.8, 0.0);
                puck.vel = Vec2::new(-puck.max_speed, 0.0);
            });

        controller.fixed_update(crate::Params::FIXED_DT);

        assert_eq!(controller.score().player2, 1);
        assert!(notes
            .borrow()
            .contains(&Note::Event(GameEvent::GoalHit(ObstacleId::Player2))));
    }
}
