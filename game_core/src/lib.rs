//! Pong simulation core
//!
//! Fixed-timestep physics for one puck and two paddles, plus the match state
//! machine that scores goals and resets rounds. Rendering, audio and input
//! polling live outside this crate behind [`InputSource`] and
//! [`PresentationSink`].

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the fixed-rate phase of the simulation for `time.dt` seconds.
///
/// The interval is clamped to [`Params::MAX_DT`] and split into
/// [`Params::FIXED_DT`] micro-steps. Stepping stops early once a goal is
/// recorded so the match controller can reset the round first.
pub fn step(world: &mut World, time: &mut Time, events: &mut Events, rng: &mut GameRng) {
    if !time.dt.is_finite() || time.dt <= 0.0 {
        return;
    }

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Clear events at start of frame
    events.clear();

    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Move paddles from their stored input
        move_paddles(world, &step_time);

        // 2. Move puck
        move_puck(world, &step_time);

        // 3. Collisions (puck vs walls, paddles, goals)
        check_collisions(world, events);

        // 4. Renormalize puck speed, collision or not
        tick_puck(world, rng);

        if events.goal().is_some() {
            break;
        }
    }

    // Update time
    time.now += clamped_dt - remaining_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the puck entity
pub fn create_puck(world: &mut World, puck: Puck) -> hecs::Entity {
    world.spawn((puck,))
}

/// Spawn the walls and goal sensors of `arena`
pub fn create_arena(world: &mut World, arena: &Arena) -> Vec<hecs::Entity> {
    arena
        .walls()
        .into_iter()
        .chain(arena.goals())
        .map(|obstacle| world.spawn((obstacle,)))
        .collect()
}
