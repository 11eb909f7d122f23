use crate::{GameRng, Paddle, Puck, Time};
use hecs::World;

/// Apply paddle movement based on the stored input axis
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.tick(time.dt);
    }
}

/// Move puck based on velocity
pub fn move_puck(world: &mut World, time: &Time) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        puck.advance(time.dt);
    }
}

/// Restore the puck's constant speed after collision response
pub fn tick_puck(world: &mut World, rng: &mut GameRng) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        puck.tick(rng);
    }
}
