use crate::{Events, GameEvent, Obstacle, ObstacleKind, Paddle, Puck};
use glam::Vec2;
use hecs::World;

/// Mirror `vel` across a wall whose `normal` faces the incoming puck
pub fn reflect_off_wall(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Narrow phase: puck against walls, paddles and goal sensors
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect static shapes and paddles first so the puck can be borrowed mutably
    let obstacles: Vec<Obstacle> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(_e, obstacle)| *obstacle)
        .collect();
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        for obstacle in &obstacles {
            if let ObstacleKind::Boundary { normal } = obstacle.kind {
                collide_boundary(puck, obstacle, normal, events);
            }
        }

        for paddle in &paddles {
            collide_paddle(puck, paddle, events);
        }

        for obstacle in obstacles.iter().filter(|o| o.is_goal()) {
            if obstacle.bounds.intersects_circle(puck.pos, puck.radius) {
                events.push(GameEvent::GoalHit(obstacle.id));
            }
        }
    }
}

fn collide_boundary(puck: &mut Puck, obstacle: &Obstacle, normal: Vec2, events: &mut Events) {
    if !obstacle.bounds.intersects_circle(puck.pos, puck.radius) {
        return;
    }
    // Already heading back into the arena
    if puck.vel.dot(normal) >= 0.0 {
        return;
    }

    puck.on_collision(reflect_off_wall(puck.vel, normal));

    // Push the puck back onto the arena side of the wall
    let b = obstacle.bounds;
    if normal.y > 0.0 {
        puck.pos.y = puck.pos.y.max(b.max.y + puck.radius);
    } else if normal.y < 0.0 {
        puck.pos.y = puck.pos.y.min(b.min.y - puck.radius);
    } else if normal.x > 0.0 {
        puck.pos.x = puck.pos.x.max(b.max.x + puck.radius);
    } else if normal.x < 0.0 {
        puck.pos.x = puck.pos.x.min(b.min.x - puck.radius);
    }

    events.push(GameEvent::BoundaryHit(obstacle.id));
}

fn collide_paddle(puck: &mut Puck, paddle: &Paddle, events: &mut Events) {
    if !paddle.bounds().intersects_circle(puck.pos, puck.radius) {
        return;
    }

    // Direction that leads away from the paddle face
    let dx = puck.pos.x - paddle.x;
    let away = if dx != 0.0 {
        dx.signum()
    } else if paddle.x > 0.0 {
        -1.0
    } else {
        1.0
    };
    // Only bounce a puck that is moving into the paddle
    if puck.vel.x * away >= 0.0 {
        return;
    }

    let local_impact_y = (puck.pos.y - paddle.position) / paddle.height;
    puck.on_collision(paddle.on_collision(away, local_impact_y));
    puck.pos.x = paddle.x + away * (paddle.width / 2.0 + puck.radius);

    events.push(GameEvent::PaddleHit(paddle.side));
}
