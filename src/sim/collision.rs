//! Collision detection and response for the rectangular playfield
//!
//! Three walls reflect the ball (left, right, top); the bottom edge is open
//! and losing the ball there ends the run. Paddle and brick tests are the
//! classic arcade approximations, not exact circle geometry.

use crate::sim::state::{Ball, Paddle};

/// Clamp the ball at the left, right and top walls, flipping the matching
/// velocity component. The bottom edge is deliberately not reflected.
pub fn resolve_wall_collision(ball: &mut Ball, width: f32) {
    // Left wall
    if ball.pos.x - ball.radius <= 0.0 {
        ball.pos.x = ball.radius;
        ball.bounce_horizontal();
    }

    // Right wall
    if ball.pos.x + ball.radius >= width {
        ball.pos.x = width - ball.radius;
        ball.bounce_horizontal();
    }

    // Top wall
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.bounce_vertical();
    }
}

/// Ball-vs-paddle test: the ball's vertical span must overlap the paddle's
/// band AND the ball's horizontal *center* must lie within the paddle's
/// span. The horizontal test ignores the ball radius, so a graze at the
/// paddle's side within one radius is a miss.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    let half_w = paddle.width / 2.0;
    let half_h = paddle.height / 2.0;

    ball.pos.y + ball.radius >= paddle.pos.y - half_h
        && ball.pos.y - ball.radius <= paddle.pos.y + half_h
        && ball.pos.x >= paddle.pos.x - half_w
        && ball.pos.x <= paddle.pos.x + half_w
}
