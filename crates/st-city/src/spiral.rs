//! Initial placement.
//!
//! Cities are seated on a loose spiral around the canvas center.  City `i`
//! sits at angle `offset + 2.2 · i · 2π / N`, with a speed that starts at
//! the configured velocity and grows by a slowly shrinking increment; the
//! initial position is the center plus twice the initial velocity.

use std::f64::consts::TAU;

/// Growth of the speed increment at city 0.
const SPEED_STEP: f64 = 0.2;

/// Amount the speed increment shrinks per city.
const SPEED_STEP_DECAY: f64 = 0.000_33;

/// Angular turns per city, in units of `2π / N`.
const TURN_FACTOR: f64 = 1.1 * 2.0;

/// Initial kinematic state of one city.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Seat {
    pub x:  f64,
    pub y:  f64,
    pub vx: f64,
    pub vy: f64,
}

/// Seat `count` cities around `center`.
///
/// `velocity` is the speed of city 0 and `offset` the angle of city 0 in
/// radians.
pub fn spiral_layout(count: usize, center: (f64, f64), velocity: f64, offset: f64) -> Vec<Seat> {
    let n = count as f64;
    let mut speed = velocity;
    let mut step = SPEED_STEP;

    (0..count)
        .map(|i| {
            let t = offset + TURN_FACTOR * i as f64 * TAU / n;
            let vx = speed * t.sin();
            let vy = speed * t.cos();
            step -= SPEED_STEP_DECAY;
            speed += step;
            Seat { x: center.0 + vx * 2.0, y: center.1 + vy * 2.0, vx, vy }
        })
        .collect()
}
