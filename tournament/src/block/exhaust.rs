//! Exhaust particles of a running thruster.

use rand::Rng;
use tournament_util::math::{clamp_lerp, vector3::Vector3};

use super::state::MAX_POWER;

/// Per axis jitter added to the exhaust direction.
pub const JITTER: f64 = 0.1;
/// Share of the ship velocity every particle inherits.
pub const SHIP_VELOCITY_SHARE: f64 = 0.05;
pub const MIN_SPEED: f64 = 0.075;
pub const MAX_SPEED: f64 = 0.5;

pub struct ExhaustSource {
    /// Whether the rendered thruster sits in water.
    pub submerged: bool,
    pub power: u8,
    /// World-space thrust direction of the thruster face.
    pub direction: Vector3<f64>,
    pub ship_velocity: Vector3<f64>,
}

pub fn particle_count(power: u8) -> usize {
    usize::from(power) * 2
}

/// Signed particle speed along the thrust direction; exhaust leaves backwards.
pub fn exhaust_speed(power: u8) -> f64 {
    let delta = (f64::from(power) - 1.0) / f64::from(MAX_POWER - 1);
    -clamp_lerp(MIN_SPEED, MAX_SPEED, delta)
}

/// Velocities of the particles to spawn this tick. Empty when nothing should render.
pub fn exhaust_velocities<R: Rng + ?Sized>(
    source: &ExhaustSource,
    random: &mut R,
) -> Vec<Vector3<f64>> {
    if source.submerged || source.power == 0 {
        return Vec::new();
    }

    let speed = exhaust_speed(source.power);
    let inherited = source.ship_velocity * SHIP_VELOCITY_SHARE;

    (0..particle_count(source.power))
        .map(|_| {
            let spread = source
                .direction
                .add_raw(
                    random.gen_range(-JITTER..JITTER),
                    random.gen_range(-JITTER..JITTER),
                    random.gen_range(-JITTER..JITTER),
                )
                .normalize();
            spread * speed + inherited
        })
        .collect()
}
