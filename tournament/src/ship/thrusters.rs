use std::collections::HashMap;

use crossbeam::atomic::AtomicCell;
use parking_lot::Mutex;
use tournament_util::math::{position::BlockPos, vector3::Vector3};

use super::ShipControl;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrusterForce {
    pub tier: f64,
    pub force: Vector3<f64>,
}

/// Position keyed thruster registry attached to a single ship.
#[derive(Default)]
pub struct ShipThrusters {
    thrusters: Mutex<HashMap<BlockPos, ThrusterForce>>,
    velocity: AtomicCell<Vector3<f64>>,
}

impl ShipThrusters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_velocity(&self, velocity: Vector3<f64>) {
        self.velocity.store(velocity);
    }

    pub fn thruster_at(&self, pos: &BlockPos) -> Option<ThrusterForce> {
        self.thrusters.lock().get(pos).copied()
    }

    pub fn len(&self) -> usize {
        self.thrusters.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.thrusters.lock().is_empty()
    }

    /// Sum of all registered force vectors, read by the physics phase.
    pub fn total_force(&self) -> Vector3<f64> {
        self.thrusters
            .lock()
            .values()
            .fold(Vector3::default(), |total, thruster| total + thruster.force)
    }
}

impl ShipControl for ShipThrusters {
    fn add_thruster(&self, pos: BlockPos, tier: f64, force: Vector3<f64>) {
        self.thrusters
            .lock()
            .insert(pos, ThrusterForce { tier, force });
    }

    fn stop_thruster(&self, pos: &BlockPos) {
        self.thrusters.lock().remove(pos);
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity.load()
    }
}
