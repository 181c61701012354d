use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tournament_util::{
    direction::BlockDirection,
    math::{position::BlockPos, vector3::Vector3},
};

use super::{Particle, World};
use crate::block::state::ThrusterState;
use crate::ship::{ShipControl, ShipThrusters};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShipEvent {
    Added(BlockPos, Vector3<f64>),
    Stopped(BlockPos),
}

/// Ship that records every call and refuses to stack two sources on one position.
#[derive(Default)]
pub struct RecordingShip {
    pub thrusters: ShipThrusters,
    pub events: Mutex<Vec<ShipEvent>>,
}

impl RecordingShip {
    pub fn force_at(&self, pos: &BlockPos) -> Option<Vector3<f64>> {
        self.thrusters.thruster_at(pos).map(|thruster| thruster.force)
    }

    pub fn added_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, ShipEvent::Added(..)))
            .count()
    }
}

impl ShipControl for RecordingShip {
    fn add_thruster(&self, pos: BlockPos, tier: f64, force: Vector3<f64>) {
        assert!(
            self.thrusters.thruster_at(&pos).is_none(),
            "thruster at {pos} registered twice"
        );
        self.events.lock().push(ShipEvent::Added(pos, force));
        self.thrusters.add_thruster(pos, tier, force);
    }

    fn stop_thruster(&self, pos: &BlockPos) {
        self.events.lock().push(ShipEvent::Stopped(*pos));
        self.thrusters.stop_thruster(pos);
    }

    fn velocity(&self) -> Vector3<f64> {
        self.thrusters.velocity()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnedParticle {
    pub particle: Particle,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

#[derive(Default)]
pub struct TestWorld {
    states: Mutex<HashMap<BlockPos, ThrusterState>>,
    signals: Mutex<HashMap<BlockPos, u8>>,
    water: Mutex<HashSet<BlockPos>>,
    loaded_ship: Option<Arc<RecordingShip>>,
    unloaded_ship: Option<Arc<RecordingShip>>,
    render_offset: Option<Vector3<f64>>,
    render_direction: Option<Vector3<f64>>,
    pub particles: Mutex<Vec<SpawnedParticle>>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loaded_ship(mut self, ship: Arc<RecordingShip>) -> Self {
        self.loaded_ship = Some(ship);
        self
    }

    pub fn with_unloaded_ship(mut self, ship: Arc<RecordingShip>) -> Self {
        self.unloaded_ship = Some(ship);
        self
    }

    /// Shifts every rendered position, as a ship carrying the block would.
    pub fn with_render_offset(mut self, offset: Vector3<f64>) -> Self {
        self.render_offset = Some(offset);
        self
    }

    /// Replaces every rendered facing with `direction`.
    pub fn with_render_direction(mut self, direction: Vector3<f64>) -> Self {
        self.render_direction = Some(direction);
        self
    }

    pub fn set_signal(&self, pos: BlockPos, signal: u8) {
        self.signals.lock().insert(pos, signal);
    }

    pub fn flood(&self, pos: BlockPos) {
        self.water.lock().insert(pos);
    }

    pub fn state(&self, pos: &BlockPos) -> Option<ThrusterState> {
        self.states.lock().get(pos).copied()
    }

    pub fn insert_state(&self, pos: BlockPos, state: ThrusterState) {
        self.states.lock().insert(pos, state);
    }
}

#[async_trait]
impl World for TestWorld {
    async fn get_thruster_state(&self, pos: &BlockPos) -> Option<ThrusterState> {
        self.state(pos)
    }

    async fn set_thruster_state(&self, pos: &BlockPos, state: ThrusterState) {
        self.insert_state(*pos, state);
    }

    async fn best_neighbor_signal(&self, pos: &BlockPos) -> u8 {
        self.signals.lock().get(pos).copied().unwrap_or(0)
    }

    fn get_ship_object_managing_pos(&self, _pos: &BlockPos) -> Option<Arc<dyn ShipControl>> {
        self.loaded_ship
            .clone()
            .map(|ship| ship as Arc<dyn ShipControl>)
    }

    fn get_ship_managing_pos(&self, _pos: &BlockPos) -> Option<Arc<dyn ShipControl>> {
        self.unloaded_ship
            .clone()
            .map(|ship| ship as Arc<dyn ShipControl>)
    }

    async fn is_water_at(&self, pos: &BlockPos) -> bool {
        self.water.lock().contains(pos)
    }

    fn ship_render_position(&self, _pos: &BlockPos, position: Vector3<f64>) -> Vector3<f64> {
        match self.render_offset {
            Some(offset) => position + offset,
            None => position,
        }
    }

    fn ship_render_direction(&self, _pos: &BlockPos, direction: BlockDirection) -> Vector3<f64> {
        self.render_direction
            .unwrap_or_else(|| direction.unit_normal())
    }

    async fn spawn_particle(
        &self,
        particle: Particle,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) {
        self.particles.lock().push(SpawnedParticle {
            particle,
            position,
            velocity,
        });
    }
}
