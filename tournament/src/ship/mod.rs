use std::sync::Arc;

use tournament_util::math::{position::BlockPos, vector3::Vector3};

use crate::world::World;

pub mod thrusters;

pub use thrusters::{ShipThrusters, ThrusterForce};

/// Force sources a ship exposes to blocks built on it.
///
/// Every source is keyed by the block position that owns it. Implementations
/// are called from the simulation thread and must not block.
pub trait ShipControl: Send + Sync {
    fn add_thruster(&self, pos: BlockPos, tier: f64, force: Vector3<f64>);

    /// Removes the source at `pos`. Does nothing when there is none.
    fn stop_thruster(&self, pos: &BlockPos);

    fn velocity(&self) -> Vector3<f64>;
}

/// Result of looking up which ship a block position belongs to.
#[derive(Clone)]
pub enum ManagingShip {
    /// A ship object that is currently loaded in the world.
    Loaded(Arc<dyn ShipControl>),
    /// A ship resolved from saved ship data, not currently ticking.
    Unloaded(Arc<dyn ShipControl>),
}

impl ManagingShip {
    pub fn control(&self) -> &Arc<dyn ShipControl> {
        match self {
            Self::Loaded(ship) | Self::Unloaded(ship) => ship,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Finds the ship managing `pos`, preferring the loaded ship object.
pub fn resolve_managing_ship(world: &dyn World, pos: &BlockPos) -> Option<ManagingShip> {
    if let Some(ship) = world.get_ship_object_managing_pos(pos) {
        return Some(ManagingShip::Loaded(ship));
    }
    world.get_ship_managing_pos(pos).map(ManagingShip::Unloaded)
}
