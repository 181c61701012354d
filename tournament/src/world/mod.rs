use std::sync::Arc;

use async_trait::async_trait;
use tournament_util::{
    BlockDirection,
    math::{position::BlockPos, vector3::Vector3},
};

use crate::{block::state::ThrusterState, ship::ShipControl};

#[cfg(test)]
pub(crate) mod test_world;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Particle {
    Flame,
    SmallFlame,
}

/// The server level a thruster lives in.
///
/// The host owns block storage and the ship lookups. Committing a state with
/// [`World::set_thruster_state`] only stores it; blocks run their own follow up
/// work around the commit.
#[async_trait]
pub trait World: Send + Sync {
    async fn get_thruster_state(&self, pos: &BlockPos) -> Option<ThrusterState>;

    async fn set_thruster_state(&self, pos: &BlockPos, state: ThrusterState);

    /// Strongest redstone signal any neighbor delivers into `pos`.
    async fn best_neighbor_signal(&self, pos: &BlockPos) -> u8;

    /// The loaded ship object whose shipyard contains `pos`.
    fn get_ship_object_managing_pos(&self, pos: &BlockPos) -> Option<Arc<dyn ShipControl>>;

    /// Ship data owning `pos`, resolved even when the ship is not loaded.
    fn get_ship_managing_pos(&self, pos: &BlockPos) -> Option<Arc<dyn ShipControl>>;

    async fn is_water_at(&self, pos: &BlockPos) -> bool;

    /// Where `position`, given in the shipyard of the ship managing `pos`, is rendered in the world.
    fn ship_render_position(&self, _pos: &BlockPos, position: Vector3<f64>) -> Vector3<f64> {
        position
    }

    /// World-space direction of a block face on the ship managing `pos`.
    fn ship_render_direction(&self, _pos: &BlockPos, direction: BlockDirection) -> Vector3<f64> {
        direction.unit_normal()
    }

    async fn spawn_particle(&self, particle: Particle, position: Vector3<f64>, velocity: Vector3<f64>);
}
