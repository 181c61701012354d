use async_trait::async_trait;
use rand::RngCore;
use tournament_config::ThrusterConfig;
use tournament_util::{BlockDirection, math::position::BlockPos};

use crate::{
    entity::player::{Hand, Player},
    item::{Item, ItemStack},
    world::World,
};

pub mod blocks;
pub mod exhaust;
pub mod registry;
pub mod state;

use blocks::thruster::ThrusterBlock;
use registry::BlockRegistry;
use state::ThrusterState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    pub name: &'static str,
    /// Item the block drops and is placed from.
    pub item: Item,
}

impl Block {
    pub const THRUSTER: Block = Block {
        name: "thruster",
        item: Item::THRUSTER,
    };
    pub const TINY_THRUSTER: Block = Block {
        name: "tiny_thruster",
        item: Item::TINY_THRUSTER,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockActionResult {
    /// Allow other actions to be executed
    Continue,
    /// Block other actions
    Consume,
}

pub trait BlockMetadata {
    fn namespace(&self) -> &'static str;
    fn id(&self) -> &'static str;
    fn name(&self) -> String {
        format!("{}:{}", self.namespace(), self.id())
    }
}

pub struct OnPlaceArgs<'a> {
    pub world: &'a dyn World,
    pub block: &'a Block,
    pub player: &'a Player,
    pub position: &'a BlockPos,
    /// The axis direction the player is looking at most directly.
    pub player_direction: BlockDirection,
}

pub struct PlacedArgs<'a> {
    pub world: &'a dyn World,
    pub block: &'a Block,
    pub position: &'a BlockPos,
    pub state: ThrusterState,
}

pub struct OnNeighborUpdateArgs<'a> {
    pub world: &'a dyn World,
    pub block: &'a Block,
    pub position: &'a BlockPos,
}

pub struct UseWithItemArgs<'a> {
    pub world: &'a dyn World,
    pub block: &'a Block,
    pub player: &'a Player,
    pub position: &'a BlockPos,
    pub hand: Hand,
}

pub struct OnStateReplacedArgs<'a> {
    pub world: &'a dyn World,
    pub block: &'a Block,
    pub position: &'a BlockPos,
}

pub struct GetDropsArgs<'a> {
    pub block: &'a Block,
    pub state: &'a ThrusterState,
}

pub struct RandomDisplayTickArgs<'a> {
    pub world: &'a dyn World,
    pub block: &'a Block,
    pub position: &'a BlockPos,
    pub state: &'a ThrusterState,
    pub random: &'a mut (dyn RngCore + Send),
}

#[async_trait]
pub trait BlockBehaviour: Send + Sync {
    /// State the block takes when a player places it.
    async fn on_place(&self, _args: OnPlaceArgs<'_>) -> ThrusterState {
        ThrusterState::default()
    }

    /// Called once the placed state is stored in the world.
    async fn placed(&self, _args: PlacedArgs<'_>) {}

    async fn on_neighbor_update(&self, _args: OnNeighborUpdateArgs<'_>) {}

    async fn use_with_item(&self, _args: UseWithItemArgs<'_>) -> BlockActionResult {
        BlockActionResult::Continue
    }

    /// Called when the block is removed or replaced by another block.
    async fn on_state_replaced(&self, _args: OnStateReplacedArgs<'_>) {}

    async fn random_display_tick(&self, _args: RandomDisplayTickArgs<'_>) {}

    fn get_drops(&self, _args: GetDropsArgs<'_>) -> Vec<ItemStack> {
        Vec::new()
    }
}

/// Registry holding every thruster variant, configured from `config`.
#[must_use]
pub fn default_registry(config: &ThrusterConfig) -> BlockRegistry {
    let mut manager = BlockRegistry::default();

    manager.register(ThrusterBlock::thruster(config));
    manager.register(ThrusterBlock::tiny_thruster(config));

    manager
}
