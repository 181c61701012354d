use std::collections::HashMap;
use std::sync::Arc;

use crate::NAMESPACE;
use crate::item::ItemStack;

use super::{
    Block, BlockActionResult, BlockBehaviour, BlockMetadata, GetDropsArgs, OnNeighborUpdateArgs,
    OnPlaceArgs, OnStateReplacedArgs, PlacedArgs, RandomDisplayTickArgs, UseWithItemArgs,
    state::ThrusterState,
};

/// Dispatches host block events to the behaviour registered under the block's name.
#[derive(Default)]
pub struct BlockRegistry {
    blocks: HashMap<String, Arc<dyn BlockBehaviour>>,
}

impl BlockRegistry {
    pub fn register<T: BlockBehaviour + BlockMetadata + 'static>(&mut self, block: T) {
        self.blocks.insert(block.name(), Arc::new(block));
    }

    #[must_use]
    pub fn get_block_behaviour(&self, block: &Block) -> Option<&Arc<dyn BlockBehaviour>> {
        self.blocks
            .get(format!("{NAMESPACE}:{}", block.name).as_str())
    }

    /// `None` when no behaviour is registered for the block.
    pub async fn on_place(&self, args: OnPlaceArgs<'_>) -> Option<ThrusterState> {
        let behaviour = self.get_block_behaviour(args.block)?;
        Some(behaviour.on_place(args).await)
    }

    pub async fn placed(&self, args: PlacedArgs<'_>) {
        if let Some(behaviour) = self.get_block_behaviour(args.block) {
            behaviour.placed(args).await;
        }
    }

    pub async fn on_neighbor_update(&self, args: OnNeighborUpdateArgs<'_>) {
        if let Some(behaviour) = self.get_block_behaviour(args.block) {
            behaviour.on_neighbor_update(args).await;
        }
    }

    pub async fn use_with_item(&self, args: UseWithItemArgs<'_>) -> BlockActionResult {
        if let Some(behaviour) = self.get_block_behaviour(args.block) {
            return behaviour.use_with_item(args).await;
        }
        BlockActionResult::Continue
    }

    pub async fn on_state_replaced(&self, args: OnStateReplacedArgs<'_>) {
        if let Some(behaviour) = self.get_block_behaviour(args.block) {
            behaviour.on_state_replaced(args).await;
        }
    }

    pub async fn random_display_tick(&self, args: RandomDisplayTickArgs<'_>) {
        if let Some(behaviour) = self.get_block_behaviour(args.block) {
            behaviour.random_display_tick(args).await;
        }
    }

    pub fn get_drops(&self, args: GetDropsArgs<'_>) -> Vec<ItemStack> {
        self.get_block_behaviour(args.block)
            .map(|behaviour| behaviour.get_drops(args))
            .unwrap_or_default()
    }
}
