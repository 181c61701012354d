use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;
use tokio::sync::Mutex;
use tournament_util::GameMode;

use crate::item::ItemStack;

pub const HOTBAR_SIZE: usize = 9;

/// The hand an interaction was dispatched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Main,
    Off,
}

pub struct PlayerInventory {
    hotbar: [Option<ItemStack>; HOTBAR_SIZE],
    /// The hotbar's current selected slot.
    pub selected: usize,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self {
            hotbar: [const { None }; HOTBAR_SIZE],
            selected: 0,
        }
    }

    pub fn set_selected(&mut self, slot: usize) {
        debug_assert!(slot < HOTBAR_SIZE);
        self.selected = slot;
    }

    // NOTE: We actually want &mut Option instead of Option<&mut>
    pub fn held_item_mut(&mut self) -> &mut Option<ItemStack> {
        &mut self.hotbar[self.selected]
    }

    #[inline]
    pub fn held_item(&self) -> Option<&ItemStack> {
        self.hotbar[self.selected].as_ref()
    }

    /// Removes `amount` items from the held stack, clearing the slot once it runs out.
    pub fn decrease_current_stack(&mut self, amount: u8) -> bool {
        let held_item = self.held_item_mut();
        if let Some(item_stack) = held_item {
            item_stack.decrement(amount);
            if item_stack.is_empty() {
                *held_item = None;
            }
            return true;
        };
        false
    }
}

/// The parts of a connected player the thruster blocks interact with.
pub struct Player {
    /// The player's current gamemode (e.g., Survival, Creative, Adventure).
    pub gamemode: AtomicCell<GameMode>,
    sneaking: AtomicBool,
    /// The player's inventory.
    pub inventory: Mutex<PlayerInventory>,
}

impl Player {
    pub fn new(gamemode: GameMode) -> Self {
        Self {
            gamemode: AtomicCell::new(gamemode),
            sneaking: AtomicBool::new(false),
            inventory: Mutex::new(PlayerInventory::new()),
        }
    }

    pub fn is_sneaking(&self) -> bool {
        self.sneaking.load(Ordering::Relaxed)
    }

    pub fn set_sneaking(&self, sneaking: bool) {
        self.sneaking.store(sneaking, Ordering::Relaxed);
    }
}
