use crate::NAMESPACE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: u16,
    /// Path of the item's registry key, without the namespace.
    pub name: &'static str,
}

impl Item {
    pub const THRUSTER: Item = Item {
        id: 0,
        name: "thruster",
    };
    pub const TINY_THRUSTER: Item = Item {
        id: 1,
        name: "tiny_thruster",
    };
    pub const UPGRADE_THRUSTER: Item = Item {
        id: 2,
        name: "upgrade_thruster",
    };

    pub fn registry_key(&self) -> String {
        format!("{NAMESPACE}:{}", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item_count: u8,
    pub item: Item,
}

impl ItemStack {
    pub fn new(item_count: u8, item: Item) -> Self {
        Self { item_count, item }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn decrement(&mut self, amount: u8) {
        self.item_count = self.item_count.saturating_sub(amount);
    }
}
