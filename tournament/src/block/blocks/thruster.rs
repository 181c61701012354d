use async_trait::async_trait;
use tournament_config::ThrusterConfig;
use tournament_util::math::{position::BlockPos, vector3::Vector3};

use crate::{
    NAMESPACE,
    block::{
        Block, BlockActionResult, BlockBehaviour, BlockMetadata, GetDropsArgs,
        OnNeighborUpdateArgs, OnPlaceArgs, OnStateReplacedArgs, PlacedArgs,
        RandomDisplayTickArgs, UseWithItemArgs,
        exhaust::{ExhaustSource, exhaust_velocities},
        state::{MAX_POWER, ThrusterState},
    },
    entity::player::Hand,
    item::{Item, ItemStack},
    ship::resolve_managing_ship,
    world::{Particle, World},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrusterSettings {
    /// Scales the force of every thruster of this kind.
    pub multiplier: f64,
    pub max_tier: u8,
}

/// A directional thruster that pushes the ship it is built on while powered.
pub struct ThrusterBlock {
    block: Block,
    particle: Particle,
    settings: ThrusterSettings,
}

impl ThrusterBlock {
    pub fn new(block: Block, particle: Particle, settings: ThrusterSettings) -> Self {
        Self {
            block,
            particle,
            settings,
        }
    }

    pub fn thruster(config: &ThrusterConfig) -> Self {
        Self::new(
            Block::THRUSTER,
            Particle::Flame,
            ThrusterSettings {
                multiplier: config.speed,
                max_tier: config.max_tier,
            },
        )
    }

    pub fn tiny_thruster(config: &ThrusterConfig) -> Self {
        Self::new(
            Block::TINY_THRUSTER,
            Particle::SmallFlame,
            ThrusterSettings {
                multiplier: config.tiny_speed(),
                max_tier: config.max_tier,
            },
        )
    }

    /// Force vector a thruster in `state` contributes to its ship.
    pub fn force(&self, state: &ThrusterState) -> Vector3<f64> {
        state.facing.unit_normal()
            * (f64::from(state.power) * f64::from(state.tier) * self.settings.multiplier)
    }

    /// Registers the force source for `pos`, replacing any previous one.
    pub fn enable(&self, world: &dyn World, pos: &BlockPos, state: &ThrusterState) {
        let Some(ship) = resolve_managing_ship(world, pos) else {
            log::trace!("No ship manages thruster at {pos}, not enabling");
            return;
        };
        let ship = ship.control();
        ship.stop_thruster(pos);
        let force = self.force(state);
        log::debug!(
            "Enabling thruster at {pos}: power {}, tier {}, force {:?}",
            state.power,
            state.tier,
            force
        );
        ship.add_thruster(*pos, f64::from(state.tier), force);
    }

    pub fn disable(&self, world: &dyn World, pos: &BlockPos) {
        if let Some(ship) = resolve_managing_ship(world, pos) {
            log::debug!("Disabling thruster at {pos}");
            ship.control().stop_thruster(pos);
        }
    }

    /// Stores `state` for `pos`. The force source is dropped before the store
    /// and registered again afterwards when the new state is powered.
    pub async fn commit(&self, world: &dyn World, pos: &BlockPos, state: ThrusterState) {
        self.disable(world, pos);
        world.set_thruster_state(pos, state).await;
        if state.is_powered() {
            self.enable(world, pos, &state);
        }
    }

    async fn neighbor_signal(world: &dyn World, pos: &BlockPos) -> u8 {
        world.best_neighbor_signal(pos).await.min(MAX_POWER)
    }
}

impl BlockMetadata for ThrusterBlock {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn id(&self) -> &'static str {
        self.block.name
    }
}

#[async_trait]
impl BlockBehaviour for ThrusterBlock {
    async fn on_place(&self, args: OnPlaceArgs<'_>) -> ThrusterState {
        let facing = if args.player.is_sneaking() {
            args.player_direction.opposite()
        } else {
            args.player_direction
        };
        ThrusterState::default().with_facing(facing)
    }

    async fn placed(&self, args: PlacedArgs<'_>) {
        let signal = Self::neighbor_signal(args.world, args.position).await;
        if args.state.power != signal {
            self.commit(args.world, args.position, args.state.with_power(signal))
                .await;
            return;
        }

        if signal > 0 {
            self.enable(args.world, args.position, &args.state);
        }
    }

    async fn on_neighbor_update(&self, args: OnNeighborUpdateArgs<'_>) {
        let Some(state) = args.world.get_thruster_state(args.position).await else {
            return;
        };
        let signal = Self::neighbor_signal(args.world, args.position).await;
        if signal == state.power {
            return;
        }

        self.commit(args.world, args.position, state.with_power(signal))
            .await;
    }

    async fn use_with_item(&self, args: UseWithItemArgs<'_>) -> BlockActionResult {
        if args.hand != Hand::Off {
            return BlockActionResult::Continue;
        }

        let mut inventory = args.player.inventory.lock().await;
        let holds_upgrade = inventory
            .held_item()
            .is_some_and(|stack| stack.item == Item::UPGRADE_THRUSTER);
        if !holds_upgrade {
            return BlockActionResult::Continue;
        }

        let Some(state) = args.world.get_thruster_state(args.position).await else {
            return BlockActionResult::Continue;
        };
        if state.tier >= self.settings.max_tier {
            return BlockActionResult::Continue;
        }

        self.commit(args.world, args.position, state.with_tier(state.tier + 1))
            .await;

        if args.player.gamemode.load().consumes_items() {
            inventory.decrease_current_stack(1);
        }
        BlockActionResult::Consume
    }

    async fn on_state_replaced(&self, args: OnStateReplacedArgs<'_>) {
        self.disable(args.world, args.position);
    }

    async fn random_display_tick(&self, args: RandomDisplayTickArgs<'_>) {
        let world = args.world;
        let pos = args.position;

        let render_pos = world.ship_render_position(pos, pos.to_centered_f64());
        let render_block = BlockPos::floored(render_pos.x, render_pos.y, render_pos.z);
        let source = ExhaustSource {
            submerged: world.is_water_at(&render_block).await,
            power: args.state.power,
            direction: world.ship_render_direction(pos, args.state.facing),
            ship_velocity: world
                .get_ship_object_managing_pos(pos)
                .map(|ship| ship.velocity())
                .unwrap_or_default(),
        };

        for velocity in exhaust_velocities(&source, args.random) {
            world
                .spawn_particle(self.particle, render_pos, velocity)
                .await;
        }
    }

    fn get_drops(&self, args: GetDropsArgs<'_>) -> Vec<ItemStack> {
        let mut drops = vec![ItemStack::new(1, self.block.item)];
        if args.state.tier > 1 {
            drops.push(ItemStack::new(args.state.tier - 1, Item::UPGRADE_THRUSTER));
        }
        drops
    }
}
