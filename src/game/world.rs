//! Game World
//!
//! The World is the whole simulation for one play session:
//! - The player and the bullets it owns
//! - The enemy director and its enemies
//! - Entity handle allocation
//! - Per-tick event queues and the spawn RNG
//!
//! It is owned by the frame loop and advanced one tick per frame. There is
//! no global state; everything the tick touches is reachable from here.
//!
//! Tick order is collide-then-move: collisions, AI and firing all see the
//! positions entities had at the start of the tick, and integration runs
//! last. A bullet fired this tick is hit-tested at the muzzle before it
//! moves, and a hit shows up the frame after the overlap is drawn.

use macroquad::math::Vec2;
use rand::rngs::StdRng;
use super::components::{Body, Player};
use super::config::GameConfig;
use super::director::EnemyDirector;
use super::entity::EntityAllocator;
use super::event::{BulletFired, EnemySpawned, Events};
use super::input::InputSnapshot;
use super::math::Aabb;
use super::movement::{integrate, integrate_all};

pub struct World {
    entities: EntityAllocator,
    pub player: Player,
    pub director: EnemyDirector,
    /// Last aim point; the crosshair is drawn here
    pub crosshair: Vec2,
    /// Filled during `tick`, cleared at the start of the next one
    pub events: Events,
    rng: StdRng,
    /// Ticks run so far
    pub tick_count: u64,
}

impl World {
    /// Start a session with the player at `spawn`. All gates arm at `now`.
    pub fn new(config: &GameConfig, spawn: Vec2, now: f64, rng: StdRng) -> Self {
        let mut entities = EntityAllocator::new();
        let player_id = entities.allocate();

        Self {
            player: Player::new(player_id, spawn, config, now),
            director: EnemyDirector::new(config, now),
            entities,
            crosshair: spawn,
            events: Events::new(),
            rng,
            tick_count: 0,
        }
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, input: &InputSnapshot, now: f64) {
        self.events.clear_all();
        self.crosshair = input.aim;

        // Player
        self.player.update_velocity_from_input(input.movement);
        let aim = input.aim - self.player.position();
        if let Some(bullet) = self.player.try_fire(&mut self.entities, aim, input.fire, now) {
            if let Some(fired) = self.player.bullets.last() {
                self.events.fired.send(BulletFired {
                    bullet,
                    owner: fired.owner,
                    position: fired.position(),
                    velocity: fired.velocity(),
                });
            }
        }

        // Enemies
        if self.director.should_spawn(now) {
            let enemy = self
                .director
                .spawn_enemy(&mut self.entities, self.player.position(), &mut self.rng);
            if let Some(spawned) = self.director.enemies.last() {
                self.events.spawned.send(EnemySpawned { enemy, position: spawned.position() });
            }
        }
        self.director
            .resolve_collisions(&mut self.entities, &mut self.player.bullets, &mut self.events);
        self.player.reap_bullets(&mut self.entities, now);
        self.director.update_ai(self.player.position());

        // Movement
        integrate(&mut self.player);
        integrate_all(&mut self.player.bullets);
        integrate_all(&mut self.director.enemies);

        self.tick_count += 1;
    }

    /// Number of live entities (player, bullets and enemies)
    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    /// What the renderer needs to draw this frame
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            player: Shape::of(&self.player),
            bullets: self.player.bullets.iter().map(Shape::of).collect(),
            enemies: self.director.enemies.iter().map(Shape::of).collect(),
            crosshair: self.crosshair,
        }
    }
}

/// One drawable box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub position: Vec2,
    pub bounds: Aabb,
}

impl Shape {
    pub fn of<B: Body>(body: &B) -> Self {
        Self { position: body.position(), bounds: body.bounds() }
    }
}

/// Drawable state after a tick. Bullets and enemies keep collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub player: Shape,
    pub bullets: Vec<Shape>,
    pub enemies: Vec<Shape>,
    pub crosshair: Vec2,
}
