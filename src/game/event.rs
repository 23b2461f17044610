//! Event System
//!
//! The simulation reports what happened during a tick through event queues
//! instead of logging or drawing anything itself. The frame loop reads
//! them after each tick (currently into the debug log).
//!
//! Queues are cleared at the start of every tick, so after `World::tick`
//! they hold exactly that tick's events.

use macroquad::math::Vec2;
use super::entity::Entity;

/// A queue for events of a single type
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All gameplay event queues
#[derive(Debug, Default)]
pub struct Events {
    pub spawned: EventQueue<EnemySpawned>,
    pub fired: EventQueue<BulletFired>,
    /// A bullet hit an enemy that survived
    pub hit: EventQueue<EnemyHit>,
    pub killed: EventQueue<EnemyKilled>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_all(&mut self) {
        self.spawned.clear();
        self.fired.clear();
        self.hit.clear();
        self.killed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.fired.is_empty() && self.hit.is_empty() && self.killed.is_empty()
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawned {
    pub enemy: Entity,
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletFired {
    pub bullet: Entity,
    pub owner: Entity,
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyHit {
    pub enemy: Entity,
    pub bullet: Entity,
    /// Health left after the hit
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyKilled {
    pub enemy: Entity,
    pub bullet: Entity,
    /// Whoever fired the killing bullet
    pub killer: Entity,
    pub position: Vec2,
}
