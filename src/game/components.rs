//! Game Components
//!
//! The three kinds of simulated entity and the capability they share.
//! These are plain data records; behavior lives in `player`, `director`
//! and `movement`.

use macroquad::math::Vec2;
use super::entity::Entity;
use super::math::Aabb;
use super::timer::TimedGate;

// =============================================================================
// Shared capability
// =============================================================================

/// Position and per-tick displacement
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Motion {
    pub fn at(position: Vec2) -> Self {
        Self { position, velocity: Vec2::ZERO }
    }
}

/// Anything that moves and occupies a box in the arena.
///
/// The movement integrator and the renderer only go through this trait.
pub trait Body {
    fn motion(&self) -> &Motion;
    fn motion_mut(&mut self) -> &mut Motion;
    /// Full width and height of the body's box
    fn size(&self) -> Vec2;

    fn position(&self) -> Vec2 {
        self.motion().position
    }

    fn velocity(&self) -> Vec2 {
        self.motion().velocity
    }

    /// Box centered on the position
    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position(), self.size())
    }
}

// =============================================================================
// Entities
// =============================================================================

/// The single player-controlled square
#[derive(Debug, Clone)]
pub struct Player {
    pub id: Entity,
    pub motion: Motion,
    /// Movement speed per axis
    pub speed: f32,
    pub size: Vec2,
    /// Armed at spawn and on every successful shot
    pub fire_gate: TimedGate,
    pub fire_interval: f64,
    /// Template for bullets this player fires
    pub weapon: Weapon,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
}

/// What a shot looks like when it leaves the barrel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    pub bullet_speed: f32,
    pub bullet_size: Vec2,
    pub bullet_lifetime: f64,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: Entity,
    /// Who fired it. Attribution only, the owner may be gone.
    pub owner: Entity,
    pub motion: Motion,
    pub size: Vec2,
    /// Armed when fired, checked one-shot against `lifetime`
    pub life_timer: TimedGate,
    pub lifetime: f64,
    /// Cleared the instant the bullet hits something. Never set back.
    pub valid: bool,
}

impl Bullet {
    /// Mark the bullet as spent
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.life_timer.expired(now, self.lifetime)
    }

    /// Should the reaping pass remove this bullet?
    pub fn is_dead(&self, now: f64) -> bool {
        !self.valid || self.is_expired(now)
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: Entity,
    pub motion: Motion,
    /// Pursuit speed
    pub speed: f32,
    pub size: Vec2,
    /// Remaining hit points. A hit at zero kills.
    pub health: u32,
}

#[cfg(test)]
impl Bullet {
    /// Stationary 5x5 bullet with a 5 second lifetime, fired at `fired_at`
    pub fn stationary(id: Entity, position: Vec2, fired_at: f64) -> Self {
        Self {
            id,
            owner: Entity::NULL,
            motion: Motion::at(position),
            size: Vec2::new(5.0, 5.0),
            life_timer: TimedGate::new(fired_at),
            lifetime: 5.0,
            valid: true,
        }
    }
}

impl Body for Player {
    fn motion(&self) -> &Motion { &self.motion }
    fn motion_mut(&mut self) -> &mut Motion { &mut self.motion }
    fn size(&self) -> Vec2 { self.size }
}

impl Body for Bullet {
    fn motion(&self) -> &Motion { &self.motion }
    fn motion_mut(&mut self) -> &mut Motion { &mut self.motion }
    fn size(&self) -> Vec2 { self.size }
}

impl Body for Enemy {
    fn motion(&self) -> &Motion { &self.motion }
    fn motion_mut(&mut self) -> &mut Motion { &mut self.motion }
    fn size(&self) -> Vec2 { self.size }
}
