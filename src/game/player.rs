//! Player controller
//!
//! Turns held direction keys into a velocity, rate-limits shooting, and owns
//! the lifecycle of the bullets the player fires.

use macroquad::math::{vec2, Vec2};
use super::components::{Bullet, Motion, Player, Weapon};
use super::config::GameConfig;
use super::entity::{Entity, EntityAllocator};
use super::input::MoveFlags;
use super::math::normalize;
use super::timer::TimedGate;

impl Player {
    /// Spawn the player at `position`. The fire gate is armed at `now`, so
    /// the first shot is available one fire interval later.
    pub fn new(id: Entity, position: Vec2, config: &GameConfig, now: f64) -> Self {
        Self {
            id,
            motion: Motion::at(position),
            speed: config.player_speed,
            size: vec2(config.player_size, config.player_size),
            fire_gate: TimedGate::new(now),
            fire_interval: config.fire_interval,
            weapon: Weapon {
                bullet_speed: config.bullet_speed,
                bullet_size: vec2(config.bullet_size, config.bullet_size),
                bullet_lifetime: config.bullet_lifetime,
            },
            bullets: Vec::new(),
        }
    }

    /// Set velocity from the held direction keys.
    ///
    /// An axis with neither of its keys held stops. Keys are then applied in
    /// up, left, down, right order and each overwrites its axis, so down
    /// beats up and right beats left when both are held.
    pub fn update_velocity_from_input(&mut self, flags: MoveFlags) {
        let speed = self.speed;
        let vel = &mut self.motion.velocity;

        if !flags.up && !flags.down {
            vel.y = 0.0;
        }
        if !flags.left && !flags.right {
            vel.x = 0.0;
        }

        if flags.up { vel.y = -speed; }
        if flags.left { vel.x = -speed; }
        if flags.down { vel.y = speed; }
        if flags.right { vel.x = speed; }
    }

    /// Fire a bullet along `aim` if requested and the fire rate allows it.
    ///
    /// `aim` need not be normalized. A zero or non-finite aim has no
    /// direction; the shot is skipped and the fire gate is left armed.
    /// Returns the new bullet's handle on success.
    pub fn try_fire(
        &mut self,
        entities: &mut EntityAllocator,
        aim: Vec2,
        requested: bool,
        now: f64,
    ) -> Option<Entity> {
        if !requested {
            return None;
        }
        let direction = normalize(aim)?;
        if !self.fire_gate.has_elapsed(now, self.fire_interval) {
            return None;
        }

        let id = entities.allocate();
        let weapon = self.weapon;
        self.bullets.push(Bullet {
            id,
            owner: self.id,
            motion: Motion {
                position: self.motion.position,
                velocity: direction * weapon.bullet_speed,
            },
            size: weapon.bullet_size,
            life_timer: TimedGate::new(now),
            lifetime: weapon.bullet_lifetime,
            valid: true,
        });
        Some(id)
    }

    /// Remove every bullet that has hit something or outlived its lifetime.
    /// Returns how many were removed.
    pub fn reap_bullets(&mut self, entities: &mut EntityAllocator, now: f64) -> usize {
        let before = self.bullets.len();
        self.bullets.retain(|bullet| {
            if bullet.is_dead(now) {
                entities.free(bullet.id);
                false
            } else {
                true
            }
        });
        before - self.bullets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::Body;

    fn setup() -> (EntityAllocator, Player) {
        let mut entities = EntityAllocator::new();
        let id = entities.allocate();
        let player = Player::new(id, vec2(400.0, 300.0), &GameConfig::default(), 0.0);
        (entities, player)
    }

    fn flags(up: bool, left: bool, down: bool, right: bool) -> MoveFlags {
        MoveFlags { up, left, down, right }
    }

    #[test]
    fn test_no_flags_stops() {
        let (_, mut player) = setup();
        player.motion.velocity = vec2(2.0, -2.0);
        player.update_velocity_from_input(MoveFlags::default());
        assert_eq!(player.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_right_only() {
        let (_, mut player) = setup();
        player.update_velocity_from_input(flags(false, false, false, true));
        assert_eq!(player.velocity(), vec2(2.0, 0.0));
    }

    #[test]
    fn test_up_left_diagonal() {
        let (_, mut player) = setup();
        player.update_velocity_from_input(flags(true, true, false, false));
        assert_eq!(player.velocity(), vec2(-2.0, -2.0));
    }

    #[test]
    fn test_opposite_keys_later_key_wins() {
        let (_, mut player) = setup();
        player.update_velocity_from_input(flags(true, false, true, false));
        assert_eq!(player.velocity(), vec2(0.0, 2.0));

        player.update_velocity_from_input(flags(false, true, false, true));
        assert_eq!(player.velocity(), vec2(2.0, 0.0));
    }

    #[test]
    fn test_releasing_one_axis_keeps_the_other() {
        let (_, mut player) = setup();
        player.update_velocity_from_input(flags(true, false, false, true));
        player.update_velocity_from_input(flags(true, false, false, false));
        assert_eq!(player.velocity(), vec2(0.0, -2.0));
    }

    #[test]
    fn test_fire_spawns_bullet_toward_aim() {
        let (mut entities, mut player) = setup();
        let id = player.try_fire(&mut entities, vec2(30.0, 40.0), true, 1.0).unwrap();

        assert_eq!(player.bullets.len(), 1);
        let bullet = &player.bullets[0];
        assert_eq!(bullet.id, id);
        assert_eq!(bullet.owner, player.id);
        assert_eq!(bullet.position(), vec2(400.0, 300.0));
        assert!((bullet.velocity() - vec2(6.0, 8.0)).length() < 1e-5);
        assert!(bullet.valid);
        assert!(entities.is_alive(id));
    }

    #[test]
    fn test_fire_not_requested() {
        let (mut entities, mut player) = setup();
        assert!(player.try_fire(&mut entities, vec2(1.0, 0.0), false, 1.0).is_none());
        assert!(player.bullets.is_empty());
    }

    #[test]
    fn test_fire_gate_armed_at_spawn() {
        let (mut entities, mut player) = setup();
        assert!(player.try_fire(&mut entities, vec2(1.0, 0.0), true, 0.1).is_none());
        assert!(player.try_fire(&mut entities, vec2(1.0, 0.0), true, 0.2).is_some());
    }

    #[test]
    fn test_fire_twice_within_interval_makes_one_bullet() {
        let (mut entities, mut player) = setup();
        assert!(player.try_fire(&mut entities, vec2(1.0, 0.0), true, 1.0).is_some());
        assert!(player.try_fire(&mut entities, vec2(1.0, 0.0), true, 1.1).is_none());
        assert_eq!(player.bullets.len(), 1);
    }

    #[test]
    fn test_fire_wait_fire_makes_two_bullets() {
        let (mut entities, mut player) = setup();
        assert!(player.try_fire(&mut entities, vec2(1.0, 0.0), true, 1.0).is_some());
        assert!(player.try_fire(&mut entities, vec2(0.0, 1.0), true, 1.25).is_some());
        assert_eq!(player.bullets.len(), 2);
    }

    #[test]
    fn test_zero_aim_skips_without_consuming_gate() {
        let (mut entities, mut player) = setup();
        assert!(player.try_fire(&mut entities, Vec2::ZERO, true, 1.0).is_none());
        assert!(player.bullets.is_empty());
        // Gate is still open, a real aim on the same instant fires
        assert!(player.try_fire(&mut entities, vec2(-1.0, 0.0), true, 1.0).is_some());
    }

    #[test]
    fn test_reap_empty_is_safe() {
        let (mut entities, mut player) = setup();
        assert_eq!(player.reap_bullets(&mut entities, 100.0), 0);
    }

    #[test]
    fn test_reap_removes_expired_and_invalid() {
        let (mut entities, mut player) = setup();
        let old = player.try_fire(&mut entities, vec2(1.0, 0.0), true, 1.0).unwrap();
        let spent = player.try_fire(&mut entities, vec2(1.0, 0.0), true, 2.0).unwrap();
        let fresh = player.try_fire(&mut entities, vec2(1.0, 0.0), true, 3.0).unwrap();
        player.bullets[1].invalidate();

        // First bullet is exactly at its 5 second lifetime
        let reaped = player.reap_bullets(&mut entities, 6.0);
        assert_eq!(reaped, 2);
        assert_eq!(player.bullets.len(), 1);
        assert_eq!(player.bullets[0].id, fresh);
        assert!(!entities.is_alive(old));
        assert!(!entities.is_alive(spent));
        assert!(player.bullets.iter().all(|b| !b.is_dead(6.0)));
    }
}
