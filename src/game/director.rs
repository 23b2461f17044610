//! Enemy director
//!
//! Owns every live enemy. Each tick it may spawn a new one somewhere on a
//! ring around the player, resolves bullet hits, and points every enemy at
//! the player.
//!
//! Collision policy: a bullet is tested against enemies in spawn order and
//! is spent by the first one it overlaps. Once invalid it is not tested
//! against any further enemy, so a bullet lands at most one hit per tick
//! even when enemies are stacked.

use std::f32::consts::TAU;
use macroquad::math::{vec2, Vec2};
use rand::Rng;
use super::components::{Body, Bullet, Enemy, Motion};
use super::config::GameConfig;
use super::entity::{Entity, EntityAllocator};
use super::event::{EnemyHit, EnemyKilled, Events};
use super::math::normalize;
use super::timer::TimedGate;

pub struct EnemyDirector {
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    spawn_gate: TimedGate,
    pub spawn_interval: f64,
    /// Spawn ring around the anchor
    pub min_distance: f32,
    pub max_distance: f32,
    enemy_speed: f32,
    enemy_size: Vec2,
    enemy_health: u32,
}

impl EnemyDirector {
    /// Director with no enemies; the first spawn is due one interval after `now`.
    pub fn new(config: &GameConfig, now: f64) -> Self {
        Self {
            enemies: Vec::new(),
            spawn_gate: TimedGate::new(now),
            spawn_interval: config.spawn_interval,
            min_distance: config.spawn_min_distance,
            max_distance: config.spawn_max_distance,
            enemy_speed: config.enemy_speed,
            enemy_size: vec2(config.enemy_size, config.enemy_size),
            enemy_health: config.enemy_health,
        }
    }

    /// True once per spawn interval
    pub fn should_spawn(&mut self, now: f64) -> bool {
        self.spawn_gate.has_elapsed(now, self.spawn_interval)
    }

    /// Spawn an enemy at a random angle and distance from `anchor`.
    pub fn spawn_enemy<R: Rng + ?Sized>(
        &mut self,
        entities: &mut EntityAllocator,
        anchor: Vec2,
        rng: &mut R,
    ) -> Entity {
        let angle = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(self.min_distance..=self.max_distance);
        let offset = vec2(angle.cos() * distance, angle.sin() * distance);
        self.spawn_enemy_at(entities, anchor + offset, Vec2::ZERO)
    }

    /// Spawn an enemy at an exact position
    pub fn spawn_enemy_at(
        &mut self,
        entities: &mut EntityAllocator,
        position: Vec2,
        velocity: Vec2,
    ) -> Entity {
        let id = entities.allocate();
        self.enemies.push(Enemy {
            id,
            motion: Motion { position, velocity },
            speed: self.enemy_speed,
            size: self.enemy_size,
            health: self.enemy_health,
        });
        id
    }

    /// Point every enemy at `target` at its pursuit speed.
    ///
    /// An enemy sitting exactly on the target has no direction to go and
    /// keeps its current velocity.
    pub fn update_ai(&mut self, target: Vec2) {
        for enemy in &mut self.enemies {
            if let Some(direction) = normalize(target - enemy.position()) {
                enemy.motion.velocity = direction * enemy.speed;
            }
        }
    }

    /// Apply bullet hits to enemies.
    ///
    /// Each valid bullet is spent on the first enemy it overlaps. That
    /// enemy loses a hit point, or is removed if it had none left.
    pub fn resolve_collisions(
        &mut self,
        entities: &mut EntityAllocator,
        bullets: &mut [Bullet],
        events: &mut Events,
    ) {
        for bullet in bullets.iter_mut().filter(|b| b.valid) {
            let bounds = bullet.bounds();
            let Some(index) = self
                .enemies
                .iter()
                .position(|enemy| enemy.bounds().intersects(&bounds))
            else {
                continue;
            };

            bullet.invalidate();

            if self.enemies[index].health == 0 {
                let dead = self.enemies.remove(index);
                entities.free(dead.id);
                events.killed.send(EnemyKilled {
                    enemy: dead.id,
                    bullet: bullet.id,
                    killer: bullet.owner,
                    position: dead.position(),
                });
            } else {
                let enemy = &mut self.enemies[index];
                enemy.health -= 1;
                events.hit.send(EnemyHit {
                    enemy: enemy.id,
                    bullet: bullet.id,
                    remaining: enemy.health,
                });
            }
        }
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bullet_at(entities: &mut EntityAllocator, position: Vec2) -> Bullet {
        Bullet::stationary(entities.allocate(), position, 0.0)
    }

    fn director(config: &GameConfig) -> (EntityAllocator, EnemyDirector) {
        (EntityAllocator::new(), EnemyDirector::new(config, 0.0))
    }

    #[test]
    fn test_should_spawn_follows_interval() {
        let (_, mut dir) = director(&GameConfig::default());
        assert!(!dir.should_spawn(1.0));
        assert!(dir.should_spawn(2.0));
        assert!(!dir.should_spawn(3.9));
        assert!(dir.should_spawn(4.0));
    }

    #[test]
    fn test_spawn_with_fixed_distance_lands_on_ring() {
        let config = GameConfig {
            spawn_min_distance: 100.0,
            spawn_max_distance: 100.0,
            ..GameConfig::default()
        };
        let (mut entities, mut dir) = director(&config);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            dir.spawn_enemy(&mut entities, Vec2::ZERO, &mut rng);
        }
        assert_eq!(dir.enemy_count(), 50);
        for enemy in &dir.enemies {
            assert!((enemy.position().length() - 100.0).abs() < 1e-3);
            assert_eq!(enemy.velocity(), Vec2::ZERO);
            assert_eq!(enemy.health, 5);
        }
    }

    #[test]
    fn test_spawn_stays_inside_ring_around_anchor() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        let anchor = vec2(400.0, 300.0);

        for _ in 0..200 {
            let id = dir.spawn_enemy(&mut entities, anchor, &mut rng);
            assert!(entities.is_alive(id));
        }
        for enemy in &dir.enemies {
            let d = (enemy.position() - anchor).length();
            assert!(d >= 100.0 - 1e-3 && d <= 300.0 + 1e-3, "distance {}", d);
        }
    }

    #[test]
    fn test_ai_steers_toward_target() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        dir.spawn_enemy_at(&mut entities, vec2(0.0, 0.0), Vec2::ZERO);
        dir.spawn_enemy_at(&mut entities, vec2(10.0, 10.0), Vec2::ZERO);

        dir.update_ai(vec2(10.0, 0.0));
        assert!((dir.enemies[0].velocity() - vec2(1.0, 0.0)).length() < 1e-6);
        assert!((dir.enemies[1].velocity() - vec2(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_ai_on_target_keeps_velocity() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        dir.spawn_enemy_at(&mut entities, vec2(5.0, 5.0), vec2(0.5, 0.0));
        dir.update_ai(vec2(5.0, 5.0));
        assert_eq!(dir.enemies[0].velocity(), vec2(0.5, 0.0));
    }

    #[test]
    fn test_overlapping_bullet_damages_enemy() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        let mut events = Events::new();
        let enemy = dir.spawn_enemy_at(&mut entities, vec2(100.0, 100.0), Vec2::ZERO);
        let mut bullets = vec![bullet_at(&mut entities, vec2(105.0, 100.0))];

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);

        assert_eq!(dir.enemies[0].health, 4);
        assert!(!bullets[0].valid);
        assert_eq!(events.hit.len(), 1);
        assert_eq!(events.hit.iter().next().unwrap().enemy, enemy);
        assert!(events.killed.is_empty());
    }

    #[test]
    fn test_non_overlapping_pair_is_unchanged() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        let mut events = Events::new();
        dir.spawn_enemy_at(&mut entities, vec2(100.0, 100.0), Vec2::ZERO);
        let mut bullets = vec![bullet_at(&mut entities, vec2(200.0, 100.0))];

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);

        assert_eq!(dir.enemies[0].health, 5);
        assert!(bullets[0].valid);
        assert!(events.is_empty());
    }

    #[test]
    fn test_spent_bullet_is_ignored() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        let mut events = Events::new();
        dir.spawn_enemy_at(&mut entities, vec2(100.0, 100.0), Vec2::ZERO);
        let mut bullets = vec![bullet_at(&mut entities, vec2(100.0, 100.0))];
        bullets[0].invalidate();

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);
        assert_eq!(dir.enemies[0].health, 5);
    }

    #[test]
    fn test_zero_health_enemy_dies_on_first_hit() {
        let config = GameConfig { enemy_health: 0, ..GameConfig::default() };
        let (mut entities, mut dir) = director(&config);
        let mut events = Events::new();
        let enemy = dir.spawn_enemy_at(&mut entities, vec2(0.0, 0.0), Vec2::ZERO);
        let mut bullets = vec![bullet_at(&mut entities, vec2(0.0, 0.0))];

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);

        assert_eq!(dir.enemy_count(), 0);
        assert!(!entities.is_alive(enemy));
        assert_eq!(events.killed.len(), 1);
        assert!(!bullets[0].valid);
    }

    #[test]
    fn test_enemy_takes_health_plus_one_hits() {
        let config = GameConfig { enemy_health: 2, ..GameConfig::default() };
        let (mut entities, mut dir) = director(&config);
        let mut events = Events::new();
        dir.spawn_enemy_at(&mut entities, vec2(0.0, 0.0), Vec2::ZERO);

        for hit in 1..=3 {
            let mut bullets = vec![bullet_at(&mut entities, vec2(0.0, 0.0))];
            dir.resolve_collisions(&mut entities, &mut bullets, &mut events);
            let alive = dir.enemy_count() == 1;
            assert_eq!(alive, hit < 3, "after hit {}", hit);
        }
        assert_eq!(events.hit.len(), 2);
        assert_eq!(events.killed.len(), 1);
    }

    #[test]
    fn test_bullet_hits_only_first_of_stacked_enemies() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        let mut events = Events::new();
        dir.spawn_enemy_at(&mut entities, vec2(0.0, 0.0), Vec2::ZERO);
        dir.spawn_enemy_at(&mut entities, vec2(2.0, 0.0), Vec2::ZERO);
        let mut bullets = vec![bullet_at(&mut entities, vec2(1.0, 0.0))];

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);

        assert_eq!(dir.enemies[0].health, 4);
        assert_eq!(dir.enemies[1].health, 5);
    }

    #[test]
    fn test_kill_keeps_remaining_enemies_in_order() {
        let config = GameConfig { enemy_health: 0, ..GameConfig::default() };
        let (mut entities, mut dir) = director(&config);
        let mut events = Events::new();
        let a = dir.spawn_enemy_at(&mut entities, vec2(0.0, 0.0), Vec2::ZERO);
        let b = dir.spawn_enemy_at(&mut entities, vec2(100.0, 0.0), Vec2::ZERO);
        let c = dir.spawn_enemy_at(&mut entities, vec2(200.0, 0.0), Vec2::ZERO);
        let mut bullets = vec![bullet_at(&mut entities, vec2(100.0, 0.0))];

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);

        let ids: Vec<_> = dir.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(!entities.is_alive(b));
    }

    #[test]
    fn test_two_bullets_same_enemy_same_tick() {
        let (mut entities, mut dir) = director(&GameConfig::default());
        let mut events = Events::new();
        dir.spawn_enemy_at(&mut entities, vec2(0.0, 0.0), Vec2::ZERO);
        let mut bullets = vec![
            bullet_at(&mut entities, vec2(0.0, 0.0)),
            bullet_at(&mut entities, vec2(3.0, 3.0)),
        ];

        dir.resolve_collisions(&mut entities, &mut bullets, &mut events);

        assert_eq!(dir.enemies[0].health, 3);
        assert!(bullets.iter().all(|b| !b.valid));
    }
}
