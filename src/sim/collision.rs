//! Pairwise collision resolution.
//!
//! Categories run in a fixed order and each pair loop walks pools in slot
//! order. Entity state (health, flags, positions) changes immediately;
//! spawns, scoring and sounds are queued as [`Effect`]s and applied in the
//! order raised, after all categories have run.

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::cargo_box::CargoBox;
use super::constants::*;
use super::enemy::{Beetle, Wasp};
use super::engine::{Rgba8, SoundId};
use super::entity::Entity;
use super::math::{discs_overlap, normalized_or_zero, push_disc_out_of_aabb, reflected, Vec2};
use super::pool::Pool;
use super::ship::PlayerShip;
use super::world::World;

/// Deferred consequence of a collision.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DebrisBurst {
        origin: Vec2,
        base_velocity: Vec2,
        count: usize,
        radius: f32,
        color: Rgba8,
    },
    Score(u32),
    Sound(SoundId),
    /// A destroyed box lets out a random enemy.
    ReleaseEnemy { at: Vec2 },
}

/// Enemies that damage the ship on contact and pay out when shot.
pub trait Hazard: Entity {
    const HIT_SCORE: u32;
    const KILL_SCORE: u32;
}

impl Hazard for Asteroid {
    const HIT_SCORE: u32 = ASTEROID_HIT_SCORE;
    const KILL_SCORE: u32 = ASTEROID_KILL_SCORE;
}

impl Hazard for Beetle {
    const HIT_SCORE: u32 = BEETLE_HIT_SCORE;
    const KILL_SCORE: u32 = BEETLE_KILL_SCORE;
}

impl Hazard for Wasp {
    const HIT_SCORE: u32 = WASP_HIT_SCORE;
    const KILL_SCORE: u32 = WASP_KILL_SCORE;
}

fn burst(origin: Vec2, direction: Vec2, count: usize, radius: f32, color: Rgba8) -> Effect {
    Effect::DebrisBurst {
        origin,
        base_velocity: normalized_or_zero(&direction) * DEBRIS_SPEED,
        count,
        radius,
        color,
    }
}

pub fn resolve(world: &mut World) -> Vec<Effect> {
    let mut fx = Vec::new();
    let World {
        ship,
        bullets,
        asteroids,
        beetles,
        wasps,
        boxes,
        ..
    } = world;

    if let Some(ship) = ship.as_mut() {
        player_vs_hazards(ship, asteroids, &mut fx);
        player_vs_hazards(ship, beetles, &mut fx);
        player_vs_hazards(ship, wasps, &mut fx);
    }
    bullets_vs_hazards(bullets, asteroids, &mut fx);
    bullets_vs_hazards(bullets, beetles, &mut fx);
    bullets_vs_hazards(bullets, wasps, &mut fx);
    bullets_vs_boxes(bullets, boxes, &mut fx);
    if let Some(ship) = ship.as_mut() {
        player_vs_boxes(ship, boxes, &mut fx);
    }
    fx
}

fn player_vs_hazards<T: Hazard>(ship: &mut PlayerShip, hazards: &mut Pool<T>, fx: &mut Vec<Effect>) {
    for hazard in hazards.values_mut() {
        if ship.core().is_dead() {
            return;
        }
        let h = hazard.core_mut();
        if h.is_dead() {
            continue;
        }
        let s = ship.core();
        if !discs_overlap(&s.position, s.physics_radius(), &h.position, h.physics_radius()) {
            continue;
        }

        let ship_pos = s.position;
        let ship_color = s.color;
        ship.core_mut().kill();
        fx.push(Effect::Sound(SoundId::EntityHit));
        fx.push(burst(ship_pos, h.velocity, PLAYER_DEATH_DEBRIS_NUM, ENTITY_DEAD_DEBRIS_RADIUS, ship_color));

        if h.apply_damage(1) {
            fx.push(burst(h.position, -h.velocity, ENEMY_DEATH_DEBRIS_NUM, ENTITY_DEAD_DEBRIS_RADIUS, h.color));
            h.destroy();
        }
    }
}

fn bullets_vs_hazards<T: Hazard>(bullets: &mut Pool<Bullet>, hazards: &mut Pool<T>, fx: &mut Vec<Effect>) {
    for hazard in hazards.values_mut() {
        let h = hazard.core_mut();
        if h.is_dead() {
            continue;
        }
        for bullet in bullets.values_mut() {
            let b = bullet.core_mut();
            if b.is_dead() {
                continue;
            }
            if !discs_overlap(&b.position, b.physics_radius(), &h.position, h.physics_radius()) {
                continue;
            }

            fx.push(Effect::Sound(SoundId::EntityHit));
            fx.push(burst(b.position, h.velocity, ENTITY_HIT_DEBRIS_NUM, ENTITY_HIT_DEBRIS_RADIUS, h.color));
            fx.push(Effect::Score(T::HIT_SCORE));
            b.destroy();

            if h.apply_damage(1) {
                fx.push(burst(h.position, b.velocity, ENEMY_DEATH_DEBRIS_NUM, ENTITY_DEAD_DEBRIS_RADIUS, h.color));
                fx.push(Effect::Score(T::KILL_SCORE));
                h.destroy();
                break;
            }
        }
    }
}

fn bullets_vs_boxes(bullets: &mut Pool<Bullet>, boxes: &mut Pool<CargoBox>, fx: &mut Vec<Effect>) {
    for cargo in boxes.values_mut() {
        if cargo.core().is_dead() {
            continue;
        }
        let collider = cargo.collider();
        for bullet in bullets.values_mut() {
            let b = bullet.core_mut();
            if b.is_dead() || !collider.is_point_inside(&b.position) {
                continue;
            }

            fx.push(Effect::Sound(SoundId::EntityHit));
            fx.push(burst(b.position, -b.velocity, ENTITY_HIT_DEBRIS_NUM, ENTITY_HIT_DEBRIS_RADIUS, BOX_COLOR));
            fx.push(Effect::Score(BOX_HIT_SCORE));
            b.destroy();

            let c = cargo.core_mut();
            if c.apply_damage(1) {
                let center = collider.center();
                fx.push(burst(center, b.velocity, ENEMY_DEATH_DEBRIS_NUM, ENTITY_DEAD_DEBRIS_RADIUS, BOX_COLOR));
                fx.push(Effect::Score(BOX_KILL_SCORE));
                fx.push(Effect::ReleaseEnemy { at: center });
                c.destroy();
                break;
            }
        }
    }
}

fn player_vs_boxes(ship: &mut PlayerShip, boxes: &Pool<CargoBox>, fx: &mut Vec<Effect>) {
    for cargo in boxes.values() {
        if ship.core().is_dead() {
            return;
        }
        if cargo.core().is_dead() {
            continue;
        }
        let s = ship.core_mut();
        let radius = s.physics_radius();
        if let Some(normal) = push_disc_out_of_aabb(&mut s.position, radius, &cargo.collider()) {
            if s.velocity.dot(&normal) < 0.0 {
                s.velocity = reflected(&s.velocity, &normal);
            }
            fx.push(burst(s.position, -s.velocity, BOX_BUMP_DEBRIS_NUM, ENTITY_HIT_DEBRIS_RADIUS, s.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::math::vec2;
    use crate::sim::rng::GameRng;

    fn world_with_ship(x: f32, y: f32) -> World {
        let mut world = World::new();
        world.ship = Some(PlayerShip::new(vec2(x, y), 0.0, 1));
        world
    }

    #[test]
    fn ramming_an_asteroid_kills_ship_and_chips_asteroid() {
        let mut rng = GameRng::seeded(1);
        let mut world = world_with_ship(50.0, 50.0);
        let id = world.asteroids.spawn(Asteroid::new(vec2(50.0, 50.0), &mut rng)).unwrap();

        let fx = resolve(&mut world);

        let ship = world.ship.as_ref().unwrap();
        assert!(ship.core().is_dead());
        assert_eq!(ship.core().health(), 0);
        assert_eq!(world.asteroids.get(id).unwrap().core().health(), ASTEROID_HEALTH - 1);
        let bursts: Vec<usize> = fx
            .iter()
            .filter_map(|e| match e {
                Effect::DebrisBurst { count, .. } => Some(*count),
                _ => None,
            })
            .collect();
        assert_eq!(bursts, vec![PLAYER_DEATH_DEBRIS_NUM]);
    }

    #[test]
    fn dead_ship_is_not_hit_twice() {
        let mut rng = GameRng::seeded(1);
        let mut world = world_with_ship(50.0, 50.0);
        world.asteroids.spawn(Asteroid::new(vec2(50.0, 50.0), &mut rng)).unwrap();
        world.asteroids.spawn(Asteroid::new(vec2(50.5, 50.0), &mut rng)).unwrap();

        resolve(&mut world);
        let damaged = world
            .asteroids
            .values()
            .filter(|a| a.core().health() < ASTEROID_HEALTH)
            .count();
        assert_eq!(damaged, 1);
    }

    #[test]
    fn killing_shot_pays_hit_and_kill() {
        let mut rng = GameRng::seeded(1);
        let mut world = World::new();
        let id = world.asteroids.spawn(Asteroid::new(vec2(100.0, 50.0), &mut rng)).unwrap();
        world.asteroids.get_mut(id).unwrap().core_mut().apply_damage(ASTEROID_HEALTH - 1);
        world.bullets.spawn(Bullet::new(vec2(100.0, 50.0), 0.0)).unwrap();

        let fx = resolve(&mut world);
        let score: u32 = fx
            .iter()
            .filter_map(|e| match e {
                Effect::Score(s) => Some(*s),
                _ => None,
            })
            .sum();
        assert_eq!(score, ASTEROID_HIT_SCORE + ASTEROID_KILL_SCORE);
        let asteroid = world.asteroids.get(id).unwrap().core();
        assert!(asteroid.is_dead() && asteroid.is_garbage());
        assert!(world.bullets.values().all(|b| b.core().is_garbage()));
    }

    #[test]
    fn one_bullet_hits_one_target() {
        let mut rng = GameRng::seeded(1);
        let mut world = World::new();
        world.asteroids.spawn(Asteroid::new(vec2(100.0, 50.0), &mut rng)).unwrap();
        world.asteroids.spawn(Asteroid::new(vec2(100.2, 50.0), &mut rng)).unwrap();
        world.bullets.spawn(Bullet::new(vec2(100.1, 50.0), 0.0)).unwrap();

        resolve(&mut world);
        let damaged = world
            .asteroids
            .values()
            .filter(|a| a.core().health() < ASTEROID_HEALTH)
            .count();
        assert_eq!(damaged, 1);
    }

    #[test]
    fn destroyed_box_releases_enemy_at_center() {
        let mut world = World::new();
        let id = world.boxes.spawn(CargoBox::new(vec2(100.0, 20.0), 0.0)).unwrap();
        world.boxes.get_mut(id).unwrap().core_mut().apply_damage(BOX_HEALTH - 1);
        world.bullets.spawn(Bullet::new(vec2(101.0, 21.0), 0.0)).unwrap();

        let fx = resolve(&mut world);
        assert!(fx.contains(&Effect::ReleaseEnemy { at: vec2(100.0, 20.0) }));
        assert!(world.boxes.get(id).unwrap().core().is_garbage());
    }

    #[test]
    fn ship_bounces_off_box() {
        let mut world = world_with_ship(97.5, 20.0);
        world.ship.as_mut().unwrap().core_mut().velocity = vec2(6.0, 0.0);
        world.boxes.spawn(CargoBox::new(vec2(100.0, 20.0), 0.0)).unwrap();

        let fx = resolve(&mut world);
        let ship = world.ship.as_ref().unwrap().core();
        assert!(ship.is_alive());
        assert!(ship.velocity.x < 0.0);
        assert!(ship.position.x <= 98.0 - PLAYER_SHIP_PHYSICS_RADIUS + 1e-4);
        assert!(matches!(fx.last(), Some(Effect::DebrisBurst { count: BOX_BUMP_DEBRIS_NUM, .. })));
    }
}
