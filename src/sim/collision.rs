//! Disc-disc collision detection and response
//!
//! Overlapping discs are first pushed apart along the line of centers, then their
//! velocities are exchanged along that line as in a 1D elastic collision.
//! Tangential motion passes through untouched. Restitution and per-body speed caps
//! are applied last.

use glam::Vec2;

use super::body::Body;
use crate::consts::DEGENERATE_DISTANCE;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the discs overlapped
    pub hit: bool,
    /// Unit normal from the first body toward the second
    pub normal: Vec2,
    /// Overlap depth before correction
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Whether two discs overlap (touching does not count)
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let min_distance = a.radius() + b.radius();
    a.pos.distance_squared(b.pos) < min_distance * min_distance
}

/// Unit normal from `a` to `b`. Coincident centers fall back to +X.
fn contact_normal(delta: Vec2, distance: f32) -> Vec2 {
    if distance > DEGENERATE_DISTANCE {
        delta / distance
    } else {
        Vec2::X
    }
}

/// Post-collision normal speeds for a 1D elastic exchange
#[inline]
pub fn elastic_exchange(v1: f32, m1: f32, v2: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    (
        (v1 * (m1 - m2) + 2.0 * m2 * v2) / total,
        (v2 * (m2 - m1) + 2.0 * m1 * v1) / total,
    )
}

/// Resolve a possible collision between two bodies.
///
/// On overlap the bodies end exactly `a.radius + b.radius` apart, with velocities
/// exchanged along the normal, scaled by `restitution` and capped at each body's
/// max speed. Without overlap nothing changes.
pub fn resolve(a: &mut Body, b: &mut Body, restitution: f32) -> CollisionResult {
    if !overlaps(a, b) {
        return CollisionResult::miss();
    }

    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();
    let normal = contact_normal(delta, distance);
    let overlap = min_distance - distance;

    // Separate before touching velocities
    let separation = normal * (overlap / 2.0);
    a.pos -= separation;
    b.pos += separation;

    let tangent = normal.perp();
    let v1n = a.vel.dot(normal);
    let v1t = a.vel.dot(tangent);
    let v2n = b.vel.dot(normal);
    let v2t = b.vel.dot(tangent);

    let (v1n_after, v2n_after) = elastic_exchange(v1n, a.mass(), v2n, b.mass());

    a.vel = (normal * v1n_after + tangent * v1t) * restitution;
    b.vel = (normal * v2n_after + tangent * v2t) * restitution;
    a.vel = a.vel.clamp_length_max(a.max_speed());
    b.vel = b.vel.clamp_length_max(b.max_speed());

    CollisionResult {
        hit: true,
        normal,
        penetration: overlap,
    }
}

/// Sum of kinetic energy over a set of bodies
pub fn total_kinetic_energy<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> f32 {
    bodies.into_iter().map(Body::kinetic_energy).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::{BodyKind, CoinKind};
    use proptest::prelude::*;

    fn disc(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Body {
        let mut body = Body::new(
            BodyKind::Coin(CoinKind::White),
            pos,
            radius,
            mass,
            0.985,
            1000.0,
        )
        .unwrap();
        body.vel = vel;
        body
    }

    #[test]
    fn test_no_overlap_is_noop() {
        let mut a = disc(Vec2::ZERO, Vec2::new(1.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(25.0, 0.0), Vec2::new(-1.0, 0.0), 10.0, 1.0);
        let (a0, b0) = (a.clone(), b.clone());

        let result = resolve(&mut a, &mut b, 0.8);
        assert!(!result.hit);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_touching_is_noop() {
        let mut a = disc(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let mut b = disc(Vec2::new(20.0, 0.0), Vec2::ZERO, 10.0, 1.0);
        assert!(!resolve(&mut a, &mut b, 0.8).hit);
    }

    #[test]
    fn test_separates_to_contact_distance() {
        let mut a = disc(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let mut b = disc(Vec2::new(12.0, 5.0), Vec2::ZERO, 8.0, 3.0);

        let result = resolve(&mut a, &mut b, 0.8);
        assert!(result.hit);
        assert!((a.pos.distance(b.pos) - 18.0).abs() < 1e-4);
        // Split evenly: midpoint unchanged
        assert!(((a.pos + b.pos) / 2.0 - Vec2::new(6.0, 2.5)).length() < 1e-4);
    }

    #[test]
    fn test_equal_mass_head_on_exchange() {
        let mut a = disc(Vec2::ZERO, Vec2::new(3.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(18.0, 0.0), Vec2::new(-3.0, 0.0), 10.0, 1.0);

        resolve(&mut a, &mut b, 1.0);
        assert!((a.vel - Vec2::new(-3.0, 0.0)).length() < 1e-5);
        assert!((b.vel - Vec2::new(3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_moving_into_resting_equal_mass() {
        let mut a = disc(Vec2::ZERO, Vec2::new(5.0, 0.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(19.0, 0.0), Vec2::ZERO, 10.0, 1.0);

        resolve(&mut a, &mut b, 0.8);
        assert!(a.vel.length() < 1e-5);
        assert!((b.vel - Vec2::new(4.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_tangential_component_preserved() {
        // Normal along +X; a slides along Y as well
        let mut a = disc(Vec2::ZERO, Vec2::new(2.0, 1.5), 10.0, 1.0);
        let mut b = disc(Vec2::new(19.0, 0.0), Vec2::ZERO, 10.0, 1.0);

        resolve(&mut a, &mut b, 1.0);
        assert!(a.vel.x.abs() < 1e-5);
        assert!((a.vel.y - 1.5).abs() < 1e-5);
        assert!((b.vel - Vec2::new(2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_heavy_striker_sends_light_coin_faster() {
        let mut striker = disc(Vec2::new(0.0, 100.0), Vec2::new(0.0, -20.0), 14.6, 4.0);
        let mut queen = disc(Vec2::new(0.0, 76.0), Vec2::ZERO, 9.7, 1.0);

        assert!(resolve(&mut striker, &mut queen, 0.8).hit);
        assert!(queen.speed() > striker.speed());
        assert!(queen.vel.y < 0.0);
        assert!(striker.vel.y < 0.0);
    }

    #[test]
    fn test_speed_clamped_per_body() {
        let mut a = Body::new(BodyKind::Striker, Vec2::ZERO, 10.0, 10.0, 0.985, 100.0).unwrap();
        a.vel = Vec2::new(90.0, 0.0);
        let mut b = Body::new(
            BodyKind::Coin(CoinKind::Queen),
            Vec2::new(15.0, 0.0),
            10.0,
            1.0,
            0.985,
            25.0,
        )
        .unwrap();

        resolve(&mut a, &mut b, 1.0);
        assert!(b.speed() <= 25.0 + 1e-4);
    }

    #[test]
    fn test_coincident_centers_use_fallback_axis() {
        let mut a = disc(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 10.0, 1.0);
        let mut b = disc(Vec2::new(50.0, 50.0), Vec2::new(-1.0, 0.0), 10.0, 1.0);

        let result = resolve(&mut a, &mut b, 0.8);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::X);
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.vel.is_finite() && b.vel.is_finite());
        assert!((a.pos.distance(b.pos) - 20.0).abs() < 1e-4);
        assert!(b.pos.x > a.pos.x);
    }

    #[test]
    fn test_argument_order_symmetric() {
        let a0 = disc(Vec2::ZERO, Vec2::new(4.0, 1.0), 10.0, 4.0);
        let b0 = disc(Vec2::new(15.0, 6.0), Vec2::new(-2.0, 0.5), 8.0, 1.0);

        let (mut a1, mut b1) = (a0.clone(), b0.clone());
        resolve(&mut a1, &mut b1, 0.8);
        let (mut a2, mut b2) = (a0.clone(), b0.clone());
        resolve(&mut b2, &mut a2, 0.8);

        assert!((a1.pos - a2.pos).length() < 1e-4);
        assert!((b1.pos - b2.pos).length() < 1e-4);
        assert!((a1.vel - a2.vel).length() < 1e-4);
        assert!((b1.vel - b2.vel).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_no_persistent_overlap(
            dx in -19.0f32..19.0,
            dy in -19.0f32..19.0,
            m1 in 0.5f32..8.0,
            m2 in 0.5f32..8.0,
        ) {
            prop_assume!(Vec2::new(dx, dy).length() > 0.01);
            let mut a = disc(Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, m1);
            let mut b = disc(Vec2::new(100.0 + dx, 100.0 + dy), Vec2::ZERO, 10.0, m2);
            prop_assume!(overlaps(&a, &b));

            resolve(&mut a, &mut b, 0.8);
            prop_assert!((a.pos.distance(b.pos) - 20.0).abs() < 1e-3);
        }

        #[test]
        fn prop_energy_never_increases(
            dx in -17.0f32..17.0,
            dy in -17.0f32..17.0,
            v1x in -20.0f32..20.0,
            v1y in -20.0f32..20.0,
            v2x in -20.0f32..20.0,
            v2y in -20.0f32..20.0,
            m1 in 0.5f32..8.0,
            m2 in 0.5f32..8.0,
            restitution in 0.0f32..=1.0,
        ) {
            let mut a = disc(Vec2::ZERO, Vec2::new(v1x, v1y), 9.0, m1);
            let mut b = disc(Vec2::new(dx, dy), Vec2::new(v2x, v2y), 9.0, m2);

            let before = a.kinetic_energy() + b.kinetic_energy();
            resolve(&mut a, &mut b, restitution);
            let after = a.kinetic_energy() + b.kinetic_energy();

            prop_assert!(after <= before * (1.0 + 1e-4) + 1e-3);
        }
    }
}
