//! Closed-form geometry of an elliptic orbit in its own plane.
//!
//! Positions are perifocal: the focus at the origin, periapsis along +X and
//! the orbit in the XY plane. [`OrbitFrame`] selects the single rotation step
//! that takes them elsewhere.

use crate::{vec3, Mat3, Num, Vec3, TWO_PI};

/// Frame the orbit is presented in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OrbitFrame {
    /// Orbital plane, the orientation angles are ignored
    #[default]
    Perifocal,
    /// Orbital plane rotated by the ascending node, inclination and argument of periapsis
    Equatorial,
}

/// Conic equation
///
/// r = a * (1 - e^2) / (1 + e * cos(v))
///
/// The denominator stays positive for `0 <= e < 1`.
#[inline]
pub fn radius(a: Num, e: Num, v: Num) -> Num {
    (a * (1.0 - e.powi(2))) / (1.0 + e * v.cos())
}

#[inline]
pub fn position(a: Num, e: Num, v: Num) -> Vec3 {
    let r = radius(a, e, v);

    vec3(r * v.cos(), r * v.sin(), 0.0)
}

/// `samples` points of the orbit at true anomalies evenly spaced over `[0, 2π)`.
pub fn orbit_path(a: Num, e: Num, samples: usize) -> OrbitPath {
    OrbitPath {
        a,
        e,
        rotation: Mat3::IDENTITY,
        samples,
        next: 0,
    }
}

/// Lazily evaluated orbit trace, see [`orbit_path`].
///
/// Cloning gives an independent iterator starting at the same point.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    a: Num,
    e: Num,
    rotation: Mat3,
    samples: usize,
    next: usize,
}

impl OrbitPath {
    pub fn with_rotation(mut self, rotation: Mat3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Angular distance between consecutive samples
    pub fn step(&self) -> Num {
        TWO_PI / self.samples as Num
    }

    pub fn angle(&self, index: usize) -> Num {
        index as Num * self.step()
    }
}

impl Iterator for OrbitPath {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.next >= self.samples {
            return None;
        }

        let v = self.angle(self.next);
        self.next += 1;

        Some(self.rotation * position(self.a, self.e, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.next;

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrbitPath {}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;
    use crate::PI;

    #[test_case(7000.0, 0.0 ; "circular")]
    #[test_case(10000.0, 0.2 ; "elliptic")]
    #[test_case(24000.0, 0.7 ; "molniya like")]
    fn apsides(a: Num, e: Num) {
        assert_relative_eq!(radius(a, e, 0.0), a * (1.0 - e), max_relative = 1e-5);
        assert_relative_eq!(radius(a, e, PI), a * (1.0 + e), max_relative = 1e-5);
    }

    #[test]
    fn periapsis_lies_on_x_axis() {
        let p = position(10000.0, 0.2, 0.0);

        assert_relative_eq!(p.x, 8000.0, max_relative = 1e-5);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn path_has_360_points() {
        let path = orbit_path(10000.0, 0.2, 360);

        assert_eq!(path.len(), 360);
        assert_eq!(path.count(), 360);
    }

    #[test]
    fn path_stops_one_step_short_of_closing() {
        let path = orbit_path(10000.0, 0.2, 360);
        let step = path.step();

        let points: Vec<Vec3> = path.collect();
        let first = points[0];
        let last = points[359];

        let first_angle = first.y.atan2(first.x);
        let mut last_angle = last.y.atan2(last.x);
        if last_angle < 0.0 {
            last_angle += TWO_PI;
        }

        assert_relative_eq!(first_angle, 0.0);
        assert_relative_eq!(last_angle - first_angle, TWO_PI - step, epsilon = 1e-4);
        assert!(first.distance(last) > 0.0);
    }

    #[test]
    fn path_is_restartable() {
        let path = orbit_path(7000.0, 0.1, 360);

        let first_pass: Vec<Vec3> = path.clone().collect();
        let second_pass: Vec<Vec3> = path.collect();

        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn circular_path_has_constant_radius() {
        for p in orbit_path(7000.0, 0.0, 360) {
            assert_relative_eq!(p.length(), 7000.0, max_relative = 1e-5);
        }
    }

    #[test]
    fn path_is_planar() {
        assert!(orbit_path(12000.0, 0.4, 360).all(|p| p.z == 0.0));
    }

    proptest! {
        #[test]
        fn radius_is_positive_and_bounded_by_apsides(
            a in 1.0..1.0e6 as Num,
            e in 0.0..0.99 as Num,
            v in 0.0..TWO_PI,
        ) {
            let r = radius(a, e, v);
            let slack = 1e-4 * a;

            prop_assert!(r > 0.0);
            prop_assert!(r >= a * (1.0 - e) - slack);
            prop_assert!(r <= a * (1.0 + e) + slack);
        }
    }
}
