use crate::constants::{G, TWO_PI};
use crate::Num;

/// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
#[inline]
pub fn standard_gravitational_parameter(mass: Num) -> Num {
    G * mass
}

/// https://en.wikipedia.org/wiki/Orbital_period
///
/// `a` in meters, result in seconds.
pub fn period(a: Num, mass: Num) -> Num {
    TWO_PI * (a.powi(3) / standard_gravitational_parameter(mass)).sqrt()
}

/// https://en.wikipedia.org/wiki/Vis-viva_equation
///
/// v = sqrt(μ * (2 / r - 1 / a))
/// where
/// r is the current distance from the focus in meters
/// a is the semi-major axis in meters
///
/// The result is in m/s.
pub fn vis_viva_speed(r: Num, a: Num, mass: Num) -> Num {
    let μ = standard_gravitational_parameter(mass);

    (μ * (2.0 / r - 1.0 / a)).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::EARTH_MASS;

    #[test]
    fn circular_speed_matches_vis_viva() {
        let a = 7_000_000.0;
        let circular = (standard_gravitational_parameter(EARTH_MASS) / a).sqrt();

        assert_relative_eq!(vis_viva_speed(a, a, EARTH_MASS), circular, max_relative = 1e-5);
    }

    #[test]
    fn low_earth_orbit_period() {
        // ~ 97 minutes for a = 7000 km
        let minutes = period(7_000_000.0, EARTH_MASS) / 60.0;

        assert!((96.0..99.0).contains(&minutes), "period = {minutes} min");
    }

    #[test]
    fn faster_at_periapsis() {
        let a = 10_000_000.0;
        let e = 0.2;

        let at_periapsis = vis_viva_speed(a * (1.0 - e), a, EARTH_MASS);
        let at_apoapsis = vis_viva_speed(a * (1.0 + e), a, EARTH_MASS);

        assert!(at_periapsis > at_apoapsis);
    }
}
