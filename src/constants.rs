use crate::Num;

/// Gravitational constant
pub const G: Num = 6.67430e-11;

/// Mass of the Earth in kg
pub const EARTH_MASS: Num = 5.972e24;

/// Diameter of the central body in km
pub const EARTH_DIAMETER: Num = 12800.0;

/// Diameter of the orbiting body in km
pub const MOON_DIAMETER: Num = 3500.0;

/// True anomaly gained per frame while the body sits at `r == a`
pub const ANOMALY_RATE: Num = 0.01;

/// Initial camera distance as a multiple of the apoapsis distance
pub const INITIAL_ZOOM_FACTOR: Num = 1.5;

/// Every zoom command moves the camera by `1 / ZOOM_STEP_DIVISOR` of its distance
pub const ZOOM_STEP_DIVISOR: Num = 10.0;

/// Number of points in the drawn orbit trace
pub const ORBIT_SAMPLES: usize = 360;

/// Fixed delay between frames
pub const FRAME_DELAY_MS: u64 = 10;

#[cfg(not(feature = "f64"))]
pub use std::f32::consts::PI;
#[cfg(feature = "f64")]
pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;
