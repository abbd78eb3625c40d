#![allow(non_snake_case)]

//! Two-body Keplerian orbit propagation and the view state of the orbit viewer.

pub mod acquisition;
pub mod astro;
pub mod camera;
pub mod constants;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod stepper;
pub mod utils;

#[cfg(not(feature = "f64"))]
pub type Num = f32;
#[cfg(not(feature = "f64"))]
pub use glam::{vec3, Mat3, Mat4, Vec3};

#[cfg(feature = "f64")]
pub type Num = f64;
#[cfg(feature = "f64")]
pub use glam::{dvec3 as vec3, DMat3 as Mat3, DMat4 as Mat4, DVec3 as Vec3};

pub use camera::{CameraRig, InputCommand};
pub use constants::{PI, TWO_PI};
pub use elements::{Field, OrbitalElements, RawElements};
pub use error::{AcquisitionError, ElementsError, ParseFailure};
pub use geometry::{OrbitFrame, OrbitPath};
pub use stepper::AnomalyStepper;
