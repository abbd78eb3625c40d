//! Conversions from the library precision to the single precision types used for rendering.

use crate::{Mat4, Vec3};

#[cfg(not(feature = "f64"))]
#[inline]
pub fn to_render(v: Vec3) -> glam::Vec3 {
    v
}

#[cfg(feature = "f64")]
#[inline]
pub fn to_render(v: Vec3) -> glam::Vec3 {
    v.as_vec3()
}

#[cfg(not(feature = "f64"))]
#[inline]
pub fn to_render_mat(m: Mat4) -> glam::Mat4 {
    m
}

#[cfg(feature = "f64")]
#[inline]
pub fn to_render_mat(m: Mat4) -> glam::Mat4 {
    m.as_mat4()
}
