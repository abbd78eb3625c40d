use bevy::prelude::*;
use kepler_orbit::utils::to_render;

use crate::{Orbit, Settings};

const ORBIT_LINE_WIDTH: f32 = 1.0;

pub fn orbit_color() -> Color {
    Color::rgb(0.3, 0.3, 0.3)
}

pub fn configure_gizmos(mut config: ResMut<GizmoConfig>) {
    config.line_width = ORBIT_LINE_WIDTH;
}

/// Sample points of the orbit in render space, closed by repeating the first one.
pub fn orbit_strip(orbit: &Orbit, settings: &Settings) -> Vec<Vec3> {
    let mut points: Vec<Vec3> = orbit
        .path(settings.orbit_samples, settings.frame)
        .map(to_render)
        .collect();

    if let Some(&first) = points.first() {
        points.push(first);
    }

    points
}

pub fn orbit_path(mut lines: Gizmos, orbit: Res<Orbit>, settings: Res<Settings>) {
    lines.linestrip(orbit_strip(&orbit, &settings), orbit_color());
}
