use std::time::Duration;

use bevy::prelude::*;
use bevy_egui::egui::{DragValue, Grid};
use bevy_egui::{egui, EguiContexts};
use kepler_orbit::astro;
use kepler_orbit::constants::EARTH_MASS;
use kepler_orbit::{CameraRig, Num, OrbitFrame, OrbitalElements};

use crate::update::FramePacer;
use crate::{Anomaly, Orbit, PointerCaptured, Settings, View};

const KILOMETERS: Num = 1000.0;
const SECONDS_IN_HOUR: Num = 3600.0;

#[derive(Resource, Debug, Clone)]
pub struct UiState {
    readouts_visible: bool,
    settings_visible: bool,
    controls_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            readouts_visible: true,
            settings_visible: false,
            controls_visible: false,
        }
    }
}

/// Label and formatted value of every readout row.
pub fn readouts(
    elements: &OrbitalElements,
    true_anomaly: Num,
    rig: &CameraRig,
) -> Vec<(&'static str, String)> {
    let a = elements.semi_major_axis();
    let r = elements.radius_at(true_anomaly);

    // The astro helpers work in SI units
    let speed =
        astro::vis_viva_speed(r * KILOMETERS, a * KILOMETERS, EARTH_MASS)
            / KILOMETERS;
    let period = astro::period(a * KILOMETERS, EARTH_MASS) / SECONDS_IN_HOUR;

    vec![
        ("True anomaly", format!("{:.1}°", true_anomaly.to_degrees())),
        ("Radius", format!("{r:.0} km")),
        ("Periapsis", format!("{:.0} km", elements.periapsis())),
        ("Apoapsis", format!("{:.0} km", elements.apoapsis())),
        ("Speed", format!("{speed:.3} km/s")),
        ("Period", format!("{period:.2} h")),
        ("Zoom", format!("{:.0}", rig.zoom_distance())),
        ("Pitch", format!("{:.1}°", rig.pitch())),
        ("Yaw", format!("{:.1}°", rig.yaw())),
    ]
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    mut ui_state: ResMut<UiState>,
    mut egui_context: EguiContexts,
    mut settings: ResMut<Settings>,
    mut pacer: ResMut<FramePacer>,
    mut captured: ResMut<PointerCaptured>,
    orbit: Res<Orbit>,
    anomaly: Res<Anomaly>,
    view: Res<View>,
) {
    let ctx = egui_context.ctx_mut();

    egui::TopBottomPanel::top("Top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Readouts").clicked() {
                ui_state.readouts_visible = !ui_state.readouts_visible;
            }

            if ui.button("Settings").clicked() {
                ui_state.settings_visible = !ui_state.settings_visible;
            }

            if ui.button("Controls").clicked() {
                ui_state.controls_visible = !ui_state.controls_visible;
            }
        });
    });

    egui::Window::new("Readouts")
        .open(&mut ui_state.readouts_visible)
        .show(ctx, |ui| {
            Grid::new("readouts").num_columns(2).show(ui, |ui| {
                for (label, value) in
                    readouts(&orbit, anomaly.true_anomaly(), &view)
                {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
        });

    egui::Window::new("Settings")
        .open(&mut ui_state.settings_visible)
        .show(ctx, |ui| {
            let mut oriented = settings.frame == OrbitFrame::Equatorial;
            if ui.checkbox(&mut oriented, "Apply orientation").changed() {
                settings.frame = if oriented {
                    OrbitFrame::Equatorial
                } else {
                    OrbitFrame::Perifocal
                };
                info!("Orbit frame set to {:?}", settings.frame);
            }

            ui.horizontal(|ui| {
                ui.label("Orbit samples");
                ui.add(
                    DragValue::new(&mut settings.orbit_samples)
                        .speed(1)
                        .clamp_range(3..=3600),
                );
            });

            let mut delay = pacer.delay().as_millis() as u64;
            ui.horizontal(|ui| {
                ui.label("Frame delay (ms)");
                ui.add(DragValue::new(&mut delay).speed(1).clamp_range(0..=100));
            });
            pacer.set_delay(Duration::from_millis(delay));
        });

    egui::Window::new("Controls")
        .open(&mut ui_state.controls_visible)
        .show(ctx, |ui| {
            ui.label("Hold the left mouse button and drag to rotate the view");
            ui.label("Up arrow zooms in, Down arrow zooms out");
            ui.label("Escape or closing the window quits");
        });

    captured.0 = ctx.wants_pointer_input();
}
