use std::io;
use std::process::ExitCode;
use std::time::Duration;

use bevy::prelude::*;
use bevy::window::{ExitCondition, WindowResolution};
use bevy_egui::EguiPlugin;
use kepler_orbit::constants::{FRAME_DELAY_MS, ORBIT_SAMPLES};
use kepler_orbit::{
    AcquisitionError, AnomalyStepper, CameraRig, ElementsError, OrbitFrame,
    OrbitalElements,
};

use crate::update::FramePacer;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;
/// Vertical field of view in degrees
const FIELD_OF_VIEW: f32 = 45.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1e7;

mod bodies;
mod draw;
mod prompt;
mod ui;
mod update;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("invalid orbital elements: {0}")]
    Configuration(#[from] ElementsError),
    #[error("could not obtain orbital elements: {0}")]
    Acquisition(#[from] AcquisitionError),
    #[error("invalid choice {0:?}, please type 'a' or 'b'")]
    InvalidChoice(String),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ViewerError> {
    let raw = prompt::acquire(&mut io::stdin().lock(), &mut io::stdout())?;
    let elements = OrbitalElements::new(raw)?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbit Viewer".into(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ..default()
        }),
        // Closing goes through the running flag so the scene is released first
        exit_condition: ExitCondition::DontExit,
        close_when_requested: false,
    }))
    .add_plugins(EguiPlugin)
    .insert_resource(ClearColor(Color::BLACK))
    .init_resource::<ui::UiState>();

    insert_state(&mut app, elements);

    app.add_systems(Startup, (bodies::setup, draw::configure_gizmos))
        .add_systems(
            Update,
            (
                ui::render,
                update::handle_input,
                update::advance_anomaly,
                update::apply_view,
                draw::orbit_path,
                update::place_satellite,
                update::shutdown,
            )
                .chain(),
        )
        .add_systems(Last, update::pace_frame)
        .run();

    Ok(())
}

fn insert_state(app: &mut App, elements: OrbitalElements) {
    app.insert_resource(Orbit(elements))
        .insert_resource(Anomaly(AnomalyStepper::new()))
        .insert_resource(View(CameraRig::new(&elements)))
        .insert_resource(Session { running: true })
        .insert_resource(Settings::default())
        .insert_resource(PointerCaptured::default())
        .insert_resource(FramePacer::new(Duration::from_millis(FRAME_DELAY_MS)));
}

/// The orbit being shown, fixed for the whole run
#[derive(Resource, Deref)]
pub struct Orbit(pub OrbitalElements);

#[derive(Resource, Deref, DerefMut)]
pub struct Anomaly(pub AnomalyStepper);

#[derive(Resource, Deref, DerefMut)]
pub struct View(pub CameraRig);

#[derive(Resource)]
pub struct Session {
    pub running: bool,
}

#[derive(Resource)]
pub struct Settings {
    pub orbit_samples: usize,
    pub frame: OrbitFrame,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orbit_samples: ORBIT_SAMPLES,
            frame: OrbitFrame::Perifocal,
        }
    }
}

/// Set while the overlay is using the pointer, so dragging a window does not spin the scene
#[derive(Resource, Default)]
pub struct PointerCaptured(pub bool);
