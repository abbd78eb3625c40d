use std::time::Duration;

use bevy::app::AppExit;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseMotion;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use kepler_orbit::utils::{to_render, to_render_mat};
use kepler_orbit::{CameraRig, InputCommand, Num};

use crate::bodies::{CentralBody, Satellite, SceneAssets, ViewCamera};
use crate::{Anomaly, Orbit, PointerCaptured, Session, Settings, View};

/// Coarse frame limiter, sleeps for a fixed delay once per frame.
#[derive(Resource, Debug, Clone)]
pub struct FramePacer {
    delay: Duration,
}

impl FramePacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn pace(&self) {
        std::thread::sleep(self.delay);
    }
}

/// Camera placement for the view matrix of `rig`.
pub fn camera_transform(rig: &CameraRig) -> Transform {
    Transform::from_matrix(to_render_mat(rig.view_matrix()).inverse())
}

fn key_command(key_code: KeyCode) -> Option<InputCommand> {
    match key_code {
        KeyCode::Up => Some(InputCommand::ZoomIn),
        KeyCode::Down => Some(InputCommand::ZoomOut),
        KeyCode::Escape => Some(InputCommand::Quit),
        _ => None,
    }
}

pub fn handle_input(
    mut motion: EventReader<MouseMotion>,
    mut keys: EventReader<KeyboardInput>,
    mut close_requests: EventReader<WindowCloseRequested>,
    buttons: Res<Input<MouseButton>>,
    captured: Res<PointerCaptured>,
    mut view: ResMut<View>,
    mut session: ResMut<Session>,
) {
    let held = buttons.pressed(MouseButton::Left) && !captured.0;

    let drags = motion.read().map(|event| InputCommand::Drag {
        dx: event.delta.x as Num,
        dy: event.delta.y as Num,
        held,
    });

    let presses = keys
        .read()
        .filter(|event| event.state == ButtonState::Pressed)
        .filter_map(|event| event.key_code.and_then(key_command));

    for command in drags.chain(presses) {
        if !view.apply(command) {
            info!("Quit requested");
            session.running = false;
        }
    }

    if close_requests.read().count() > 0 {
        info!("Window close requested");
        session.running = false;
    }
}

pub fn advance_anomaly(orbit: Res<Orbit>, mut anomaly: ResMut<Anomaly>) {
    anomaly.step(&orbit);
}

pub fn apply_view(
    view: Res<View>,
    mut cameras: Query<&mut Transform, With<ViewCamera>>,
) {
    for mut transform in cameras.iter_mut() {
        *transform = camera_transform(&view);
    }
}

pub fn place_satellite(
    orbit: Res<Orbit>,
    anomaly: Res<Anomaly>,
    settings: Res<Settings>,
    mut satellites: Query<&mut Transform, With<Satellite>>,
) {
    let position = to_render(anomaly.position(&orbit, settings.frame));

    for mut transform in satellites.iter_mut() {
        transform.translation = position;
    }
}

/// Tears the scene down once the running flag has been cleared.
#[allow(clippy::too_many_arguments)]
pub fn shutdown(
    mut commands: Commands,
    session: Res<Session>,
    bodies: Query<Entity, Or<(With<Satellite>, With<CentralBody>)>>,
    scene: Option<Res<SceneAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut exit: EventWriter<AppExit>,
    mut done: Local<bool>,
) {
    if session.running || *done {
        return;
    }

    for entity in bodies.iter() {
        commands.entity(entity).despawn();
    }

    if let Some(scene) = scene {
        for mesh in &scene.meshes {
            meshes.remove(mesh.id());
        }
        for material in &scene.materials {
            materials.remove(material.id());
        }
        commands.remove_resource::<SceneAssets>();
    }

    info!("Scene released, exiting");
    exit.send(AppExit);
    *done = true;
}

pub fn pace_frame(pacer: Res<FramePacer>) {
    pacer.pace();
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use kepler_orbit::{OrbitFrame, OrbitalElements, RawElements};
    use test_case::test_case;

    use super::*;

    fn elements() -> OrbitalElements {
        OrbitalElements::new(RawElements {
            eccentricity: 0.2,
            semi_major_axis: 10000.0,
            inclination: 0.0,
            ascending_node: 0.0,
            argument_of_periapsis: 0.0,
        })
        .unwrap()
    }

    fn test_app() -> App {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_event::<MouseMotion>()
            .add_event::<KeyboardInput>()
            .add_event::<WindowCloseRequested>()
            .init_resource::<Input<MouseButton>>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>();

        crate::insert_state(&mut app, elements());

        app.add_systems(
            Update,
            (
                handle_input,
                advance_anomaly,
                apply_view,
                place_satellite,
                shutdown,
            )
                .chain(),
        );

        app
    }

    fn press(app: &mut App, key_code: KeyCode, state: ButtonState) {
        app.world.send_event(KeyboardInput {
            scan_code: 0,
            key_code: Some(key_code),
            state,
            window: Entity::PLACEHOLDER,
        });
    }

    fn hold_left_button(app: &mut App) {
        app.world
            .resource_mut::<Input<MouseButton>>()
            .press(MouseButton::Left);
    }

    #[test]
    fn drag_rotates_while_left_button_is_held() {
        let mut app = test_app();
        hold_left_button(&mut app);

        app.world.send_event(MouseMotion {
            delta: Vec2::new(5.0, -3.0),
        });
        app.update();

        let view = app.world.resource::<View>();
        assert_eq!(view.yaw(), 5.0);
        assert_eq!(view.pitch(), -3.0);
    }

    #[test]
    fn motion_without_button_does_nothing() {
        let mut app = test_app();

        app.world.send_event(MouseMotion {
            delta: Vec2::new(5.0, -3.0),
        });
        app.update();

        let view = app.world.resource::<View>();
        assert_eq!(view.yaw(), 0.0);
        assert_eq!(view.pitch(), 0.0);
    }

    #[test]
    fn overlay_keeps_the_pointer() {
        let mut app = test_app();
        hold_left_button(&mut app);
        app.world.resource_mut::<PointerCaptured>().0 = true;

        app.world.send_event(MouseMotion {
            delta: Vec2::new(5.0, -3.0),
        });
        app.update();

        assert_eq!(app.world.resource::<View>().yaw(), 0.0);
    }

    #[test_case(KeyCode::Up, -16200.0 ; "zoom in")]
    #[test_case(KeyCode::Down, -19800.0 ; "zoom out")]
    fn arrow_keys_zoom(key_code: KeyCode, expected: Num) {
        let mut app = test_app();
        assert_eq!(app.world.resource::<View>().zoom_distance(), -18000.0);

        press(&mut app, key_code, ButtonState::Pressed);
        press(&mut app, key_code, ButtonState::Released);
        app.update();

        let zoom = app.world.resource::<View>().zoom_distance();
        assert!((zoom - expected).abs() < 1e-2, "zoom = {zoom}");
    }

    #[test]
    fn satellite_follows_the_anomaly() {
        let mut app = test_app();
        let satellite = app.world.spawn((Transform::default(), Satellite)).id();

        app.update();
        app.update();

        let anomaly = app.world.resource::<Anomaly>().0;
        assert!(anomaly.true_anomaly() > 0.0);

        let expected = to_render(anomaly.position(&elements(), OrbitFrame::Perifocal));
        let transform = app.world.get::<Transform>(satellite).unwrap();
        assert_eq!(transform.translation, expected);
    }

    #[test]
    fn camera_looks_at_the_focus_from_the_zoom_distance() {
        let mut app = test_app();
        let camera = app.world.spawn((Transform::default(), ViewCamera)).id();

        app.update();

        let transform = app.world.get::<Transform>(camera).unwrap();
        assert!(transform.translation.distance(Vec3::new(0.0, 0.0, 18000.0)) < 1e-1);
    }

    #[test]
    fn close_request_releases_the_scene() {
        let mut app = test_app();
        let satellite = app.world.spawn((Transform::default(), Satellite)).id();
        let earth = app.world.spawn((Transform::default(), CentralBody)).id();

        app.update();
        assert!(app.world.resource::<Session>().running);

        app.world.send_event(WindowCloseRequested {
            window: Entity::PLACEHOLDER,
        });
        app.update();

        assert!(!app.world.resource::<Session>().running);
        assert!(app.world.get_entity(satellite).is_none());
        assert!(app.world.get_entity(earth).is_none());
        assert!(!app.world.resource::<Events<AppExit>>().is_empty());
    }

    #[test]
    fn escape_quits() {
        let mut app = test_app();

        press(&mut app, KeyCode::Escape, ButtonState::Pressed);
        app.update();

        assert!(!app.world.resource::<Session>().running);
    }

    #[test]
    fn pacer_blocks_for_its_delay() {
        let delay = Duration::from_millis(10);
        let pacer = FramePacer::new(delay);

        let start = Instant::now();
        pacer.pace();

        assert!(start.elapsed() >= delay);
    }
}
