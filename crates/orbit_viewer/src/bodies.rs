use bevy::prelude::*;
use kepler_orbit::constants::{EARTH_DIAMETER, MOON_DIAMETER};
use kepler_orbit::utils::to_render;

use crate::update::camera_transform;
use crate::{
    Anomaly, Orbit, Settings, View, FAR_PLANE, FIELD_OF_VIEW, NEAR_PLANE,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};

const SPHERE_SEGMENTS: usize = 32;

/// The body following the orbit
#[derive(Component)]
pub struct Satellite;

/// The body sitting at the focus
#[derive(Component)]
pub struct CentralBody;

#[derive(Component)]
pub struct ViewCamera;

/// Everything `setup` allocated, released again on shutdown
#[derive(Resource, Default)]
pub struct SceneAssets {
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
}

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    orbit: Res<Orbit>,
    anomaly: Res<Anomaly>,
    settings: Res<Settings>,
    view: Res<View>,
) {
    let mut scene = SceneAssets::default();

    let mut sphere = |diameter: f32| {
        let handle = meshes.add(Mesh::from(shape::UVSphere {
            radius: diameter / 2.0,
            sectors: SPHERE_SEGMENTS,
            stacks: SPHERE_SEGMENTS,
        }));
        scene.meshes.push(handle.clone());
        handle
    };

    let earth_mesh = sphere(EARTH_DIAMETER as f32);
    let moon_mesh = sphere(MOON_DIAMETER as f32);

    let mut flat_material = |color: Color| {
        let handle = materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..Default::default()
        });
        scene.materials.push(handle.clone());
        handle
    };

    let earth_material = flat_material(Color::rgb(0.0, 0.5, 1.0));
    let moon_material = flat_material(Color::RED);

    commands
        .spawn(PbrBundle {
            mesh: earth_mesh,
            material: earth_material,
            ..Default::default()
        })
        .insert(CentralBody)
        .insert(Name::new("Earth"));

    let position = to_render(anomaly.position(&orbit, settings.frame));

    commands
        .spawn(PbrBundle {
            mesh: moon_mesh,
            material: moon_material,
            transform: Transform::from_translation(position),
            ..Default::default()
        })
        .insert(Satellite)
        .insert(Name::new("Satellite"));

    commands
        .spawn(Camera3dBundle {
            projection: Projection::Perspective(PerspectiveProjection {
                fov: FIELD_OF_VIEW.to_radians(),
                aspect_ratio: WINDOW_WIDTH / WINDOW_HEIGHT,
                near: NEAR_PLANE,
                far: FAR_PLANE,
            }),
            transform: camera_transform(&view),
            ..Default::default()
        })
        .insert(ViewCamera);

    commands.insert_resource(scene);

    info!(
        "Scene ready, camera at {} km from the focus",
        -view.zoom_distance()
    );
}
