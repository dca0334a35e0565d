//! Bevy app: scene setup, input, and per-frame stepping.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

use loom_compute::{ComputeBackend, ParallelBackend};
use loom_render::RenderAdapter;
use loom_solver::{ClothConfig, ClothSolver};

use crate::controls::{nudge_sphere, KeyState, ViewerControls};

const KEY_LIGHT_LUX: f32 = 10_000.0;

/// The simulation, owned by the app as a resource.
#[derive(Resource)]
struct SimRunner {
    solver: ClothSolver<ParallelBackend>,
}

#[derive(Resource, Default)]
struct Controls(ViewerControls);

#[derive(Component)]
struct ClothMesh;

#[derive(Component)]
struct SphereBody;

#[derive(Component)]
struct KeyLight;

/// Opens a window and runs `config` interactively until closed.
pub fn launch_viewer(config: ClothConfig, title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let solver = ClothSolver::new(config)?;
    tracing::info!(
        particles = solver.grid().particle_count(),
        backend = solver.backend().name(),
        "starting viewer"
    );

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!("Loom Viewer - {title}"),
            resolution: (1280., 720.).into(),
            ..default()
        }),
        ..default()
    }));
    app.add_plugins(PanOrbitCameraPlugin);

    app.insert_resource(SimRunner { solver });
    app.insert_resource(Controls::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08)));

    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, (handle_input, simulate_cloth).chain());

    app.run();

    Ok(())
}

fn to_bevy(v: loom_math::Vec3) -> Vec3 {
    Vec3::from_array(v.to_array())
}

/// Copies the current buffer into the cloth mesh.
fn write_cloth(runner: &SimRunner, mesh: &mut Mesh) {
    let source = runner.solver.vertex_source();
    let positions: Vec<[f32; 3]> = source.particles.iter().map(|p| p.position.to_array()).collect();
    let normals: Vec<[f32; 3]> = source.normals().iter().map(|n| n.to_array()).collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
}

fn handle_input(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut controls: ResMut<Controls>,
    mut runner: ResMut<SimRunner>,
    mut spheres: Query<&mut Transform, With<SphereBody>>,
    mut lights: Query<&mut DirectionalLight, With<KeyLight>>,
    mut exit: EventWriter<AppExit>,
) {
    let state = KeyState {
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
        forward: keys.pressed(KeyCode::ArrowUp),
        back: keys.pressed(KeyCode::ArrowDown),
        up: keys.pressed(KeyCode::KeyW),
        down: keys.pressed(KeyCode::KeyS),
        reset: keys.just_pressed(KeyCode::KeyR),
        pause: keys.just_pressed(KeyCode::Space),
        light: keys.just_pressed(KeyCode::KeyL),
        quit: keys.just_pressed(KeyCode::Escape) || keys.just_pressed(KeyCode::KeyQ),
    };
    let outcome = controls.0.apply(&state, time.delta_seconds());

    if outcome.quit {
        exit.send(AppExit::Success);
        return;
    }
    if outcome.reset {
        runner.solver.reset();
    }

    match nudge_sphere(&mut runner.solver, outcome.sphere_delta) {
        Ok(Some(center)) => {
            for mut transform in &mut spheres {
                transform.translation = to_bevy(center);
            }
        }
        Ok(None) => {}
        Err(e) => tracing::error!("sphere update rejected: {e}"),
    }

    let illuminance = if controls.0.light_on { KEY_LIGHT_LUX } else { 0.0 };
    for mut light in &mut lights {
        light.illuminance = illuminance;
    }
}

fn simulate_cloth(
    controls: Res<Controls>,
    mut runner: ResMut<SimRunner>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Handle<Mesh>, With<ClothMesh>>,
) {
    if controls.0.paused {
        return;
    }
    runner.solver.advance();

    if let Ok(handle) = query.get_single() {
        if let Some(mesh) = meshes.get_mut(handle) {
            write_cloth(&runner, mesh);
        }
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    runner: Res<SimRunner>,
) {
    let grid = runner.solver.grid();
    let spec = grid.spec();

    // 1. Cloth
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    let uvs: Vec<[f32; 2]> = grid.uvs.iter().map(|uv| uv.to_array()).collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(grid.strips.to_triangle_list()));
    write_cloth(&runner, &mut mesh);

    let cloth_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.2, 0.2),
        perceptual_roughness: 0.9,
        metallic: 0.05,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(mesh),
            material: cloth_material,
            ..default()
        },
        bevy::render::view::NoFrustumCulling,
        ClothMesh,
    ));

    // 2. Sphere
    if let Some(sphere) = runner.solver.sphere() {
        let sphere_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.7, 0.7, 0.7),
            perceptual_roughness: 0.6,
            ..default()
        });
        // Drawn slightly inside the collider so resting cloth is not hidden.
        let drawn_radius = sphere.radius * 0.98;
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(drawn_radius).mesh().uv(48, 24)),
                material: sphere_material,
                transform: Transform::from_translation(Vec3::from_array(sphere.center)),
                ..default()
            },
            SphereBody,
        ));
    }

    // 3. Lights
    let extent = spec.width.max(spec.height);
    let origin = Vec3::from_array(spec.origin);
    let focus = origin + Vec3::new(spec.width * 0.5, -extent * 0.5, spec.height * 0.5);

    commands.spawn((
        DirectionalLightBundle {
            directional_light: DirectionalLight {
                illuminance: KEY_LIGHT_LUX,
                shadows_enabled: true,
                ..default()
            },
            transform: Transform::from_translation(focus + Vec3::new(1.0, 2.0, 1.0) * extent)
                .looking_at(focus, Vec3::Y),
            ..default()
        },
        KeyLight,
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0,
    });

    // 4. Camera
    let distance = extent * 2.5;
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(focus + Vec3::new(0.0, 0.4, 1.0) * distance)
                .looking_at(focus, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            focus,
            radius: Some(distance),
            ..default()
        },
    ));
}
