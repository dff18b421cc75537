use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::derivatives::SlidingPendulum;
use crate::simulation::sampler::sample_pendulum;
use crate::simulation::scenario::PendulumScenario;
use crate::visualization::animator::{Animator, Frame};

/// Marker for the sliding pivot circle
#[derive(Component)]
struct PivotMarker;

/// Marker for the bob circle
#[derive(Component)]
struct BobMarker;

/// Marker for the elapsed-time text
#[derive(Component)]
struct TimeLabel;

/// Scene units (meters) → screen pixels
const SCALE: f32 = 320.0;

/// Playback state: the frame-stepping animator plus the driver-side counter
#[derive(Resource)]
struct Playback {
    animator: Animator,
    frame: usize,
    current: Option<Frame>,
}

pub fn run_pendulum(scenario: PendulumScenario) {
    let p = &scenario.parameters;
    let model = SlidingPendulum {
        g: p.g,
        l: p.l,
        m1: p.m1,
        m2: p.m2,
    };

    // Sample the whole trajectory up front; the viewer only replays it
    let trajectory = sample_pendulum(&model, scenario.state0, &scenario.grid);
    let dt = scenario.grid.step();
    let animator = Animator::new(trajectory, scenario.history_len, dt);

    println!("run_pendulum: starting Bevy viewer with {} frames", animator.frame_count());

    App::new()
        .insert_resource(Playback {
            animator,
            frame: 0,
            current: None,
        })
        .insert_resource(scenario)
        // Frame pacing: one trajectory sample per fixed tick of `dt` seconds
        .insert_resource(Time::<Fixed>::from_seconds(dt))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sliding pendulum".into(),
                resolution: (1250.0, 500.0).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(FixedUpdate, advance_frame_system)
        .add_systems(Update, (sync_markers_system, draw_trace_system, update_label_system))
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<PendulumScenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let l = scenario.parameters.l as f32;

    // Camera centered on the view box x in (-1.3 l, 2.2 l), y in (-1.2 l, 0.1)
    commands.spawn(Camera2dBundle {
        transform: Transform::from_xyz(0.45 * l * SCALE, -0.55 * l * SCALE, 0.0),
        ..Default::default()
    });

    // Pivot circle, constrained to the X axis
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(0.02 * SCALE))),
            material: materials.add(ColorMaterial::from(Color::WHITE)),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..Default::default()
        },
        PivotMarker,
    ));

    // Bob circle at the free end of the rod
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(0.03 * SCALE))),
            material: materials.add(ColorMaterial::from(Color::WHITE)),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..Default::default()
        },
        BobMarker,
    ));

    // Elapsed-time label, top-left corner
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 24.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        TimeLabel,
    ));
}

/// Fixed-tick frame step: produce the next frame and wrap the index so the
/// animation loops forever
fn advance_frame_system(mut playback: ResMut<Playback>) {
    // Split &mut Playback into &mut fields in one destructuring step
    let Playback {
        animator,
        frame,
        current,
    } = &mut *playback;

    if animator.frame_count() == 0 { // empty trajectory, nothing to play
        return;
    }

    *current = Some(animator.advance(*frame));
    *frame = (*frame + 1) % animator.frame_count();
}

fn sync_markers_system(
    playback: Res<Playback>,
    mut pivots: Query<&mut Transform, (With<PivotMarker>, Without<BobMarker>)>,
    mut bobs: Query<&mut Transform, (With<BobMarker>, Without<PivotMarker>)>,
) {
    let Some(frame) = playback.current.as_ref() else {
        return;
    };

    for mut transform in &mut pivots {
        transform.translation.x = frame.anchor.x as f32 * SCALE;
        transform.translation.y = frame.anchor.y as f32 * SCALE;
    }
    for mut transform in &mut bobs {
        transform.translation.x = frame.point.x as f32 * SCALE;
        transform.translation.y = frame.point.y as f32 * SCALE;
    }
}

/// Immediate-mode drawing of the rod and the trailing trace
fn draw_trace_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    let Some(frame) = playback.current.as_ref() else {
        return;
    };

    // Rod from pivot to bob
    let pivot = Vec2::new(frame.anchor.x as f32, frame.anchor.y as f32) * SCALE;
    let bob = Vec2::new(frame.point.x as f32, frame.point.y as f32) * SCALE;
    gizmos.line_2d(pivot, bob, Color::WHITE);

    // Trailing trace, most recent point first
    gizmos.linestrip_2d(
        playback
            .animator
            .history()
            .iter()
            .map(|p| Vec2::new(p.x as f32, p.y as f32) * SCALE),
        Color::srgb(1.0, 0.5, 0.0),
    );
}

fn update_label_system(playback: Res<Playback>, mut query: Query<&mut Text, With<TimeLabel>>) {
    let Some(frame) = playback.current.as_ref() else {
        return;
    };

    for mut text in &mut query {
        text.sections[0].value = frame.label.clone();
    }
}
