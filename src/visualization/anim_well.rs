use bevy::prelude::*;

use crate::simulation::sampler::sample_well;
use crate::simulation::scenario::WellScenario;
use crate::simulation::well::WellModel;
use crate::visualization::animator::{Animator, Frame};

/// Marker for the elapsed-time text
#[derive(Component)]
struct TimeLabel;

/// Square viewport size in pixels
const VIEW_PX: f32 = 500.0;

/// Scene units → screen pixels, derived from the sampled time span so the
/// square view box (x in (-span/2, span/2), t in (0, span)) fills the window
#[derive(Resource)]
struct ViewBox {
    scale: f32,
    span: f32,
}

/// Playback state: the frame-stepping animator plus the driver-side counter
#[derive(Resource)]
struct Playback {
    animator: Animator,
    frame: usize,
    current: Option<Frame>,
}

pub fn run_well(scenario: WellScenario) {
    let p = &scenario.parameters;
    let model = WellModel {
        m: p.m,
        a: p.a,
        v0: p.v0,
    };

    // Closed-form trajectory, evaluated over the whole grid up front
    let trajectory = sample_well(&model, p.energy, &scenario.grid);
    let dt = scenario.grid.step();
    let span = scenario.grid.span() as f32;
    let animator = Animator::new(trajectory, scenario.history_len, dt);

    println!("run_well: starting Bevy viewer with {} frames", animator.frame_count());

    App::new()
        .insert_resource(Playback {
            animator,
            frame: 0,
            current: None,
        })
        .insert_resource(ViewBox {
            scale: VIEW_PX / span,
            span,
        })
        // Frame pacing: one trajectory sample per fixed tick of `dt` seconds
        .insert_resource(Time::<Fixed>::from_seconds(dt))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // The energy ratio selecting the orbit doubles as the title
                title: format!("Potential well, E/V_0 = {:.2}", p.energy / p.v0),
                resolution: (VIEW_PX, VIEW_PX).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(FixedUpdate, advance_frame_system)
        .add_systems(Update, (draw_trace_system, update_label_system))
        .run();
}

fn setup_scene_system(mut commands: Commands, view: Res<ViewBox>) {
    // Time runs up the vertical axis, so center the camera at half the span
    commands.spawn(Camera2dBundle {
        transform: Transform::from_xyz(0.0, 0.5 * view.span * view.scale, 0.0),
        ..Default::default()
    });

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

/// Immediate-mode drawing of the (x, t) trace climbing the window
fn draw_trace_system(playback: Res<Playback>, view: Res<ViewBox>, mut gizmos: Gizmos) {
    if playback.current.is_none() {
        return;
    }

    gizmos.linestrip_2d(
        playback
            .animator
            .history()
            .iter()
            .map(|p| Vec2::new(p.x as f32, p.y as f32) * view.scale),
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
