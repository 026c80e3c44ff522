//! Headless fountain demo.
//!
//! Runs a body-mounted emitter for a number of frames (default 600) at a
//! fixed 60 Hz step, drags the body along a short path halfway through, and
//! logs particle counts once per simulated second.
//!
//! ```text
//! RUST_LOG=info cargo run -- 900
//! ```

use log::{info, warn};
use pe2d::prelude::*;
use pe2d::MAX_PARTICLES;

const DEFAULT_FRAMES: u64 = 600;
const STEP: f32 = 1.0 / 60.0;

fn frames_from_args() -> u64 {
    match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            warn!("'{arg}' is not a frame count, running {DEFAULT_FRAMES} frames");
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    }
}

/// Cursor script: grab the body at frame `start`, drag it 200 px right
/// over one second, then let go.
fn drive_drag(input: &mut Input, frame: u64, start: u64, origin: Vec2) {
    let Some(step) = frame.checked_sub(start) else {
        return;
    };
    match step {
        0 => {
            input.move_cursor(origin);
            input.press(MouseButton::Left);
        }
        1..=60 => input.move_cursor(origin + Vec2::new(step as f32 * 200.0 / 60.0, 0.0)),
        61 => input.release(MouseButton::Left),
        _ => {}
    }
}

fn main() {
    env_logger::init();

    let frames = frames_from_args();
    let viewport = Rect::from_size(800.0, 600.0);
    let origin = Vec2::new(300.0, 300.0);

    let config = EmitterConfig::fountain().with_viewport(viewport);
    let mut body = Body::new(Emitter::new(Vec2::ZERO, config), origin).with_bounds(viewport);
    let mut settings = Settings::from_emitter(body.emitter());
    let mut input = Input::new();
    let mut drag = DragHandle::new();
    let mut time = Time::new().with_fixed_delta(STEP);
    let mut batch = PointBatch::with_capacity(MAX_PARTICLES + 1);

    settings.set(EmitterUpdate::Enabled(true));
    info!("running {frames} frames, cap {} particles", settings.config().max_particles);

    let drag_start = frames / 2;
    for frame in 0..frames {
        let dt = time.tick();

        drive_drag(&mut input, frame, drag_start, origin);
        if drag.update(&input, &mut body) {
            log::trace!("body dragged to {}", body.position);
        }
        input.begin_frame();

        settings.apply_pending(body.emitter_mut());
        body.update(dt);

        batch.clear();
        body.render(&mut batch);
        settings.sync_status(time.fps(), body.emitter().particle_count());

        if time.frame() % 60 == 0 {
            info!(
                "t={:.1}s particles={} drawn={} body=({:.0}, {:.0}) fps={:.0}",
                time.elapsed(),
                settings.particle_count(),
                batch.len(),
                body.position.x,
                body.position.y,
                settings.fps(),
            );
        }
    }

    info!(
        "done: {} particles alive, {} bytes of vertices in the last frame",
        body.emitter().particle_count(),
        batch.as_bytes().len()
    );
}
