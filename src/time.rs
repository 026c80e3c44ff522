//! Frame clock for driving the simulation.
//!
//! [`Time`] turns wall-clock frames into the `dt` handed to
//! [`Body::update`](crate::body::Body::update), with pause, a fixed step for
//! deterministic runs, and a time scale. [`FpsCounter`] produces the
//! frames-per-second figure shown in the settings panel, refreshed every
//! 500 ms.
//!
//! ```ignore
//! let mut time = Time::new();
//! loop {
//!     let dt = time.tick();
//!     body.update(dt);
//!     settings.sync_status(time.fps(), body.emitter().particle_count());
//! }
//! ```

use std::time::{Duration, Instant};

/// Frames-per-second over a sliding refresh window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    window: Duration,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window: Duration::ZERO,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Record one frame that took `frame_time`. Returns `true` when the
    /// reported value was refreshed.
    pub fn record(&mut self, frame_time: Duration) -> bool {
        self.frames += 1;
        self.window += frame_time;
        if self.window < self.interval {
            return false;
        }
        self.fps = self.frames as f32 / self.window.as_secs_f32();
        self.frames = 0;
        self.window = Duration::ZERO;
        true
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[derive(Debug)]
pub struct Time {
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: FpsCounter,
    paused: bool,
    fixed_delta: Option<f32>,
    time_scale: f32,
}

impl Time {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: FpsCounter::default(),
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Use a constant step instead of measured frame time.
    pub fn with_fixed_delta(mut self, delta: f32) -> Self {
        self.set_fixed_delta(Some(delta));
        self
    }

    /// Start a new frame and return its simulation step in seconds.
    ///
    /// FPS always tracks wall-clock time, even with a fixed step or while
    /// paused.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        if self.fps.record(frame_time) {
            log::trace!("fps refreshed: {:.1}", self.fps.fps());
        }

        self.delta_secs = if self.paused {
            0.0
        } else {
            self.fixed_delta.unwrap_or(frame_time.as_secs_f32()) * self.time_scale
        };
        self.elapsed_secs += self.delta_secs;
        self.delta_secs
    }

    /// Simulated seconds since start. Stops while paused and follows the
    /// time scale.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Step returned by the last [`Time::tick`].
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// While paused, [`Time::tick`] returns 0.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Pass `None` to go back to measured frame time. Non-finite or
    /// negative steps are treated as 0.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta.map(|d| if d.is_finite() { d.max(0.0) } else { 0.0 });
    }

    /// `1.0` is real time, `0.5` half speed. Negative scales clamp to 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert!(!time.is_paused());
        assert_eq!(time.time_scale(), 1.0);
    }

    #[test]
    fn test_tick_measures_frames() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let dt = time.tick();

        assert!(dt > 0.0);
        assert_eq!(time.elapsed(), dt);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_fixed_delta() {
        let mut time = Time::new().with_fixed_delta(0.25);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(time.tick(), 0.25);
        assert_eq!(time.tick(), 0.25);
        assert_eq!(time.elapsed(), 0.5);
    }

    #[test]
    fn test_pause() {
        let mut time = Time::new().with_fixed_delta(0.25);
        time.tick();

        time.pause();
        assert_eq!(time.tick(), 0.0);
        assert_eq!(time.elapsed(), 0.25);
        assert_eq!(time.frame(), 2);

        time.toggle_pause();
        assert_eq!(time.tick(), 0.25);
    }

    #[test]
    fn test_time_scale() {
        let mut time = Time::new().with_fixed_delta(0.5);
        time.set_time_scale(0.5);
        assert_eq!(time.tick(), 0.25);

        // Negative scale should clamp to 0
        time.set_time_scale(-1.0);
        assert_eq!(time.time_scale(), 0.0);
        assert_eq!(time.tick(), 0.0);
    }

    #[test]
    fn test_bad_fixed_delta() {
        let mut time = Time::new();
        time.set_fixed_delta(Some(f32::NAN));
        assert_eq!(time.tick(), 0.0);
        time.set_fixed_delta(Some(-1.0));
        assert_eq!(time.tick(), 0.0);
    }

    #[test]
    fn test_fps_refresh_window() {
        let mut fps = FpsCounter::default();
        for _ in 0..29 {
            assert!(!fps.record(Duration::from_millis(10)));
        }
        assert_eq!(fps.fps(), 0.0);

        // 50 frames over 500 ms
        for _ in 0..20 {
            fps.record(Duration::from_millis(10));
        }
        assert!(fps.record(Duration::from_millis(10)));
        assert!((fps.fps() - 100.0).abs() < 0.01);
    }
}
