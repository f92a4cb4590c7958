use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Default step rate for hosts driving the kernel on a timer.
pub const DEFAULT_FPS: f64 = 30.;

/// Sleeps between frames so calls do not exceed a target rate.
pub struct FrameLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::with_max_fps(DEFAULT_FPS)
    }
}

impl FrameLimiter {
    /// A limiter capped at `max_fps`. Non-positive or non-finite rates
    /// disable the cap.
    pub fn with_max_fps(max_fps: f64) -> Self {
        let mut limiter = Self::unlimited();
        limiter.set_max_fps(max_fps);
        limiter
    }

    pub fn unlimited() -> Self {
        Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    /// Smoothed measured rate, `0` before the first frame.
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps.is_finite() && max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    /// Wait out the rest of the current frame and start the next one.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
