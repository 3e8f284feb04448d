use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate of the animation loop and tracks the achieved one.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    pub fn new(max_fps: f64) -> Self {
        let mut result = Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        };
        result.set_max_fps(max_fps);
        result
    }

    /// Zero until the first frame has been measured.
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    /// Non-positive values disable the cap.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    /// Sleeps for whatever is left of the current frame.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        if self.frametime_smoothed == 0. {
            self.frametime_smoothed = frametime;
        } else {
            self.frametime_smoothed += (frametime - self.frametime_smoothed) * Self::SMOOTHING;
        }

        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_capped() {
        let mut limiter = FpsLimiter::new(200.);
        assert_eq!(limiter.fps(), 0.);
        for _ in 0..3 {
            limiter.delay();
        }
        // sleeping can only overshoot the target frametime
        assert!(limiter.fps() > 0. && limiter.fps() <= 200.5, "fps={}", limiter.fps());
    }
}
