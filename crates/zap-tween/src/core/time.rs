/// The two time sources for one logical tick.
/// Each tween picks `delta` or `unscaled_delta` per its `use_scaled_time`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Frame delta after the clock's time scale was applied.
    pub delta: f32,
    /// Raw frame delta, unaffected by slow-motion or pause-by-scale.
    pub unscaled_delta: f32,
}

impl FrameTime {
    pub fn new(delta: f32, unscaled_delta: f32) -> Self {
        Self {
            delta,
            unscaled_delta,
        }
    }

    /// Both sources advance by the same amount (time scale 1).
    pub fn uniform(dt: f32) -> Self {
        Self::new(dt, dt)
    }

    /// Delta for the requested time source.
    pub fn select(&self, use_scaled_time: bool) -> f32 {
        if use_scaled_time {
            self.delta
        } else {
            self.unscaled_delta
        }
    }
}

/// Turns variable frame deltas into `FrameTime` samples for the tween driver.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Multiplier applied to the scaled source (0 freezes scaled tweens).
    time_scale: f32,
    /// Largest delta accepted from one frame; longer hitches are capped.
    max_delta: f32,
    /// Total scaled time since creation.
    elapsed: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            max_delta: Self::DEFAULT_MAX_DELTA,
            elapsed: 0.0,
        }
    }

    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.set_time_scale(scale);
        self
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Feed one raw frame delta. Negative deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> FrameTime {
        // Cap to avoid a single huge step after a stall (tab switch, debugger)
        let raw = frame_dt.clamp(0.0, self.max_delta);
        let scaled = raw * self.time_scale;
        self.elapsed += scaled;
        FrameTime::new(scaled, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_picks_source() {
        let t = FrameTime::new(0.5, 1.0);
        assert_eq!(t.select(true), 0.5);
        assert_eq!(t.select(false), 1.0);
    }

    #[test]
    fn time_scale_only_affects_scaled_delta() {
        let mut clock = Clock::new().with_time_scale(0.5);
        let t = clock.advance(0.1);
        assert!((t.delta - 0.05).abs() < 1e-6);
        assert!((t.unscaled_delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn caps_long_frames() {
        let mut clock = Clock::new();
        let t = clock.advance(5.0);
        assert_eq!(t.unscaled_delta, Clock::DEFAULT_MAX_DELTA);
    }

    #[test]
    fn negative_scale_clamps_to_zero() {
        let mut clock = Clock::new().with_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 0.0);
        let t = clock.advance(0.1);
        assert_eq!(t.delta, 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
