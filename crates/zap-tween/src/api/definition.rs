//! Tween definitions: everything a caller decides up front.
//!
//! `TweenDef` carries values and callbacks and is consumed when an instance
//! is built. `TweenSpec` is its data-only half, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::api::types::{FillMode, Loops};
use crate::error::Result;
use crate::extensions::easing::{Curve, Easing};

/// Shortest duration a tween may have, in seconds.
pub const MIN_DURATION: f32 = 0.001;

pub(crate) type Hook = Box<dyn FnOnce()>;
pub(crate) type UpdateHook<V> = Box<dyn FnMut(V)>;

/// Lifecycle callbacks. One-shot hooks are `FnOnce` and consumed on fire.
pub(crate) struct Hooks<V> {
    pub on_start: Option<Hook>,
    pub on_update: Option<UpdateHook<V>>,
    pub on_end: Option<Hook>,
    pub on_cancel: Option<Hook>,
}

impl<V> Default for Hooks<V> {
    fn default() -> Self {
        Self {
            on_start: None,
            on_update: None,
            on_end: None,
            on_cancel: None,
        }
    }
}

/// How the easing curve is chosen.
#[derive(Debug, Clone)]
pub enum EaseRef {
    /// Looked up in an `EasingRegistry` when the instance is built.
    Named(String),
    /// Used as-is, no lookup.
    Curve(Curve),
}

impl Default for EaseRef {
    fn default() -> Self {
        EaseRef::Curve(Curve::Builtin(Easing::Linear))
    }
}

/// Data-only tween configuration, e.g. authored in a JSON asset.
///
/// ```json
/// { "duration": 0.4, "ease": "back_out", "ping_pong": true, "loops": -1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    /// Seconds per leg. Non-positive values are clamped to `MIN_DURATION`.
    pub duration: f32,
    /// Pause before the first tick of playback.
    #[serde(default)]
    pub delay: Option<f32>,
    /// Easing identifier, resolved through the registry.
    #[serde(default = "default_ease")]
    pub ease: String,
    /// Drive with the scaled clock (default) or the raw frame delta.
    #[serde(default = "default_true")]
    pub use_scaled_time: bool,
    #[serde(default)]
    pub ping_pong: bool,
    /// Pause at the far end before heading back.
    #[serde(default)]
    pub ping_pong_interval: Option<f32>,
    /// Pause between cycles.
    #[serde(default)]
    pub repeat_interval: Option<f32>,
    /// Absent = once, `-1` = forever, `n` = total play-throughs.
    #[serde(default)]
    pub loops: Option<i32>,
    #[serde(default)]
    pub fill_mode: FillMode,
}

fn default_ease() -> String {
    Easing::Linear.name().to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration: 1.0,
            delay: None,
            ease: default_ease(),
            use_scaled_time: true,
            ping_pong: false,
            ping_pong_interval: None,
            repeat_interval: None,
            loops: None,
            fill_mode: FillMode::None,
        }
    }
}

impl TweenSpec {
    /// Parse a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Full tween definition for values of type `V`.
///
/// Built once by the caller and handed to `TweenInstance::new`, which
/// takes ownership of the callbacks.
pub struct TweenDef<V> {
    pub(crate) duration: f32,
    pub(crate) from: Option<V>,
    pub(crate) to: Option<V>,
    pub(crate) delay: Option<f32>,
    pub(crate) ease: EaseRef,
    pub(crate) use_scaled_time: bool,
    pub(crate) ping_pong: bool,
    pub(crate) ping_pong_interval: Option<f32>,
    pub(crate) repeat_interval: Option<f32>,
    pub(crate) loops: Option<Loops>,
    pub(crate) fill_mode: FillMode,
    pub(crate) hooks: Hooks<V>,
}

impl<V> TweenDef<V> {
    /// Tween from the target's current value to whatever `with_to` sets.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            from: None,
            to: None,
            delay: None,
            ease: EaseRef::default(),
            use_scaled_time: true,
            ping_pong: false,
            ping_pong_interval: None,
            repeat_interval: None,
            loops: None,
            fill_mode: FillMode::None,
            hooks: Hooks::default(),
        }
    }

    /// Tween from the target's current value to `to`.
    pub fn to(to: V, duration: f32) -> Self {
        Self::new(duration).with_to(to)
    }

    /// Tween between explicit bounds.
    pub fn between(from: V, to: V, duration: f32) -> Self {
        Self::new(duration).with_from(from).with_to(to)
    }

    /// Start from a data spec; values and callbacks are added with builders.
    pub fn from_spec(spec: &TweenSpec) -> Self {
        let mut def = Self::new(spec.duration)
            .with_ease(&spec.ease)
            .with_scaled_time(spec.use_scaled_time)
            .with_fill(spec.fill_mode);
        def.delay = spec.delay;
        def.ping_pong = spec.ping_pong;
        def.ping_pong_interval = spec.ping_pong_interval;
        def.repeat_interval = spec.repeat_interval;
        def.loops = spec.loops.and_then(Loops::from_raw);
        def
    }

    // -- Builder methods --

    pub fn with_from(mut self, from: V) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: V) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_delay(mut self, seconds: f32) -> Self {
        self.delay = Some(seconds);
        self
    }

    /// Pick the curve by identifier (checked when the instance is built).
    pub fn with_ease(mut self, name: &str) -> Self {
        self.ease = EaseRef::Named(name.to_string());
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.ease = EaseRef::Curve(Curve::Builtin(easing));
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.ease = EaseRef::Curve(curve);
        self
    }

    pub fn with_scaled_time(mut self, scaled: bool) -> Self {
        self.use_scaled_time = scaled;
        self
    }

    /// Ignore the clock's time scale.
    pub fn unscaled(self) -> Self {
        self.with_scaled_time(false)
    }

    /// Play forward then backward within each cycle.
    pub fn ping_pong(mut self) -> Self {
        self.ping_pong = true;
        self
    }

    /// Ping-pong, resting `seconds` at the far end before turning back.
    pub fn with_ping_pong_interval(mut self, seconds: f32) -> Self {
        self.ping_pong = true;
        self.ping_pong_interval = Some(seconds);
        self
    }

    pub fn with_repeat_interval(mut self, seconds: f32) -> Self {
        self.repeat_interval = Some(seconds);
        self
    }

    pub fn with_loops(mut self, loops: Loops) -> Self {
        self.loops = Some(loops);
        self
    }

    /// Loop forever.
    pub fn looping(self) -> Self {
        self.with_loops(Loops::Infinite)
    }

    pub fn with_fill(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    // -- Callbacks --

    /// Fires once, on the first tick of playback after any initial delay.
    pub fn on_start(mut self, f: impl FnOnce() + 'static) -> Self {
        self.hooks.on_start = Some(Box::new(f));
        self
    }

    /// Fires on every playback tick with the value just applied.
    pub fn on_update(mut self, f: impl FnMut(V) + 'static) -> Self {
        self.hooks.on_update = Some(Box::new(f));
        self
    }

    /// Fires once on natural completion, never on cancellation.
    pub fn on_end(mut self, f: impl FnOnce() + 'static) -> Self {
        self.hooks.on_end = Some(Box::new(f));
        self
    }

    /// Fires once when the tween is cancelled or its target dies.
    pub fn on_cancel(mut self, f: impl FnOnce() + 'static) -> Self {
        self.hooks.on_cancel = Some(Box::new(f));
        self
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn loops(&self) -> Option<Loops> {
        self.loops
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for TweenDef<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenDef")
            .field("duration", &self.duration)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("delay", &self.delay)
            .field("ease", &self.ease)
            .field("ping_pong", &self.ping_pong)
            .field("loops", &self.loops)
            .field("fill_mode", &self.fill_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_spec() {
        let spec = TweenSpec::from_json(r#"{ "duration": 0.5 }"#).unwrap();
        assert_eq!(spec.duration, 0.5);
        assert_eq!(spec.ease, "linear");
        assert!(spec.use_scaled_time);
        assert_eq!(spec.loops, None);
        assert_eq!(spec.fill_mode, FillMode::None);
    }

    #[test]
    fn parse_full_spec() {
        let json = r#"{
            "duration": 2.0,
            "delay": 0.25,
            "ease": "back_out",
            "use_scaled_time": false,
            "ping_pong": true,
            "ping_pong_interval": 0.1,
            "repeat_interval": 0.5,
            "loops": -1,
            "fill_mode": "both"
        }"#;
        let spec = TweenSpec::from_json(json).unwrap();
        let def: TweenDef<f32> = TweenDef::from_spec(&spec);

        assert_eq!(def.duration(), 2.0);
        assert_eq!(def.delay, Some(0.25));
        assert!(matches!(def.ease, EaseRef::Named(ref n) if n == "back_out"));
        assert!(!def.use_scaled_time);
        assert!(def.ping_pong);
        assert_eq!(def.ping_pong_interval, Some(0.1));
        assert_eq!(def.repeat_interval, Some(0.5));
        assert_eq!(def.loops(), Some(Loops::Infinite));
        assert_eq!(def.fill_mode(), FillMode::Both);
    }

    #[test]
    fn malformed_spec_is_an_error() {
        assert!(TweenSpec::from_json(r#"{ "ease": "linear" }"#).is_err());
        assert!(TweenSpec::from_json(r#"{ "duration": 1, "fill_mode": "sideways" }"#).is_err());
    }

    #[test]
    fn builders_set_bounds() {
        let def = TweenDef::between(1.0_f32, 5.0, 0.3).with_delay(0.1);
        assert_eq!(def.from, Some(1.0));
        assert_eq!(def.to, Some(5.0));
        assert_eq!(def.delay, Some(0.1));

        let def = TweenDef::to(9.0_f32, 1.0);
        assert_eq!(def.from, None);
        assert_eq!(def.to, Some(9.0));
    }

    #[test]
    fn ping_pong_interval_enables_ping_pong() {
        let def: TweenDef<f32> = TweenDef::new(1.0).with_ping_pong_interval(0.2);
        assert!(def.ping_pong);
        assert_eq!(def.ping_pong_interval, Some(0.2));
    }
}
