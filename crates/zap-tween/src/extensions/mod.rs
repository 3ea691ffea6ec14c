// extensions/mod.rs
//
// Pluggable strategies around the core state machine: easing curves,
// value interpolation, and the driver that ticks live tweens.
// Games can swap any of them; core only depends on their traits.

pub mod easing;
pub mod interpolate;
pub mod tween;

pub use easing::{Curve, EaseFn, Easing, EasingRegistry};
pub use interpolate::{lerp, Color, Lerp};
pub use tween::TweenState;
