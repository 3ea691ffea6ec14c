pub mod api;
pub mod core;
pub mod error;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::definition::{EaseRef, TweenDef, TweenSpec, MIN_DURATION};
pub use api::types::{Direction, FillMode, Loops, TweenEvent, TweenId, TweenStatus};
pub use crate::core::instance::{Tween, TweenInstance};
pub use crate::core::target::{FnTarget, SharedTarget, SharedValue, TweenTarget};
pub use crate::core::time::{Clock, FrameTime};
pub use error::{Result, TweenError};

pub use extensions::{lerp, Color, Curve, EaseFn, Easing, EasingRegistry, Lerp, TweenState};
