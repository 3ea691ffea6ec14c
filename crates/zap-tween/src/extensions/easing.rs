// extensions/easing.rs
//
// Easing curves and the name -> curve registry tweens pick from.
// Curves are pure functions of a normalized time fraction.
//
// Usage:
//   let registry = EasingRegistry::new();
//   let curve = registry.get("quad_out")?;
//   let eased = curve.apply(0.5);

use std::collections::HashMap;
use std::f32::consts::PI;
use std::str::FromStr;

use crate::error::{Result, TweenError};

/// Signature of a user-supplied easing curve.
pub type EaseFn = fn(f32) -> f32;

/// Built-in easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    /// Pulls back before leaving (undershoots below 0).
    BackIn,
    /// Overshoots past 1 then settles.
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

impl Easing {
    pub const ALL: [Easing; 25] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    /// Canonical snake_case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicInOut => "cubic_in_out",
            Easing::QuartIn => "quart_in",
            Easing::QuartOut => "quart_out",
            Easing::QuartInOut => "quart_in_out",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineInOut => "sine_in_out",
            Easing::ExpoIn => "expo_in",
            Easing::ExpoOut => "expo_out",
            Easing::ExpoInOut => "expo_in_out",
            Easing::BackIn => "back_in",
            Easing::BackOut => "back_out",
            Easing::BackInOut => "back_in_out",
            Easing::BounceIn => "bounce_in",
            Easing::BounceOut => "bounce_out",
            Easing::BounceInOut => "bounce_in_out",
            Easing::ElasticIn => "elastic_in",
            Easing::ElasticOut => "elastic_out",
            Easing::ElasticInOut => "elastic_in_out",
        }
    }

    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Returns the eased value, typically in [0, 1] (Back/Elastic overshoot).
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuartInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }

            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::ExpoIn => {
                if t == 0.0 { 0.0 } else { 2.0_f32.powf(10.0 * t - 10.0) }
            }
            Easing::ExpoOut => {
                if t == 1.0 { 1.0 } else { 1.0 - 2.0_f32.powf(-10.0 * t) }
            }
            Easing::ExpoInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            Easing::BackIn => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Easing::BackOut => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
            Easing::BackInOut => {
                const C2: f32 = BACK_C1 * 1.525;
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }

            Easing::BounceIn => 1.0 - bounce_out(1.0 - t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }

            Easing::ElasticIn => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
                }
            }
            Easing::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
                }
            }
            Easing::ElasticInOut => {
                const C5: f32 = (2.0 * PI) / 4.5;
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0
                } else {
                    2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C5).sin() / 2.0 + 1.0
                }
            }
        }
    }
}

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Lowercase and drop separators so "quad_out", "QuadOut" and "easeOutQuad"
/// can all be compared.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rewrite the "ease<Dir><Family>" naming into "<family><dir>".
fn canonical_key(name: &str) -> String {
    let key = normalize(name);
    let Some(rest) = key.strip_prefix("ease") else {
        return key;
    };
    for dir in ["inout", "in", "out"] {
        if let Some(family) = rest.strip_prefix(dir) {
            if !family.is_empty() {
                return format!("{family}{dir}");
            }
        }
    }
    rest.to_string()
}

impl FromStr for Easing {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self> {
        let key = canonical_key(s);
        Easing::ALL
            .iter()
            .copied()
            .find(|e| normalize(e.name()) == key)
            .ok_or_else(|| TweenError::UnknownEasing { name: s.to_string() })
    }
}

/// A resolved easing curve, either built in or supplied by the game.
#[derive(Debug, Clone, Copy)]
pub enum Curve {
    Builtin(Easing),
    Custom(EaseFn),
}

impl Curve {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Curve::Builtin(easing) => easing.apply(t),
            Curve::Custom(f) => f(t),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Builtin(Easing::Linear)
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Curve::Builtin(easing)
    }
}

/// Name -> curve lookup. Starts with every built-in; games may add or
/// shadow entries with their own functions.
#[derive(Debug, Clone)]
pub struct EasingRegistry {
    custom: HashMap<String, EaseFn>,
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EasingRegistry {
    pub fn new() -> Self {
        Self {
            custom: HashMap::new(),
        }
    }

    /// Register a custom curve. Replaces a built-in of the same name.
    pub fn register(&mut self, name: &str, curve: EaseFn) {
        self.custom.insert(canonical_key(name), curve);
    }

    /// Resolve an identifier. Custom curves win over built-ins.
    pub fn get(&self, name: &str) -> Result<Curve> {
        if let Some(&f) = self.custom.get(&canonical_key(name)) {
            return Ok(Curve::Custom(f));
        }
        name.parse::<Easing>().map(Curve::Builtin)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn every_curve_hits_endpoints() {
        for easing in Easing::ALL {
            let start = easing.apply(0.0);
            let end = easing.apply(1.0);
            assert!(start.abs() < 1e-3, "{} starts at {}", easing.name(), start);
            assert!((end - 1.0).abs() < 1e-3, "{} ends at {}", easing.name(), end);
        }
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn back_overshoots() {
        let peak = (1..20)
            .map(|i| Easing::BackOut.apply(i as f32 / 20.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "BackOut should overshoot, peaked at {}", peak);
    }

    #[test]
    fn parses_name_styles() {
        assert_eq!("quad_out".parse::<Easing>().unwrap(), Easing::QuadOut);
        assert_eq!("QuadOut".parse::<Easing>().unwrap(), Easing::QuadOut);
        assert_eq!("easeOutQuad".parse::<Easing>().unwrap(), Easing::QuadOut);
        assert_eq!("easeInOutSine".parse::<Easing>().unwrap(), Easing::SineInOut);
        assert_eq!("Linear".parse::<Easing>().unwrap(), Easing::Linear);
    }

    #[test]
    fn names_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>().unwrap(), easing);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = EasingRegistry::new().get("wobble").unwrap_err();
        assert!(matches!(err, TweenError::UnknownEasing { ref name } if name == "wobble"));
    }

    #[test]
    fn custom_curve_registration() {
        fn step(t: f32) -> f32 {
            if t < 0.5 { 0.0 } else { 1.0 }
        }

        let mut registry = EasingRegistry::new();
        assert!(!registry.contains("step"));
        registry.register("step", step);

        let curve = registry.get("step").unwrap();
        assert_eq!(curve.apply(0.4), 0.0);
        assert_eq!(curve.apply(0.6), 1.0);
    }

    #[test]
    fn custom_curve_shadows_builtin() {
        fn flat(_: f32) -> f32 {
            0.25
        }

        let mut registry = EasingRegistry::new();
        registry.register("linear", flat);
        assert_eq!(registry.get("linear").unwrap().apply(0.9), 0.25);
    }
}
