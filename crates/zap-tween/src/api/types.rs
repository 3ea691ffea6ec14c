use serde::{Deserialize, Serialize};

/// Handle to a tween registered with a `TweenState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// Direction of travel along the tween timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// +1.0 going forward, -1.0 going backward.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Whether the start value is pre-applied and whether the pre-tween value
/// comes back once the tween finishes on its own.
///
/// | mode        | snap `from` at construction | restore `initial` on completion |
/// |-------------|-----------------------------|---------------------------------|
/// | `None`      | no                          | yes                             |
/// | `Forwards`  | yes                         | yes                             |
/// | `Backwards` | no                          | no                              |
/// | `Both`      | yes                         | no                              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    /// `from` is written to the target before the first tick.
    pub fn snaps_to_start(self) -> bool {
        matches!(self, FillMode::Forwards | FillMode::Both)
    }

    /// The captured `initial` value is written back after natural completion.
    pub fn restores_initial(self) -> bool {
        matches!(self, FillMode::None | FillMode::Forwards)
    }
}

/// Number of play-throughs. Absent (`Option::None`) means play once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loops {
    Infinite,
    /// Total play-throughs, counting the current one.
    Count(u32),
}

impl Loops {
    /// Decode the integer form used by `TweenSpec`: `-1` (any negative) is
    /// infinite, `n >= 1` is `n` play-throughs, `0` degrades to play-once.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            r if r < 0 => {
                if r != -1 {
                    log::warn!("loop count {} treated as infinite", r);
                }
                Some(Loops::Infinite)
            }
            0 => {
                log::warn!("loop count 0 treated as a single play-through");
                None
            }
            n => Some(Loops::Count(n as u32)),
        }
    }

    /// Consume the play-through that just ended. Returns the remaining
    /// count if another cycle should follow, `None` if this was the last.
    pub fn next_cycle(self) -> Option<Self> {
        match self {
            Loops::Infinite => Some(Loops::Infinite),
            Loops::Count(n) if n > 1 => Some(Loops::Count(n - 1)),
            Loops::Count(_) => None,
        }
    }
}

/// Lifecycle status reported by `Tween::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenStatus {
    #[default]
    Running,
    /// Finished naturally; `on_end` has fired.
    Completed,
    /// Aborted by `cancel()` or because the target died.
    Cancelled,
}

impl TweenStatus {
    /// Terminal statuses mean the instance is decommissioned.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TweenStatus::Running)
    }
}

/// Removal notices queued by `TweenState` for the game to poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenEvent {
    Completed(TweenId),
    Cancelled(TweenId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_loop_counts() {
        assert_eq!(Loops::from_raw(-1), Some(Loops::Infinite));
        assert_eq!(Loops::from_raw(-7), Some(Loops::Infinite));
        assert_eq!(Loops::from_raw(0), None);
        assert_eq!(Loops::from_raw(3), Some(Loops::Count(3)));
    }

    #[test]
    fn loops_count_down_to_final_cycle() {
        let mut loops = Loops::Count(3);
        let mut cycles = 1;
        while let Some(next) = loops.next_cycle() {
            loops = next;
            cycles += 1;
        }
        assert_eq!(cycles, 3);
        assert_eq!(Loops::Infinite.next_cycle(), Some(Loops::Infinite));
    }

    #[test]
    fn fill_mode_table() {
        assert!(!FillMode::None.snaps_to_start());
        assert!(FillMode::None.restores_initial());
        assert!(FillMode::Forwards.snaps_to_start());
        assert!(FillMode::Forwards.restores_initial());
        assert!(!FillMode::Backwards.snaps_to_start());
        assert!(!FillMode::Backwards.restores_initial());
        assert!(FillMode::Both.snaps_to_start());
        assert!(!FillMode::Both.restores_initial());
    }

    #[test]
    fn fill_mode_deserializes_snake_case() {
        let mode: FillMode = serde_json::from_str("\"backwards\"").unwrap();
        assert_eq!(mode, FillMode::Backwards);
    }

    #[test]
    fn direction_flip() {
        assert_eq!(Direction::Forward.flipped(), Direction::Backward);
        assert_eq!(Direction::Backward.sign(), -1.0);
    }
}
