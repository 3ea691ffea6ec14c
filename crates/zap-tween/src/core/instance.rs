//! Tween instance: the per-target playback state machine.
//!
//! States: delaying -> playing (forward / backward) -> looping back to
//! playing, ending in either completed or cancelled. Both terminal states
//! decommission the instance: later `update`/`cancel` calls do nothing.
//!
//! One `update` call per logical tick, in this order:
//!
//! 1. dead target -> cancel
//! 2. paused -> nothing
//! 3. pending delay -> count it down, nothing else this tick
//! 4. `on_start` (once)
//! 5. advance the elapsed fraction by `dt / duration` in the current direction
//! 6. clamp at 1 (or at 0 on a ping-pong return) and handle the boundary
//! 7. ease, interpolate, apply, `on_update`
//! 8. at the end of a cycle, either loop or finish (fill restore, `on_end`)
//!
//! Callbacks run inline; a panicking callback propagates to whoever drives
//! the tick.

use crate::api::definition::{EaseRef, Hooks, TweenDef, MIN_DURATION};
use crate::api::types::{Direction, FillMode, Loops, TweenStatus};
use crate::core::target::TweenTarget;
use crate::core::time::FrameTime;
use crate::error::Result;
use crate::extensions::easing::{Curve, EasingRegistry};
use crate::extensions::interpolate::Lerp;

/// What a driver needs from a tween, independent of value and target types.
pub trait Tween {
    /// Advance one tick. Returns the status after the tick; a terminal
    /// status is the signal to drop the tween.
    fn update(&mut self, time: FrameTime) -> TweenStatus;

    /// Abort playback. Idempotent.
    fn cancel(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    fn is_paused(&self) -> bool;

    fn status(&self) -> TweenStatus;

    fn is_decommissioned(&self) -> bool {
        self.status().is_terminal()
    }
}

/// A running tween of one `V` value on one target `T`.
pub struct TweenInstance<V, T> {
    target: T,
    /// Target value captured at construction, used for fill restoration.
    initial: V,
    from: V,
    to: V,
    duration: f32,
    curve: Curve,
    use_scaled_time: bool,
    ping_pong: bool,
    ping_pong_interval: Option<f32>,
    repeat_interval: Option<f32>,
    fill_mode: FillMode,

    /// Elapsed fraction, always within [0, 1]. Accumulated in f64 so that
    /// `d / dt` ticks land on the boundary.
    time: f64,
    direction: Direction,
    pending_delay: Option<f32>,
    remaining_loops: Option<Loops>,
    paused: bool,
    status: TweenStatus,
    hooks: Hooks<V>,
}

/// A leg ends once the elapsed fraction is this close to its boundary.
const BOUNDARY_EPSILON: f64 = 1e-6;

/// Delays of zero or less are not armed.
fn positive(seconds: Option<f32>) -> Option<f32> {
    seconds.filter(|s| *s > 0.0)
}

impl<V: Lerp, T: TweenTarget<V>> TweenInstance<V, T> {
    /// Build an instance, resolving the easing name against the built-in curves.
    pub fn new(target: T, def: TweenDef<V>) -> Result<Self> {
        Self::with_registry(target, def, &EasingRegistry::new())
    }

    /// Build an instance, resolving the easing name against `registry`.
    ///
    /// Missing `from`/`to` bounds are read from the target now. With a
    /// `Forwards` or `Both` fill mode, `from` is applied immediately, before
    /// any delay.
    pub fn with_registry(mut target: T, def: TweenDef<V>, registry: &EasingRegistry) -> Result<Self> {
        let curve = match &def.ease {
            EaseRef::Named(name) => registry.get(name)?,
            EaseRef::Curve(curve) => *curve,
        };

        let initial = target.read();
        let from = def.from.unwrap_or(initial);
        let to = def.to.unwrap_or(initial);
        let duration = if def.duration > 0.0 {
            def.duration
        } else {
            MIN_DURATION
        };

        if def.fill_mode.snaps_to_start() {
            target.apply(from);
        }

        log::debug!(
            "tween created: duration={}s delay={:?} ping_pong={} loops={:?} fill={:?}",
            duration,
            def.delay,
            def.ping_pong,
            def.loops,
            def.fill_mode
        );

        Ok(Self {
            target,
            initial,
            from,
            to,
            duration,
            curve,
            use_scaled_time: def.use_scaled_time,
            ping_pong: def.ping_pong,
            ping_pong_interval: def.ping_pong_interval,
            repeat_interval: def.repeat_interval,
            fill_mode: def.fill_mode,
            time: 0.0,
            direction: Direction::Forward,
            pending_delay: positive(def.delay),
            remaining_loops: def.loops,
            paused: false,
            status: TweenStatus::Running,
            hooks: def.hooks,
        })
    }

    /// Advance the tween by one tick.
    pub fn update(&mut self, time: FrameTime) -> TweenStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        // Liveness first: a dead target cancels even a paused tween
        if !self.target.is_alive() {
            log::debug!("tween target no longer alive, cancelling");
            self.abort();
            return self.status;
        }

        if self.paused {
            return self.status;
        }

        let dt = time.select(self.use_scaled_time).max(0.0);

        if let Some(remaining) = self.pending_delay {
            let remaining = remaining - dt;
            self.pending_delay = (remaining > 0.0).then_some(remaining);
            return self.status;
        }

        if let Some(on_start) = self.hooks.on_start.take() {
            on_start();
        }

        self.time += f64::from(self.direction.sign()) * f64::from(dt) / f64::from(self.duration);

        let mut cycle_ended = false;
        match self.direction {
            Direction::Forward if self.time >= 1.0 - BOUNDARY_EPSILON => {
                self.time = 1.0;
                if self.ping_pong {
                    self.direction = Direction::Backward;
                    self.pending_delay = positive(self.ping_pong_interval);
                } else {
                    cycle_ended = true;
                    self.pending_delay = positive(self.repeat_interval);
                }
            }
            // Inclusive at 0, mirroring the forward check: landing on 0 ends the cycle
            Direction::Backward if self.time <= BOUNDARY_EPSILON => {
                self.time = 0.0;
                self.direction = Direction::Forward;
                cycle_ended = true;
                self.pending_delay = positive(self.repeat_interval);
            }
            _ => {}
        }

        let value = V::lerp(self.from, self.to, self.curve.apply(self.time as f32));
        self.target.apply(value);
        if let Some(on_update) = self.hooks.on_update.as_mut() {
            on_update(value);
        }

        if cycle_ended {
            // The value reported above belongs to the finished cycle; the
            // reset is only seen on the next tick.
            match self.remaining_loops.and_then(Loops::next_cycle) {
                Some(next) => {
                    log::trace!("tween cycle finished, remaining loops {:?}", next);
                    self.remaining_loops = Some(next);
                    self.time = 0.0;
                }
                None => self.complete(),
            }
        }

        self.status
    }

    /// Abort playback: fires `on_cancel`, skips `on_end` and fill restoration.
    /// Calling it on a finished or cancelled tween does nothing.
    pub fn cancel(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        log::debug!("tween cancelled");
        self.abort();
    }

    pub fn pause(&mut self) {
        if !self.status.is_terminal() {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    fn abort(&mut self) {
        self.status = TweenStatus::Cancelled;
        self.pending_delay = None;
        if let Some(on_cancel) = self.hooks.on_cancel.take() {
            on_cancel();
        }
        self.hooks = Hooks::default();
    }

    fn complete(&mut self) {
        if self.fill_mode.restores_initial() {
            self.target.apply(self.initial);
        }
        self.status = TweenStatus::Completed;
        self.pending_delay = None;
        log::debug!("tween completed");
        if let Some(on_end) = self.hooks.on_end.take() {
            on_end();
        }
        self.hooks = Hooks::default();
    }

    // -- Accessors --

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn initial(&self) -> V {
        self.initial
    }

    pub fn from(&self) -> V {
        self.from
    }

    pub fn to(&self) -> V {
        self.to
    }

    /// Elapsed fraction of the current leg, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.time as f32
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Effective duration after clamping.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn pending_delay(&self) -> Option<f32> {
        self.pending_delay
    }

    pub fn remaining_loops(&self) -> Option<Loops> {
        self.remaining_loops
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn status(&self) -> TweenStatus {
        self.status
    }

    pub fn is_decommissioned(&self) -> bool {
        self.status.is_terminal()
    }
}

impl<V: Lerp, T: TweenTarget<V>> Tween for TweenInstance<V, T> {
    fn update(&mut self, time: FrameTime) -> TweenStatus {
        TweenInstance::update(self, time)
    }

    fn cancel(&mut self) {
        TweenInstance::cancel(self)
    }

    fn pause(&mut self) {
        TweenInstance::pause(self)
    }

    fn resume(&mut self) {
        TweenInstance::resume(self)
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn status(&self) -> TweenStatus {
        self.status
    }
}

impl<V: std::fmt::Debug, T> std::fmt::Debug for TweenInstance<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenInstance")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("time", &self.time)
            .field("direction", &self.direction)
            .field("pending_delay", &self.pending_delay)
            .field("remaining_loops", &self.remaining_loops)
            .field("paused", &self.paused)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
