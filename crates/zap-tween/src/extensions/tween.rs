// extensions/tween.rs
//
// Tween driver: owns live tween instances and ticks each once per frame.
// Knows nothing about value or target types; talks to `dyn Tween` only.
//
// Usage:
//   let mut tweens = TweenState::new();
//   let id = tweens.add(TweenInstance::new(alpha.target(), TweenDef::to(1.0, 0.3))?);
//   tweens.tick(clock.advance(dt));       // Advances all tweens, drops finished ones
//   for event in tweens.drain_events() { ... }

use std::collections::HashMap;

use crate::api::types::{TweenEvent, TweenId, TweenStatus};
use crate::core::instance::Tween;
use crate::core::time::FrameTime;

/// Manages all active tweens.
#[derive(Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, Box<dyn Tween>>,
    next_id: u32,
    /// Removal events to be polled.
    events: Vec<TweenEvent>,
}

impl std::fmt::Debug for TweenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenState")
            .field("tweens", &self.tweens.len())
            .field("next_id", &self.next_id)
            .field("events", &self.events)
            .finish()
    }
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start driving a tween. Returns a handle for later control.
    pub fn add(&mut self, tween: impl Tween + 'static) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, Box::new(tween));
        id
    }

    /// Cancel a tween now: its `on_cancel` runs, it is dropped and a
    /// `Cancelled` event is queued. Returns false for unknown handles.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let Some(mut tween) = self.tweens.remove(&id) else {
            return false;
        };
        tween.cancel();
        self.events.push(TweenEvent::Cancelled(id));
        true
    }

    /// Cancel every tween.
    pub fn cancel_all(&mut self) {
        let mut ids: Vec<TweenId> = self.tweens.keys().copied().collect();
        ids.sort_by_key(|id| id.0);
        for id in ids {
            self.cancel(id);
        }
    }

    /// Drop a tween silently: no callbacks, no event.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Pause a tween.
    pub fn pause(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(&id) {
            tween.pause();
        }
    }

    /// Resume a paused tween.
    pub fn resume(&mut self, id: TweenId) {
        if let Some(tween) = self.tweens.get_mut(&id) {
            tween.resume();
        }
    }

    /// Pause all tweens.
    pub fn pause_all(&mut self) {
        for tween in self.tweens.values_mut() {
            tween.pause();
        }
    }

    /// Resume all tweens.
    pub fn resume_all(&mut self) {
        for tween in self.tweens.values_mut() {
            tween.resume();
        }
    }

    pub fn is_paused(&self, id: TweenId) -> Option<bool> {
        self.tweens.get(&id).map(|t| t.is_paused())
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.contains_key(&id)
    }

    /// Advance every tween once and drop the ones that finished or were
    /// cancelled. Returns the number of tweens removed this tick.
    ///
    /// Iteration order across tweens is unspecified.
    pub fn tick(&mut self, time: FrameTime) -> usize {
        let mut finished = Vec::new();

        for (&id, tween) in self.tweens.iter_mut() {
            match tween.update(time) {
                TweenStatus::Running => {}
                status => finished.push((id, status)),
            }
        }

        let count = finished.len();
        for (id, status) in finished {
            self.tweens.remove(&id);
            let event = match status {
                TweenStatus::Cancelled => TweenEvent::Cancelled(id),
                _ => TweenEvent::Completed(id),
            };
            self.events.push(event);
        }

        if count > 0 {
            log::debug!("{} tween(s) removed, {} active", count, self.tweens.len());
        }
        count
    }

    /// Drain queued removal events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TweenEvent> + '_ {
        self.events.drain(..)
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Drop all tweens and pending events without running callbacks.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.events.clear();
    }
}
