//! Target bindings: how a tween reads and writes the value it animates.
//!
//! The state machine only needs three things from whatever owns the value:
//! read it, write it, and tell whether it still exists. Games usually
//! implement `TweenTarget` on a small handle type; `SharedValue` and
//! `FnTarget` cover the common cases.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Read/write access to one animated value plus a liveness check.
pub trait TweenTarget<V> {
    /// Current value held by the target.
    fn read(&self) -> V;

    /// Write a new value into the target.
    fn apply(&mut self, value: V);

    /// `false` once the underlying object has been destroyed. Checked at the
    /// start of every tick; a dead target cancels the tween.
    fn is_alive(&self) -> bool {
        true
    }
}

/// A value cell shared between game code and any number of tweens.
///
/// Tweens hold only a weak reference (`SharedTarget`), so dropping the last
/// `SharedValue` handle kills every tween bound to it.
#[derive(Debug, Default)]
pub struct SharedValue<V> {
    cell: Rc<RefCell<V>>,
}

impl<V> Clone for SharedValue<V> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<V: Copy> SharedValue<V> {
    pub fn new(value: V) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
        }
    }

    pub fn get(&self) -> V {
        *self.cell.borrow()
    }

    pub fn set(&self, value: V) {
        *self.cell.borrow_mut() = value;
    }

    /// A weak binding suitable for `TweenInstance::new`.
    pub fn target(&self) -> SharedTarget<V> {
        SharedTarget {
            cell: Rc::downgrade(&self.cell),
            last: self.get(),
        }
    }
}

/// Weak binding produced by `SharedValue::target`.
#[derive(Debug, Clone)]
pub struct SharedTarget<V> {
    cell: Weak<RefCell<V>>,
    /// Last value seen, returned by `read` once the cell is gone.
    last: V,
}

impl<V: Copy> TweenTarget<V> for SharedTarget<V> {
    fn read(&self) -> V {
        self.cell
            .upgrade()
            .map(|cell| *cell.borrow())
            .unwrap_or(self.last)
    }

    fn apply(&mut self, value: V) {
        self.last = value;
        if let Some(cell) = self.cell.upgrade() {
            *cell.borrow_mut() = value;
        }
    }

    fn is_alive(&self) -> bool {
        self.cell.strong_count() > 0
    }
}

/// Target assembled from closures, for values living somewhere the game
/// cannot hand out as a cell (a scene entity, an audio bus, a uniform).
pub struct FnTarget<R, A, L> {
    read: R,
    apply: A,
    alive: L,
}

impl<R, A> FnTarget<R, A, fn() -> bool> {
    /// A target that never dies.
    pub fn new(read: R, apply: A) -> Self {
        fn always() -> bool {
            true
        }
        Self {
            read,
            apply,
            alive: always,
        }
    }
}

impl<R, A, L> FnTarget<R, A, L> {
    /// Replace the liveness check.
    pub fn with_liveness<L2>(self, alive: L2) -> FnTarget<R, A, L2> {
        FnTarget {
            read: self.read,
            apply: self.apply,
            alive,
        }
    }
}

impl<V, R, A, L> TweenTarget<V> for FnTarget<R, A, L>
where
    R: Fn() -> V,
    A: FnMut(V),
    L: Fn() -> bool,
{
    fn read(&self) -> V {
        (self.read)()
    }

    fn apply(&mut self, value: V) {
        (self.apply)(value)
    }

    fn is_alive(&self) -> bool {
        (self.alive)()
    }
}

impl<R, A, L> std::fmt::Debug for FnTarget<R, A, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTarget").finish_non_exhaustive()
    }
}
