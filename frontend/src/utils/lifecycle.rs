use leptos::*;
use std::{cell::Cell, rc::Rc};

/// Tracks whether the owning view is still mounted.
///
/// Created inside a component (or view model constructor); flips to
/// unmounted when that reactive owner is cleaned up. Async completions check
/// it before writing view-local state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        let mounted = Rc::new(Cell::new(true));
        let flag = mounted.clone();
        on_cleanup(move || flag.set(false));
        Self { mounted }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Runs `apply` only while the view is mounted.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_mounted() {
            apply();
            true
        } else {
            false
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
