use std::cell::Cell;
use std::rc::Rc;

/// Reentrancy guard for programmatic widget updates.
///
/// Pushing state into a widget (syncing the color pickers after a selection
/// change) makes most toolkits re-fire the widget's "changed" signal. While
/// a [`SuspendGuard`] is alive, [`EditorController::dispatch`](crate::EditorController::dispatch)
/// drops all events, so those echoes never write back into the store.
///
/// The suspender is a clonable capability sharing one counter: the
/// controller owns one, and toolkit adapters clone it to consult
/// [`is_suspended`](Self::is_suspended) in signal closures before touching
/// the controller at all.
///
/// Single-threaded by construction (`Rc`): everything runs on the toolkit's
/// event-dispatch thread.
#[derive(Debug, Clone, Default)]
pub struct UpdateSuspender {
    depth: Rc<Cell<u32>>,
}

impl UpdateSuspender {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any [`SuspendGuard`] is alive.
    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.depth.get() > 0
    }

    /// Suspends update handling until the returned guard drops.
    ///
    /// Guards nest; handling resumes when the last one is released. Because
    /// release happens in `Drop`, every exit path of the suspended block
    /// (including early returns and `?`) restores the previous state.
    #[must_use = "updates resume as soon as the guard is dropped"]
    pub fn suspend(&self) -> SuspendGuard {
        self.depth.set(self.depth.get() + 1);
        SuspendGuard { depth: Rc::clone(&self.depth) }
    }
}

/// RAII handle for a suspended-updates block. See [`UpdateSuspender::suspend`].
#[derive(Debug)]
pub struct SuspendGuard {
    depth: Rc<Cell<u32>>,
}

impl Drop for SuspendGuard {
    fn drop(&mut self) {
        let depth = self.depth.get();
        debug_assert!(depth > 0, "suspend guard dropped twice");
        self.depth.set(depth.saturating_sub(1));
    }
}
