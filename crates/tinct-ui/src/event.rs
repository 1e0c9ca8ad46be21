use tinct_engine::paint::{Color, GradientKind};

/// User actions routed from the toolkit into the editor.
///
/// One enum instead of per-widget signal callbacks: adapters translate each
/// toolkit signal into a variant and hand it to
/// [`EditorController::dispatch`](crate::EditorController::dispatch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// Add button: append a new gradient of `kind` and select it.
    CreateRequested { kind: GradientKind },
    /// Duplicate button. Appends a fresh vertical gradient (it does not
    /// clone the selection — see `GradientStore::duplicate`).
    DuplicateRequested,
    /// Remove button: delete the selected gradient, keeping at least one.
    DeleteRequested,
    /// Type selector changed.
    KindChanged(GradientKind),
    /// Start color picker committed a color.
    StartColorChanged(Color),
    /// End color picker committed a color.
    EndColorChanged(Color),
    /// Selector row changed. `None` is the toolkit's transient "no
    /// selection" state and is dropped silently.
    SelectionChanged(Option<usize>),
}

/// Result returned by [`EditorController::dispatch`](crate::EditorController::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was applied to the store and pushed back to the shell.
    Consumed,
    /// Event was dropped: updates suspended, no selection, or a no-op
    /// (e.g. delete at the single-entry floor).
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
