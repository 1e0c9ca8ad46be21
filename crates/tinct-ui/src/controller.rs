use image::RgbaImage;
use tinct_engine::paint::{Gradient, GradientKind};
use tinct_engine::raster::render_thumbnail;

use crate::event::{EditorEvent, EventResult};
use crate::guard::UpdateSuspender;
use crate::shell::EditorShell;
use crate::store::GradientStore;

/// The gradient editor: owns the registry, the current selection, and the
/// reentrancy guard, and applies [`EditorEvent`]s to them.
///
/// Each consumed event follows the same shape: mutate the store, regenerate
/// the affected thumbnail, push row + widget state out through the
/// [`EditorShell`]. Programmatic widget writes happen under the
/// [`UpdateSuspender`], so signal echoes from the toolkit never write back
/// into the store.
///
/// The selection is an index into the store and is reacquired after every
/// structural change; it is always valid because the store never drops
/// below one entry.
pub struct EditorController {
    store: GradientStore,
    selection: usize,
    suspender: UpdateSuspender,
}

impl EditorController {
    /// Controller over a store seeded with one default vertical gradient.
    pub fn new() -> Self {
        Self::with_store(GradientStore::new())
    }

    /// Controller over a populated store (e.g. loaded from a theme).
    ///
    /// An empty store is seeded with the default gradient so the editor
    /// never faces a zero-gradient state. Selection starts at 0.
    pub fn with_store(store: GradientStore) -> Self {
        let store = if store.is_empty() { GradientStore::new() } else { store };
        Self {
            store,
            selection: 0,
            suspender: UpdateSuspender::new(),
        }
    }

    #[inline]
    pub fn store(&self) -> &GradientStore {
        &self.store
    }

    #[inline]
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The guard capability. Toolkit adapters clone this and check
    /// [`UpdateSuspender::is_suspended`] in their signal closures before
    /// forwarding events.
    #[inline]
    pub fn suspender(&self) -> UpdateSuspender {
        self.suspender.clone()
    }

    /// Populates an empty selector list model from the store, one row per
    /// entry, then activates and applies the current selection.
    ///
    /// Call once after construction, before the first event.
    pub fn sync_rows<S: EditorShell>(&mut self, shell: &mut S) {
        for index in 0..self.store.len() {
            if let Ok(entry) = self.store.get(index) {
                shell.append_row(thumbnail(entry), entry.kind.label());
            }
        }
        {
            let _guard = self.suspender.suspend();
            shell.set_active_row(self.selection);
        }
        self.apply_selection(shell);
    }

    /// Applies one editor event. Returns [`EventResult::Ignored`] while
    /// updates are suspended, on the transient no-selection state, and on
    /// silent no-ops (delete at the single-entry floor).
    pub fn dispatch<S: EditorShell>(&mut self, shell: &mut S, event: EditorEvent) -> EventResult {
        if self.suspender.is_suspended() {
            log::trace!("dispatch: updates suspended, dropping {event:?}");
            return EventResult::Ignored;
        }
        log::debug!("dispatch: {event:?} (selection {})", self.selection);

        match event {
            EditorEvent::CreateRequested { kind } => self.create(shell, kind),
            EditorEvent::DuplicateRequested => self.create(shell, GradientKind::Vertical),
            EditorEvent::DeleteRequested => self.delete(shell),
            EditorEvent::KindChanged(kind) => self.edit(shell, |g| g.kind = kind),
            EditorEvent::StartColorChanged(color) => self.edit(shell, |g| g.start = color),
            EditorEvent::EndColorChanged(color) => self.edit(shell, |g| g.end = color),
            EditorEvent::SelectionChanged(index) => self.select(shell, index),
        }
    }

    /// Re-applies the selected entry: widget state and thumbnail both
    /// regenerate, without touching the store.
    pub fn refresh<S: EditorShell>(&mut self, shell: &mut S) -> EventResult {
        self.apply_selection(shell)
    }

    fn create<S: EditorShell>(&mut self, shell: &mut S, kind: GradientKind) -> EventResult {
        let index = self.store.create(kind);
        let Ok(entry) = self.store.get(index) else {
            return EventResult::Ignored;
        };
        shell.append_row(thumbnail(entry), entry.kind.label());

        self.selection = index;
        {
            let _guard = self.suspender.suspend();
            shell.set_active_row(index);
        }
        self.apply_selection(shell)
    }

    fn delete<S: EditorShell>(&mut self, shell: &mut S) -> EventResult {
        let index = self.selection;
        if !self.store.remove(index) {
            return EventResult::Ignored;
        }
        shell.remove_row(index);

        // Deleting the last row moves the selection up; otherwise it stays
        // put and now refers to the former successor.
        if index == self.store.len() {
            self.selection = index - 1;
        }
        {
            let _guard = self.suspender.suspend();
            shell.set_active_row(self.selection);
        }
        self.apply_selection(shell)
    }

    fn edit<S: EditorShell>(
        &mut self,
        shell: &mut S,
        mutate: impl FnOnce(&mut Gradient),
    ) -> EventResult {
        let index = self.selection;
        if self.store.update(index, mutate).is_err() {
            return EventResult::Ignored;
        }
        let Ok(entry) = self.store.get(index) else {
            return EventResult::Ignored;
        };
        shell.set_row(index, thumbnail(entry), entry.kind.label());
        EventResult::Consumed
    }

    fn select<S: EditorShell>(&mut self, shell: &mut S, index: Option<usize>) -> EventResult {
        // `None` is the toolkit's transient no-selection state, not an error.
        let Some(index) = index else {
            return EventResult::Ignored;
        };
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        self.selection = self.store.index_safe(index);
        self.apply_selection(shell)
    }

    /// Pushes the selected entry's fields into the editor widgets (under the
    /// guard) and regenerates its row.
    fn apply_selection<S: EditorShell>(&self, shell: &mut S) -> EventResult {
        let index = self.selection;
        let Ok(entry) = self.store.get(index) else {
            return EventResult::Ignored;
        };

        {
            let _guard = self.suspender.suspend();
            shell.show_kind(entry.kind);
            shell.show_start_color(entry.start);
            shell.show_end_color(entry.end);
        }
        shell.set_row(index, thumbnail(entry), entry.kind.label());
        EventResult::Consumed
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

fn thumbnail(entry: &Gradient) -> RgbaImage {
    render_thumbnail(entry).to_rgba_image()
}
