//! Tinct UI — the gradient editor core on top of `tinct-engine`.
//!
//! This crate is toolkit-agnostic: widget toolkits adapt to it through the
//! [`EditorShell`] write boundary and feed user actions in as typed
//! [`EditorEvent`]s. The [`EditorController`] owns the gradient registry,
//! the current selection, and the reentrancy guard.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tinct_ui::prelude::*;
//!
//! let mut shell = MyToolkitShell::new();
//! let mut editor = EditorController::new();
//! editor.sync_rows(&mut shell);
//!
//! // In a signal handler:
//! editor.dispatch(&mut shell, EditorEvent::KindChanged(GradientKind::Radial));
//! ```

pub mod controller;
pub mod event;
pub mod guard;
pub mod shell;
pub mod store;

pub use controller::EditorController;
pub use event::{EditorEvent, EventResult};
pub use guard::UpdateSuspender;
pub use shell::EditorShell;
pub use store::{GradientStore, StoreError};

/// Everything a toolkit adapter needs.
pub mod prelude {
    pub use crate::controller::EditorController;
    pub use crate::event::{EditorEvent, EventResult};
    pub use crate::guard::UpdateSuspender;
    pub use crate::shell::EditorShell;
    pub use crate::store::{GradientStore, StoreError};

    // Re-export the engine primitives adapters need.
    pub use tinct_engine::paint::{Color, ColorStop, Gradient, GradientKind};
    pub use tinct_engine::raster::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
}
