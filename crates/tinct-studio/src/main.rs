//! Headless editing session: drives the gradient editor the way a toolkit
//! adapter would and writes the resulting selector thumbnails to disk.

use std::path::Path;

use anyhow::Result;
use tinct_engine::logging::{init_logging, LoggingConfig};
use tinct_ui::prelude::*;

mod shell;

use shell::SnapshotShell;

fn main() -> Result<()> {
    init_logging(LoggingConfig::with_filter("info"));

    let mut shell = SnapshotShell::new();
    let mut editor = EditorController::new();
    editor.sync_rows(&mut shell);

    // A scripted session standing in for user input: recolor the default
    // gradient, add a couple more, duplicate, delete, reselect.
    let session = [
        EditorEvent::StartColorChanged(Color::opaque(0.12, 0.15, 0.35)),
        EditorEvent::EndColorChanged(Color::rgba(0.05, 0.05, 0.10, 0.85)),
        EditorEvent::CreateRequested { kind: GradientKind::Horizontal },
        EditorEvent::StartColorChanged(Color::opaque(0.90, 0.45, 0.10)),
        EditorEvent::CreateRequested { kind: GradientKind::Radial },
        EditorEvent::EndColorChanged(Color::rgba(0.0, 0.0, 0.0, 0.0)),
        EditorEvent::DuplicateRequested,
        EditorEvent::DeleteRequested,
        EditorEvent::SelectionChanged(Some(0)),
    ];

    for event in session {
        let result = editor.dispatch(&mut shell, event);
        log::info!("{event:?} -> {result:?}");
    }

    println!("gradients: {}", editor.store().len());
    println!("selector rows: {:?}", shell.row_labels());
    println!("active row: {:?}", shell.active_row());
    println!("editor widgets: {}", shell.widget_summary());

    let out = Path::new("thumbnails");
    let written = shell.export_thumbnails(out)?;
    println!("wrote {} thumbnails:", written.len());
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
