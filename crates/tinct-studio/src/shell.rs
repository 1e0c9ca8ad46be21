use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use tinct_ui::prelude::*;

/// In-memory [`EditorShell`] standing in for a real toolkit adapter.
///
/// Captures selector rows and the displayed widget state, and dumps row
/// thumbnails as PNG files so a session's results can be inspected without
/// any window.
#[derive(Default)]
pub struct SnapshotShell {
    rows: Vec<(RgbaImage, String)>,
    active_row: Option<usize>,
    kind: Option<GradientKind>,
    start: Option<Color>,
    end: Option<Color>,
}

impl SnapshotShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|(_, label)| label.as_str()).collect()
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    /// Current editor widget state, as a display string for narration.
    pub fn widget_summary(&self) -> String {
        format!(
            "kind: {}, start: {:?}, end: {:?}",
            self.kind.map(GradientKind::label).unwrap_or("-"),
            self.start,
            self.end,
        )
    }

    /// Writes every row thumbnail to `dir` as `NN-label.png`.
    pub fn export_thumbnails(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating thumbnail directory {}", dir.display()))?;

        let mut written = Vec::with_capacity(self.rows.len());
        for (index, (thumbnail, label)) in self.rows.iter().enumerate() {
            let path = dir.join(format!("{index:02}-{}.png", label.to_lowercase()));
            thumbnail
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            written.push(path);
        }
        Ok(written)
    }
}

impl EditorShell for SnapshotShell {
    fn append_row(&mut self, thumbnail: RgbaImage, label: &str) {
        self.rows.push((thumbnail, label.to_string()));
    }

    fn remove_row(&mut self, index: usize) {
        self.rows.remove(index);
    }

    fn set_row(&mut self, index: usize, thumbnail: RgbaImage, label: &str) {
        self.rows[index] = (thumbnail, label.to_string());
    }

    fn set_active_row(&mut self, index: usize) {
        self.active_row = Some(index);
    }

    fn show_kind(&mut self, kind: GradientKind) {
        self.kind = Some(kind);
    }

    fn show_start_color(&mut self, color: Color) {
        self.start = Some(color);
    }

    fn show_end_color(&mut self, color: Color) {
        self.end = Some(color);
    }
}
