use image::RgbaImage;
use tinct_engine::paint::{Color, GradientKind};

/// Write boundary between the editor core and a widget toolkit.
///
/// The controller pushes state out through this trait: selector rows
/// (thumbnail + label), the active selection, and the editor widgets'
/// displayed values. It never reads widget state back; user edits arrive
/// as [`EditorEvent`](crate::EditorEvent)s carrying their values.
///
/// Adapters translating real toolkit signals should consult the
/// controller's [`UpdateSuspender`](crate::UpdateSuspender) before
/// forwarding: calls made through this trait may make the toolkit re-emit
/// "changed" signals synchronously.
pub trait EditorShell {
    /// Appends a selector row.
    fn append_row(&mut self, thumbnail: RgbaImage, label: &str);

    /// Removes the selector row at `index`. Later rows shift down.
    fn remove_row(&mut self, index: usize);

    /// Replaces the thumbnail and label of the row at `index`.
    fn set_row(&mut self, index: usize, thumbnail: RgbaImage, label: &str);

    /// Moves the selector's active row.
    fn set_active_row(&mut self, index: usize);

    /// Shows `kind` in the type selector.
    fn show_kind(&mut self, kind: GradientKind);

    /// Shows `color` in the start color picker.
    fn show_start_color(&mut self, color: Color);

    /// Shows `color` in the end color picker.
    fn show_end_color(&mut self, color: Color);
}
