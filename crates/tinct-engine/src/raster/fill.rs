use crate::paint::{Color, Gradient, GradientKind};
use crate::raster::Pixmap;

/// Selector thumbnail dimensions.
pub const THUMBNAIL_WIDTH: u32 = 70;
pub const THUMBNAIL_HEIGHT: u32 = 30;

/// Mid-gray backdrop behind thumbnails, so translucent gradients read as
/// translucent in the selector list.
const THUMBNAIL_BACKDROP: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };

/// Composites `gradient` over the whole of `target` (source-over).
///
/// Geometry per kind:
/// - `Vertical`: axis (0,0) → (0,h)
/// - `Horizontal`: axis (0,0) → (w,0)
/// - `Radial`: centered at (w/2, h/2), outer radius √(w²+h²)/2
///
/// Sampling happens at pixel centers. Existing surface content shows through
/// translucent stops, so stacked decorative fills compose the way a panel
/// background expects.
pub fn render_gradient(target: &mut Pixmap, gradient: &Gradient) {
    let ramp = gradient.ramp();
    let w = target.width() as f32;
    let h = target.height() as f32;

    log::trace!(
        "render_gradient: {:?} {}x{} ({} stops)",
        gradient.kind,
        target.width(),
        target.height(),
        ramp.stops().len(),
    );

    let (cx, cy) = (w * 0.5, h * 0.5);
    let radius = (w * w + h * h).sqrt() * 0.5;

    for y in 0..target.height() {
        for x in 0..target.width() {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let t = match gradient.kind {
                GradientKind::Vertical => py / h,
                GradientKind::Horizontal => px / w,
                GradientKind::Radial => {
                    let (dx, dy) = (px - cx, py - cy);
                    (dx * dx + dy * dy).sqrt() / radius
                }
            };
            target.blend_pixel(x, y, ramp.sample(t));
        }
    }
}

/// Renders the fixed-size selector thumbnail for `gradient`: the mid-gray
/// backdrop, then the gradient composited over it.
pub fn render_thumbnail(gradient: &Gradient) -> Pixmap {
    let mut pm = Pixmap::filled(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, THUMBNAIL_BACKDROP);
    render_gradient(&mut pm, gradient);
    pm
}
