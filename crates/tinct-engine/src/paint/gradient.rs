use super::Color;

/// Geometric fill pattern of a gradient.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GradientKind {
    /// Linear, top to bottom.
    #[default]
    Vertical,
    /// Linear, left to right.
    Horizontal,
    /// Concentric circles from the center out.
    Radial,
}

impl GradientKind {
    /// All kinds in the order the editor's type selector lists them.
    pub const ALL: [GradientKind; 3] =
        [GradientKind::Vertical, GradientKind::Horizontal, GradientKind::Radial];

    /// Display name used for selector rows and labels.
    pub fn label(self) -> &'static str {
        match self {
            GradientKind::Vertical => "Vertical",
            GradientKind::Horizontal => "Horizontal",
            GradientKind::Radial => "Radial",
        }
    }
}

/// An intermediate gradient stop between the start and end colors.
///
/// `offset` is expected in [0, 1]. Stops are consumed in storage order and
/// never resorted; callers inserting out-of-order offsets get deterministic
/// but unsmoothed results.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A gradient definition as edited by the panel.
///
/// The editor only exposes `kind`, `start`, and `end`; `stops` exists in the
/// model (theme files may carry intermediate stops) but has no editing UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub start: Color,
    pub end: Color,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// New definition with the designer default colors (opaque white → black)
    /// and no intermediate stops.
    pub fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            start: Color::opaque(1.0, 1.0, 1.0),
            end: Color::opaque(0.0, 0.0, 0.0),
            stops: Vec::new(),
        }
    }

    /// Resolves the full stop list: start at 0.0, intermediate stops in
    /// storage order, end at 1.0.
    pub fn ramp(&self) -> Ramp {
        let mut stops = Vec::with_capacity(self.stops.len() + 2);
        stops.push(ColorStop::new(0.0, self.start));
        stops.extend_from_slice(&self.stops);
        stops.push(ColorStop::new(1.0, self.end));
        Ramp { stops }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(GradientKind::Vertical)
    }
}

/// Resolved stop list of a [`Gradient`], sampled by the rasterizer.
///
/// Always holds at least the two endpoint stops at offsets 0.0 and 1.0, so
/// adjacent pairs chain from 0 to 1 and every `t` in [0, 1] falls into some
/// pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    stops: Vec<ColorStop>,
}

impl Ramp {
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Interpolated color at `t` (clamped to [0, 1]).
    ///
    /// Scans adjacent stop pairs in storage order; the first pair whose
    /// offset range contains `t` wins. Pairs with descending offsets match
    /// nothing and are skipped, which keeps unsorted stop lists deterministic.
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = (b.offset - a.offset).max(1.0e-6);
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        // Unreachable for well-formed ramps; the endpoint stops pin 0 and 1.
        self.stops.last().map(|s| s.color).unwrap_or(Color::transparent())
    }
}
