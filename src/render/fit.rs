use crate::{
    foundation::core::{Affine, Rect, Viewport},
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// Placement of a frame inside the viewport: uniform "contain" scaling of the
/// retained top part of the source, centered on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainFit {
    /// Source region in image pixels, anchored at the top-left corner.
    pub source: Rect,
    /// Destination region in surface pixels.
    pub dest: Rect,
    /// Uniform source-to-surface scale.
    pub scale: f64,
}

impl ContainFit {
    /// `retain_fraction` keeps the top part of the source height (0.85 drops the
    /// bottom 15% watermark strip). Returns `None` when either side has no area.
    pub fn compute(
        natural_width: u32,
        natural_height: u32,
        retain_fraction: f64,
        viewport: Viewport,
    ) -> Option<Self> {
        if natural_width == 0 || natural_height == 0 || viewport.is_empty() {
            return None;
        }
        if !retain_fraction_ok(retain_fraction) {
            return None;
        }

        let usable_w = f64::from(natural_width);
        let usable_h = f64::from(natural_height) * retain_fraction;
        let (vw, vh) = (f64::from(viewport.width), f64::from(viewport.height));

        let scale = (vw / usable_w).min(vh / usable_h);
        let w = usable_w * scale;
        let h = usable_h * scale;
        let x = (vw - w) / 2.0;
        let y = (vh - h) / 2.0;

        Some(Self {
            source: Rect::new(0.0, 0.0, usable_w, usable_h),
            dest: Rect::new(x, y, x + w, y + h),
            scale,
        })
    }

    /// Maps source pixel coordinates onto the surface.
    pub fn transform(&self) -> Affine {
        Affine::translate((self.dest.x0, self.dest.y0)) * Affine::scale(self.scale)
    }
}

/// Reject crop fractions that would leave no source, or ask for more than exists.
pub fn validate_retain_fraction(retain_fraction: f64) -> ScrollreelResult<()> {
    if retain_fraction_ok(retain_fraction) {
        return Ok(());
    }
    Err(ScrollreelError::validation(format!(
        "retain fraction must be within (0, 1], got {retain_fraction}"
    )))
}

fn retain_fraction_ok(f: f64) -> bool {
    f > 0.0 && f <= 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
