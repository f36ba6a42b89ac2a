use crate::{
    assets::frame_set::{FrameImage, FrameSet},
    foundation::core::{FrameIndex, Rgba8Premul, Viewport},
    foundation::error::ScrollreelResult,
    render::fit::ContainFit,
    render::surface::{FrameRgba, RenderSurface},
};

/// Renderer configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// Top fraction of each source frame that is drawn; the rest is cropped.
    pub retain_fraction: f64,
    /// Straight-alpha background painted under each frame; `None` is transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            retain_fraction: 0.85,
            clear_rgba: Some([5, 5, 5, 255]),
        }
    }
}

/// Paints the selected frame into the render surface.
///
/// Every paint clears and redraws the whole surface. A frame that is missing
/// or not ready is skipped and the previously painted pixels stay put.
pub struct Renderer {
    settings: RenderSettings,
    viewport: Viewport,
    surface: Option<RenderSurface>,
    current: FrameIndex,
    paint_count: u64,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            viewport: Viewport::default(),
            surface: None,
            current: FrameIndex(0),
            paint_count: 0,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frame index selected by the last `show`.
    pub fn current(&self) -> FrameIndex {
        self.current
    }

    pub fn surface(&self) -> Option<&RenderSurface> {
        self.surface.as_ref()
    }

    /// Number of completed paints since construction.
    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    /// Paint `image` (the frame stored at `index`). Returns whether anything was drawn.
    pub fn render(&mut self, index: FrameIndex, image: &FrameImage) -> ScrollreelResult<bool> {
        let Some(paint) = image.paint() else {
            return Ok(false);
        };
        let Some(fit) = ContainFit::compute(
            image.width(),
            image.height(),
            self.settings.retain_fraction,
            self.viewport,
        ) else {
            return Ok(false);
        };

        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        surface.paint(&paint, &fit, self.settings.clear_rgba);
        self.paint_count += 1;
        tracing::trace!(%index, scale = fit.scale, "frame painted");
        Ok(true)
    }

    /// Select `index` without painting; the next resize repaints it.
    pub fn select(&mut self, index: FrameIndex) {
        self.current = index;
    }

    /// Select `index` and paint it if its slot is ready.
    pub fn show(&mut self, index: FrameIndex, frames: Option<&FrameSet>) -> ScrollreelResult<bool> {
        self.current = index;
        match frames.and_then(|f| f.ready_image(index)) {
            Some(image) => self.render(index, image),
            None => Ok(false),
        }
    }

    /// Reallocate the surface for `viewport` and repaint the current frame.
    ///
    /// An empty viewport detaches the surface; later paints are no-ops until a
    /// non-empty resize.
    pub fn resize(
        &mut self,
        viewport: Viewport,
        frames: Option<&FrameSet>,
    ) -> ScrollreelResult<bool> {
        if viewport.is_empty() {
            self.viewport = viewport;
            self.surface = None;
            return Ok(false);
        }

        let mut surface = RenderSurface::new(viewport)?;
        surface.clear(self.background());
        self.viewport = viewport;
        self.surface = Some(surface);
        self.show(self.current, frames)
    }

    /// Drop the surface and selection.
    pub fn reset(&mut self) {
        self.surface = None;
        self.viewport = Viewport::default();
        self.current = FrameIndex(0);
    }

    pub fn snapshot(&self) -> Option<FrameRgba> {
        self.surface.as_ref().map(RenderSurface::readback)
    }

    fn background(&self) -> Rgba8Premul {
        self.settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
            .unwrap_or_else(Rgba8Premul::transparent)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
