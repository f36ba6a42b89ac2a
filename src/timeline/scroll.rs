/// Scroll-driven page region, measured in document pixels.
///
/// Progress runs from 0 when the region's top meets the viewport top to 1 when
/// its bottom meets the viewport bottom. Values are not clamped: overscroll at
/// either boundary is passed through and clamped by the consumers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Document offset of the region's top edge.
    pub top: f64,
    /// Region height.
    pub height: f64,
}

impl ScrollRegion {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Region spanning `span_viewports` viewport heights (e.g. 4.0 for a `400vh` section).
    pub fn from_viewports(top: f64, span_viewports: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height: span_viewports * viewport_height,
        }
    }

    /// Scroll distance over which progress goes from 0 to 1.
    pub fn scroll_distance(&self, viewport_height: f64) -> f64 {
        self.height - viewport_height
    }

    pub fn progress(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        let distance = self.scroll_distance(viewport_height);
        if distance <= 0.0 {
            return if scroll_y >= self.top { 1.0 } else { 0.0 };
        }
        (scroll_y - self.top) / distance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scroll.rs"]
mod tests;
