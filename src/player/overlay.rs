use crate::animation::ease::Ease;

/// Cross-fade between the loading overlay and the frame canvas once loading ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayFade {
    /// Seconds for the overlay to fade out.
    pub overlay_secs: f64,
    pub overlay_ease: Ease,
    /// Seconds after ready before the content starts fading in.
    pub content_delay_secs: f64,
    /// Seconds for the content to fade in.
    pub content_secs: f64,
    pub content_ease: Ease,
}

impl Default for OverlayFade {
    fn default() -> Self {
        Self {
            overlay_secs: 0.8,
            overlay_ease: Ease::InOutQuad,
            content_delay_secs: 0.5,
            content_secs: 1.0,
            content_ease: Ease::OutQuad,
        }
    }
}

/// Opacity of the loading overlay and of the canvas plus captions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayOpacity {
    pub overlay: f64,
    pub content: f64,
}

impl OverlayOpacity {
    /// Overlay still intercepts pointer input.
    pub fn blocks_input(&self) -> bool {
        self.overlay > 0.0
    }
}

impl OverlayFade {
    /// Sample at `since_ready_secs` after the player became ready; `None` while loading.
    pub fn sample(&self, since_ready_secs: Option<f64>) -> OverlayOpacity {
        let Some(t) = since_ready_secs else {
            return OverlayOpacity {
                overlay: 1.0,
                content: 0.0,
            };
        };
        let t = t.max(0.0);
        OverlayOpacity {
            overlay: 1.0 - self.overlay_ease.apply(progress(t, self.overlay_secs)),
            content: self
                .content_ease
                .apply(progress(t - self.content_delay_secs, self.content_secs)),
        }
    }

    /// Both fades have finished.
    pub fn settled_after(&self) -> f64 {
        self.overlay_secs
            .max(self.content_delay_secs + self.content_secs)
    }
}

fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return if elapsed >= 0.0 { 1.0 } else { 0.0 };
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/player/overlay.rs"]
mod tests;
