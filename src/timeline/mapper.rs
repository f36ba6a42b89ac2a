use std::collections::HashSet;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// Map scroll progress onto a frame index: `round(p * (n - 1))`, clamped to `[0, n - 1]`.
///
/// Progress outside `[0, 1]` (overscroll) clamps; NaN maps to the first frame.
pub fn map_frame(progress: f64, frame_count: u32) -> FrameIndex {
    if frame_count == 0 || progress.is_nan() {
        return FrameIndex(0);
    }
    let last = f64::from(frame_count - 1);
    let raw = (progress * last).round();
    FrameIndex(raw.clamp(0.0, last) as u32)
}

/// Piecewise-linear opacity curve over scroll progress.
///
/// `breakpoints[i]` pairs with `opacities[i]`. Two equal breakpoints form an
/// instantaneous step; the later point applies at and after it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpacityTrack {
    pub breakpoints: Vec<f64>,
    pub opacities: Vec<f64>,
}

impl OpacityTrack {
    pub fn new(breakpoints: Vec<f64>, opacities: Vec<f64>) -> ScrollreelResult<Self> {
        let track = Self {
            breakpoints,
            opacities,
        };
        track.validate()?;
        Ok(track)
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        if self.breakpoints.is_empty() {
            return Err(ScrollreelError::validation(
                "opacity track needs at least one control point",
            ));
        }
        if self.breakpoints.len() != self.opacities.len() {
            return Err(ScrollreelError::validation(
                "opacity track breakpoints and opacities must have equal length",
            ));
        }
        if self.breakpoints.iter().any(|p| !p.is_finite()) {
            return Err(ScrollreelError::validation(
                "opacity track breakpoints must be finite",
            ));
        }
        if !self.breakpoints.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ScrollreelError::validation(
                "opacity track breakpoints must be sorted",
            ));
        }
        if self.opacities.iter().any(|o| !(0.0..=1.0).contains(o)) {
            return Err(ScrollreelError::validation(
                "opacity track values must be within [0, 1]",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, progress: f64) -> f64 {
        let n = self.breakpoints.len().min(self.opacities.len());
        if n == 0 {
            return 0.0;
        }
        let idx = self.breakpoints[..n].partition_point(|&b| b <= progress);

        let value = if idx == 0 {
            self.opacities[0]
        } else if idx >= n {
            self.opacities[n - 1]
        } else {
            let (p0, p1) = (self.breakpoints[idx - 1], self.breakpoints[idx]);
            let (o0, o1) = (self.opacities[idx - 1], self.opacities[idx]);
            let t = (progress - p0) / (p1 - p0);
            o0 + (o1 - o0) * t
        };
        value.clamp(0.0, 1.0)
    }
}

/// One cross-fading caption layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaptionLayer {
    pub name: String,
    #[serde(flatten)]
    pub track: OpacityTrack,
}

/// Static per-layer checkpoint configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CheckpointTable {
    pub layers: Vec<CaptionLayer>,
}

impl Default for CheckpointTable {
    fn default() -> Self {
        Self::showcase()
    }
}

impl CheckpointTable {
    pub fn new(layers: Vec<CaptionLayer>) -> ScrollreelResult<Self> {
        let table = Self { layers };
        table.validate()?;
        Ok(table)
    }

    /// Four captions: title, two side panels, closing call to action.
    pub fn showcase() -> Self {
        fn layer(name: &str, breakpoints: &[f64], opacities: &[f64]) -> CaptionLayer {
            CaptionLayer {
                name: name.to_string(),
                track: OpacityTrack {
                    breakpoints: breakpoints.to_vec(),
                    opacities: opacities.to_vec(),
                },
            }
        }

        Self {
            layers: vec![
                layer("title", &[0.0, 0.2, 0.25], &[1.0, 1.0, 0.0]),
                layer("precision", &[0.25, 0.3, 0.5, 0.55], &[0.0, 1.0, 1.0, 0.0]),
                layer("titanium", &[0.55, 0.6, 0.8, 0.85], &[0.0, 1.0, 1.0, 0.0]),
                layer("cta", &[0.85, 0.9, 1.0], &[0.0, 1.0, 1.0]),
            ],
        }
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        let mut seen = HashSet::new();
        for layer in &self.layers {
            if layer.name.is_empty() {
                return Err(ScrollreelError::validation("caption layer name must be non-empty"));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(ScrollreelError::validation(format!(
                    "duplicate caption layer '{}'",
                    layer.name
                )));
            }
            layer.track.validate().map_err(|e| {
                ScrollreelError::validation(format!("caption layer '{}': {e}", layer.name))
            })?;
        }
        Ok(())
    }

    pub fn map_opacities(&self, progress: f64) -> CaptionOpacities {
        CaptionOpacities(
            self.layers
                .iter()
                .map(|l| (l.name.clone(), l.track.sample(progress)))
                .collect(),
        )
    }
}

/// Layer name to opacity, in table order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptionOpacities(pub Vec<(String, f64)>);

impl CaptionOpacities {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, o)| *o)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(n, o)| (n.as_str(), *o))
    }

    /// Layers at full opacity.
    pub fn fully_visible(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, o)| *o >= 1.0)
            .map(|(n, _)| n)
            .collect()
    }
}

impl std::fmt::Display for CaptionOpacities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, o)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={o:.3}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/mapper.rs"]
mod tests;
