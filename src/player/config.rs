use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;

use crate::{
    assets::loader::LoadStrategy,
    assets::naming::FrameNaming,
    foundation::error::{ScrollreelError, ScrollreelResult},
    player::overlay::OverlayFade,
    render::fit::validate_retain_fraction,
    render::renderer::RenderSettings,
    timeline::mapper::CheckpointTable,
};

/// When the renderer may paint relative to the load lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderGate {
    /// Nothing is painted until every frame has settled; a loading overlay covers the canvas.
    #[default]
    WhenReady,
    /// Frames are painted as soon as their slot is loaded.
    Opportunistic,
}

/// Static player configuration. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Number of stills in the sequence.
    pub frame_count: u32,
    pub naming: FrameNaming,
    /// Top fraction of each still that is drawn.
    pub retain_fraction: f64,
    /// Height of the scroll-driven region in viewport heights.
    pub scroll_span_viewports: f64,
    /// Straight-alpha background under each frame; `null` for transparent.
    pub clear_rgba: Option<[u8; 4]>,
    pub captions: CheckpointTable,
    pub gate: RenderGate,
    pub strategy: LoadStrategy,
    pub overlay: OverlayFade,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let render = RenderSettings::default();
        Self {
            frame_count: 80,
            naming: FrameNaming::default(),
            retain_fraction: render.retain_fraction,
            scroll_span_viewports: 4.0,
            clear_rgba: render.clear_rgba,
            captions: CheckpointTable::showcase(),
            gate: RenderGate::default(),
            strategy: LoadStrategy::default(),
            overlay: OverlayFade::default(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json_str(s: &str) -> ScrollreelResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ScrollreelError::serde(format!("parse player config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> ScrollreelResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open player config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ScrollreelError::serde(format!("parse player config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> ScrollreelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollreelError::serde(format!("serialize player config: {e}")))
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        if self.frame_count == 0 {
            return Err(ScrollreelError::validation("frame_count must be > 0"));
        }
        self.naming.validate()?;
        validate_retain_fraction(self.retain_fraction)?;
        if !(self.scroll_span_viewports.is_finite() && self.scroll_span_viewports >= 1.0) {
            return Err(ScrollreelError::validation(
                "scroll_span_viewports must be a finite value >= 1",
            ));
        }
        self.captions.validate()?;
        let fade = &self.overlay;
        if [fade.overlay_secs, fade.content_delay_secs, fade.content_secs]
            .iter()
            .any(|s| !s.is_finite() || *s < 0.0)
        {
            return Err(ScrollreelError::validation(
                "overlay durations must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Frame sources `0..frame_count` in index order.
    pub fn sources(&self) -> Vec<String> {
        self.naming.sources(self.frame_count)
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            retain_fraction: self.retain_fraction,
            clear_rgba: self.clear_rgba,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/config.rs"]
mod tests;
