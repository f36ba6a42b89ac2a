use std::sync::Arc;

use crate::{
    assets::fetch::FrameFetcher,
    assets::frame_set::{FrameSet, LoadState},
    assets::loader::{FrameLoader, LoadEvent},
    foundation::core::{FrameIndex, Viewport},
    foundation::error::{ScrollreelError, ScrollreelResult},
    player::config::{PlayerConfig, RenderGate},
    player::overlay::OverlayOpacity,
    player::scroll_lock::ScrollLock,
    render::renderer::Renderer,
    render::surface::FrameRgba,
    timeline::mapper::{CaptionOpacities, map_frame},
    timeline::scroll::ScrollRegion,
};

/// Lifecycle phase of a [`Player`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Loading,
    Ready,
}

/// Identifies the mount a loader belongs to. Events carrying a ticket from an
/// earlier mount are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Scroll-driven frame sequence player.
///
/// Single-threaded: the host calls in from its event loop. Loading advances
/// only through [`Player::apply`] / [`Player::pump`], and scroll or resize
/// calls read whatever frames have settled so far.
pub struct Player {
    config: PlayerConfig,
    lock: Box<dyn ScrollLock>,
    phase: Phase,
    generation: u64,
    frames: Option<FrameSet>,
    load: LoadState,
    renderer: Renderer,
    progress: f64,
    current: FrameIndex,
    opacities: CaptionOpacities,
}

impl Player {
    pub fn new(config: PlayerConfig, lock: Box<dyn ScrollLock>) -> ScrollreelResult<Self> {
        config.validate()?;
        let renderer = Renderer::new(config.render_settings());
        let opacities = config.captions.map_opacities(0.0);
        Ok(Self {
            config,
            lock,
            phase: Phase::Unmounted,
            generation: 0,
            frames: None,
            load: LoadState::default(),
            renderer,
            progress: 0.0,
            current: FrameIndex(0),
            opacities,
        })
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Whole-number load percentage for the loading indicator.
    pub fn percent(&self) -> u32 {
        self.load.percent()
    }

    /// Loading finished without a single usable frame.
    pub fn all_frames_failed(&self) -> bool {
        self.load.all_failed()
    }

    pub fn frames(&self) -> Option<&FrameSet> {
        self.frames.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn current_frame(&self) -> FrameIndex {
        self.current
    }

    pub fn opacities(&self) -> &CaptionOpacities {
        &self.opacities
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Current surface pixels, if a surface is attached.
    pub fn snapshot(&self) -> Option<FrameRgba> {
        self.renderer.snapshot()
    }

    /// Overlay/content opacity `since_ready_secs` after becoming ready.
    pub fn overlay(&self, since_ready_secs: f64) -> OverlayOpacity {
        let t = self.is_ready().then_some(since_ready_secs);
        self.config.overlay.sample(t)
    }

    /// Scroll region for the configured span at the given viewport height.
    pub fn scroll_region(&self, top: f64, viewport_height: f64) -> ScrollRegion {
        ScrollRegion::from_viewports(top, self.config.scroll_span_viewports, viewport_height)
    }

    /// Start a mount for `sources`. Any previous mount is torn down first.
    #[tracing::instrument(skip(self, sources), fields(total = sources.len()))]
    pub fn mount(&mut self, sources: &[String]) -> ScrollreelResult<LoadTicket> {
        let total: u32 = sources
            .len()
            .try_into()
            .map_err(|_| ScrollreelError::validation("too many frame sources"))?;
        if self.phase != Phase::Unmounted {
            self.unmount();
        }

        self.generation += 1;
        self.frames = Some(FrameSet::new(total));
        self.load = LoadState::new(total);
        self.phase = Phase::Loading;
        self.lock.engage();
        tracing::info!(generation = self.generation, "player mounted");
        Ok(LoadTicket {
            generation: self.generation,
        })
    }

    /// Mount the configured sequence and build its loader.
    pub fn mount_sequence(
        &mut self,
        fetcher: Arc<dyn FrameFetcher>,
    ) -> ScrollreelResult<(LoadTicket, FrameLoader)> {
        let sources = self.config.sources();
        let ticket = self.mount(&sources)?;
        let loader = FrameLoader::new(sources, fetcher, self.config.strategy);
        Ok((ticket, loader))
    }

    /// Apply one loader event. Returns `false` when the ticket is stale or the
    /// player is unmounted, in which case nothing changes.
    pub fn apply(&mut self, ticket: LoadTicket, event: LoadEvent) -> ScrollreelResult<bool> {
        if self.phase == Phase::Unmounted || ticket.generation != self.generation {
            tracing::trace!(
                ticket = ticket.generation,
                generation = self.generation,
                "dropping stale load event"
            );
            return Ok(false);
        }

        match event {
            LoadEvent::Frame { index, outcome } => {
                if self.phase != Phase::Loading {
                    return Err(ScrollreelError::validation(format!(
                        "frame {index} arrived after loading completed"
                    )));
                }
                let loaded = outcome.is_loaded();
                let frames = self
                    .frames
                    .as_mut()
                    .ok_or_else(|| ScrollreelError::validation("mounted player has no frame set"))?;
                frames.settle(index, outcome.into_image())?;
                self.load.record(loaded);
                tracing::debug!(%index, percent = self.load.percent(), "load progress");

                if loaded && index == self.current && self.may_paint() {
                    self.renderer.show(self.current, self.frames.as_ref())?;
                }
            }
            LoadEvent::Ready => {
                if self.phase == Phase::Ready {
                    return Ok(false);
                }
                self.load.complete()?;
                if let Some(frames) = self.frames.as_mut() {
                    frames.seal();
                }
                self.phase = Phase::Ready;
                self.lock.release();
                if self.load.all_failed() {
                    tracing::warn!(total = self.load.total, "every frame failed to load");
                }
                tracing::info!(
                    total = self.load.total,
                    failed = self.load.failed_count,
                    "frame sequence ready"
                );
                self.renderer.show(self.current, self.frames.as_ref())?;
            }
        }
        Ok(true)
    }

    /// Drain `loader` into [`Player::apply`].
    pub fn pump(&mut self, ticket: LoadTicket, loader: &mut FrameLoader) -> ScrollreelResult<()> {
        for event in loader {
            if !self.apply(ticket, event)? {
                break;
            }
        }
        Ok(())
    }

    /// Scroll notification: select the frame, update captions and repaint.
    pub fn set_progress(&mut self, progress: f64) -> ScrollreelResult<()> {
        let total = self.frames.as_ref().map_or(0, |f| f.len() as u32);
        self.progress = progress;
        self.current = map_frame(progress, total);
        self.opacities = self.config.captions.map_opacities(progress);
        if self.may_paint() {
            self.renderer.show(self.current, self.frames.as_ref())?;
        } else {
            self.renderer.select(self.current);
        }
        Ok(())
    }

    /// Viewport change: resize the surface and repaint the current frame.
    pub fn resize(&mut self, viewport: Viewport) -> ScrollreelResult<()> {
        let frames = if self.may_paint() {
            self.frames.as_ref()
        } else {
            None
        };
        self.renderer.resize(viewport, frames)?;
        Ok(())
    }

    /// Tear down: drop frames and surface, release the scroll lock and
    /// invalidate outstanding load tickets.
    #[tracing::instrument(skip(self))]
    pub fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.generation += 1;
        self.phase = Phase::Unmounted;
        self.frames = None;
        self.load = LoadState::default();
        self.renderer.reset();
        self.progress = 0.0;
        self.current = FrameIndex(0);
        self.opacities = self.config.captions.map_opacities(0.0);
        self.lock.release();
        tracing::info!("player unmounted");
    }

    fn may_paint(&self) -> bool {
        match self.phase {
            Phase::Ready => true,
            Phase::Loading => self.config.gate == RenderGate::Opportunistic,
            Phase::Unmounted => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/machine.rs"]
mod tests;
