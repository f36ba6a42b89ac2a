use std::{collections::VecDeque, sync::Arc};

use rayon::prelude::*;

use crate::{
    assets::decode::decode_frame,
    assets::fetch::FrameFetcher,
    assets::frame_set::FrameImage,
    foundation::core::FrameIndex,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// How frame requests are issued. Both strategies report frames in index order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LoadStrategy {
    /// Fetch and decode one frame per step, awaiting each before the next.
    #[default]
    Sequential,
    /// Fetch and decode every frame on a worker pool, then release them in index order.
    Parallel {
        #[serde(default)]
        threads: Option<usize>,
    },
}

/// Settlement of a single frame request.
#[derive(Clone, Debug)]
pub enum FrameOutcome {
    Loaded(FrameImage),
    Failed(String),
}

impl FrameOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub(crate) fn into_image(self) -> Option<FrameImage> {
        match self {
            Self::Loaded(img) => Some(img),
            Self::Failed(_) => None,
        }
    }
}

/// Progress notification produced by [`FrameLoader`].
#[derive(Clone, Debug)]
pub enum LoadEvent {
    /// One frame settled (loaded or failed).
    Frame {
        index: FrameIndex,
        outcome: FrameOutcome,
    },
    /// Every frame settled. Emitted exactly once, last.
    Ready,
}

/// Ordered frame loader.
///
/// Each call to [`Iterator::next`] settles one more frame, so the caller decides
/// when loading advances and may interleave scroll/resize handling between steps.
pub struct FrameLoader {
    sources: Vec<String>,
    fetcher: Arc<dyn FrameFetcher>,
    strategy: LoadStrategy,
    next: usize,
    prefetched: Option<VecDeque<FrameOutcome>>,
    ready_sent: bool,
}

impl FrameLoader {
    pub fn new(
        sources: Vec<String>,
        fetcher: Arc<dyn FrameFetcher>,
        strategy: LoadStrategy,
    ) -> Self {
        Self {
            sources,
            fetcher,
            strategy,
            next: 0,
            prefetched: None,
            ready_sent: false,
        }
    }

    pub fn total(&self) -> usize {
        self.sources.len()
    }

    /// Frames settled so far.
    pub fn settled(&self) -> usize {
        self.next
    }

    pub fn strategy(&self) -> LoadStrategy {
        self.strategy
    }

    fn next_outcome(&mut self) -> FrameOutcome {
        if let LoadStrategy::Parallel { threads } = self.strategy {
            if self.prefetched.is_none() {
                self.prefetched = Some(self.prefetch_all(threads));
            }
            if let Some(outcome) = self.prefetched.as_mut().and_then(VecDeque::pop_front) {
                return outcome;
            }
        }
        settle_one(
            self.fetcher.as_ref(),
            FrameIndex(self.next as u32),
            &self.sources[self.next],
        )
    }

    fn prefetch_all(&self, threads: Option<usize>) -> VecDeque<FrameOutcome> {
        let pool = match build_thread_pool(threads) {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to sequential frame loading");
                return VecDeque::new();
            }
        };
        let fetcher = self.fetcher.as_ref();
        let outcomes: Vec<FrameOutcome> = pool.install(|| {
            self.sources
                .par_iter()
                .enumerate()
                .map(|(i, source)| settle_one(fetcher, FrameIndex(i as u32), source))
                .collect()
        });
        outcomes.into()
    }
}

impl Iterator for FrameLoader {
    type Item = LoadEvent;

    fn next(&mut self) -> Option<LoadEvent> {
        if self.next < self.sources.len() {
            let index = FrameIndex(self.next as u32);
            let outcome = self.next_outcome();
            self.next += 1;
            return Some(LoadEvent::Frame { index, outcome });
        }
        if self.ready_sent {
            return None;
        }
        self.ready_sent = true;
        self.prefetched = None;
        Some(LoadEvent::Ready)
    }
}

fn settle_one(fetcher: &dyn FrameFetcher, index: FrameIndex, source: &str) -> FrameOutcome {
    let loaded = fetcher.fetch(source).and_then(|bytes| {
        let img = decode_frame(&bytes)?;
        if !img.is_ready() {
            return Err(ScrollreelError::asset("decoded frame has zero size"));
        }
        Ok(img)
    });
    match loaded {
        Ok(img) => {
            tracing::debug!(%index, width = img.width(), height = img.height(), "frame loaded");
            FrameOutcome::Loaded(img)
        }
        Err(e) => {
            tracing::warn!(%index, source, error = %e, "failed to load frame");
            FrameOutcome::Failed(e.to_string())
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> ScrollreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ScrollreelError::validation(
            "parallel load 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        ScrollreelError::validation(format!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
