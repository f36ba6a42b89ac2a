use std::sync::Arc;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// Decoded still frame, held as a premultiplied RGBA8 pixmap.
///
/// The pixmap is built once when the frame is decoded; painting shares it
/// through an `Arc`, so a frame's pixels exist exactly once in memory.
#[derive(Clone, Debug)]
pub struct FrameImage {
    width: u32,
    height: u32,
    pixmap: Option<Arc<vello_cpu::Pixmap>>,
}

impl FrameImage {
    /// Wrap row-major premultiplied RGBA8 bytes. A zero-sized frame is kept
    /// but never becomes ready.
    pub fn from_premul_rgba8(width: u32, height: u32, bytes: &[u8]) -> ScrollreelResult<Self> {
        if bytes.len() != width as usize * height as usize * 4 {
            return Err(ScrollreelError::asset(format!(
                "frame byte length {} does not match {width}x{height}",
                bytes.len()
            )));
        }
        if width == 0 || height == 0 {
            return Ok(Self {
                width,
                height,
                pixmap: None,
            });
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| ScrollreelError::asset("frame width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| ScrollreelError::asset("frame height exceeds u16"))?;

        let mut may_have_opacities = false;
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| {
                may_have_opacities |= px[3] != 255;
                vello_cpu::peniko::color::PremulRgba8 {
                    r: px[0],
                    g: px[1],
                    b: px[2],
                    a: px[3],
                }
            })
            .collect::<Vec<_>>();
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
        Ok(Self {
            width,
            height,
            pixmap: Some(Arc::new(pixmap)),
        })
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major premultiplied RGBA8; empty when not ready.
    pub fn rgba8_premul(&self) -> &[u8] {
        match self.pixmap.as_deref() {
            Some(pixmap) => pixmap.data_as_u8_slice(),
            None => &[],
        }
    }

    /// Fully decoded with a non-zero natural size, i.e. safe to paint.
    pub fn is_ready(&self) -> bool {
        self.pixmap.is_some()
    }

    /// Image paint sharing this frame's pixmap.
    pub(crate) fn paint(&self) -> Option<vello_cpu::Image> {
        let pixmap = self.pixmap.clone()?;
        Some(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(pixmap),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        })
    }
}

/// Ordered frame slots `0..total`, filled in ascending order while loading.
///
/// A `None` slot is a frame that has not settled yet or failed to load.
#[derive(Clone, Debug)]
pub struct FrameSet {
    slots: Vec<Option<FrameImage>>,
    settled: usize,
    sealed: bool,
}

impl FrameSet {
    pub fn new(total: u32) -> Self {
        Self {
            slots: vec![None; total as usize],
            settled: 0,
            sealed: false,
        }
    }

    /// Number of slots, fixed at construction.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots that have settled (loaded or failed).
    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Settle the next slot. Slots must settle strictly in index order.
    pub(crate) fn settle(
        &mut self,
        index: FrameIndex,
        image: Option<FrameImage>,
    ) -> ScrollreelResult<()> {
        if self.sealed {
            return Err(ScrollreelError::validation(
                "frame set is sealed; no further frames may settle",
            ));
        }
        if index.as_usize() != self.settled {
            return Err(ScrollreelError::validation(format!(
                "frame {index} settled out of order (expected {:03})",
                self.settled
            )));
        }
        let slot = self
            .slots
            .get_mut(index.as_usize())
            .ok_or_else(|| ScrollreelError::validation(format!("frame {index} out of range")))?;
        *slot = image;
        self.settled += 1;
        Ok(())
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }

    /// Image at `index`, if it loaded.
    pub fn get(&self, index: FrameIndex) -> Option<&FrameImage> {
        self.slots.get(index.as_usize()).and_then(Option::as_ref)
    }

    /// Image at `index` only when it can be painted.
    pub fn ready_image(&self, index: FrameIndex) -> Option<&FrameImage> {
        self.get(index).filter(|img| img.is_ready())
    }

    /// Count of slots holding a paintable image.
    pub fn ready_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.as_ref().is_some_and(FrameImage::is_ready))
            .count()
    }
}

/// Load completion counters. Failed frames still count toward `loaded_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loaded_count: u32,
    pub failed_count: u32,
    pub total: u32,
    pub is_complete: bool,
}

impl LoadState {
    pub fn new(total: u32) -> Self {
        Self {
            loaded_count: 0,
            failed_count: 0,
            total,
            is_complete: false,
        }
    }

    /// Fraction of settled frames in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return if self.is_complete { 1.0 } else { 0.0 };
        }
        f64::from(self.loaded_count) / f64::from(self.total)
    }

    /// Progress as a whole percentage for a loading indicator.
    pub fn percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    pub(crate) fn record(&mut self, succeeded: bool) {
        self.loaded_count = self.loaded_count.saturating_add(1).min(self.total);
        if !succeeded {
            self.failed_count = self.failed_count.saturating_add(1).min(self.total);
        }
    }

    pub(crate) fn complete(&mut self) -> ScrollreelResult<()> {
        if self.loaded_count != self.total {
            return Err(ScrollreelError::validation(format!(
                "load completed with {} of {} frames settled",
                self.loaded_count, self.total
            )));
        }
        self.is_complete = true;
        Ok(())
    }

    /// Every frame failed; the player still reaches `Ready` with nothing to paint.
    pub fn all_failed(&self) -> bool {
        self.is_complete && self.total > 0 && self.failed_count == self.total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frame_set.rs"]
mod tests;
