//! scrollreel is a scroll-driven frame-sequence player.
//!
//! A sequence of pre-rendered stills is painted to a render surface as the host
//! scrolls, simulating a product-rotation video, while caption layers
//! cross-fade at fixed scroll checkpoints.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`FrameLoader`] fetches and decodes frames in index order, one
//!    settlement per step. Failed frames are logged and counted, never fatal.
//! 2. **Map**: [`map_frame`] turns scroll progress into a [`FrameIndex`];
//!    [`CheckpointTable::map_opacities`] turns it into caption opacities.
//! 3. **Render**: [`Renderer`] contain-fits the frame (with an optional bottom
//!    crop) into the surface and repaints on every frame change and resize.
//!
//! [`Player`] ties the three together behind the `Unmounted -> Loading -> Ready`
//! lifecycle. The host supplies scroll progress, viewport size, frame sources
//! and mount/unmount calls.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded player**: loading advances only when the host pulls the
//!   next [`LoadEvent`], so scroll and resize handling interleave with it freely.
//! - **Premultiplied RGBA8** end-to-end: decoded frames and surface pixels are premultiplied.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod foundation;
mod player;
mod render;
mod timeline;

pub use animation::ease::Ease;
pub use assets::decode::decode_frame;
pub use assets::fetch::{DirFetcher, FrameFetcher, normalize_source_path};
pub use assets::frame_set::{FrameImage, FrameSet, LoadState};
pub use assets::loader::{FrameLoader, FrameOutcome, LoadEvent, LoadStrategy};
pub use assets::naming::FrameNaming;
pub use foundation::core::{Affine, FrameIndex, Rect, Rgba8Premul, Vec2, Viewport};
pub use foundation::error::{ScrollreelError, ScrollreelResult};
pub use player::config::{PlayerConfig, RenderGate};
pub use player::overlay::{OverlayFade, OverlayOpacity};
pub use player::machine::{LoadTicket, Phase, Player};
pub use player::scroll_lock::{NoScrollLock, ScrollLock, ScrollLockFlag};
pub use render::fit::{ContainFit, validate_retain_fraction};
pub use render::renderer::{RenderSettings, Renderer};
pub use render::surface::{FrameRgba, RenderSurface};
pub use timeline::mapper::{CaptionLayer, CaptionOpacities, CheckpointTable, OpacityTrack, map_frame};
pub use timeline::scroll::ScrollRegion;
