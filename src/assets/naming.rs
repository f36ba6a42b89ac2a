use crate::{
    foundation::core::FrameIndex,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// Source template `{base_dir}/{prefix}_{index:03}.{ext}` for a frame sequence.
///
/// The zero padding is part of the asset contract: exported sequences are named
/// `prefix_000.jpg`, `prefix_001.jpg`, ...
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameNaming {
    /// Directory (URL path) holding the frames, e.g. `/iphone17blackvid_000`.
    pub base_dir: String,
    /// File stem before the `_NNN` index.
    pub prefix: String,
    /// File extension without the dot.
    pub ext: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            base_dir: "/iphone17blackvid_000".to_string(),
            prefix: "iphone17blackvid".to_string(),
            ext: "jpg".to_string(),
        }
    }
}

impl FrameNaming {
    pub fn new(
        base_dir: impl Into<String>,
        prefix: impl Into<String>,
        ext: impl Into<String>,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            prefix: prefix.into(),
            ext: ext.into(),
        }
    }

    pub fn validate(&self) -> ScrollreelResult<()> {
        if self.prefix.is_empty() {
            return Err(ScrollreelError::validation(
                "frame naming prefix must be non-empty",
            ));
        }
        if self.ext.is_empty() || self.ext.starts_with('.') {
            return Err(ScrollreelError::validation(
                "frame naming ext must be non-empty and given without a leading dot",
            ));
        }
        if self.prefix.contains('/') {
            return Err(ScrollreelError::validation(
                "frame naming prefix must not contain '/'",
            ));
        }
        Ok(())
    }

    /// Source for one frame.
    pub fn source(&self, index: FrameIndex) -> String {
        format!(
            "{}/{}_{}.{}",
            self.base_dir.trim_end_matches('/'),
            self.prefix,
            index,
            self.ext
        )
    }

    /// Sources for frames `0..frame_count`, in index order.
    pub fn sources(&self, frame_count: u32) -> Vec<String> {
        (0..frame_count).map(|i| self.source(FrameIndex(i))).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
