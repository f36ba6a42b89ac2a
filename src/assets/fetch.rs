use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Fetches the encoded bytes behind a frame source.
///
/// Implementations must be shareable across threads so the parallel load
/// strategy can fan requests out on a worker pool.
pub trait FrameFetcher: Send + Sync {
    fn fetch(&self, source: &str) -> ScrollreelResult<Vec<u8>>;
}

impl<F> FrameFetcher for F
where
    F: Fn(&str) -> ScrollreelResult<Vec<u8>> + Send + Sync,
{
    fn fetch(&self, source: &str) -> ScrollreelResult<Vec<u8>> {
        self(source)
    }
}

/// Serves same-origin style sources (`/dir/frame_000.jpg`) from a local root directory.
#[derive(Clone, Debug)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a source onto a path under the root. Sources are origin-relative, so a
    /// leading `/` is accepted; `..` segments are not.
    pub fn resolve(&self, source: &str) -> ScrollreelResult<PathBuf> {
        let rel = normalize_source_path(source)?;
        Ok(self.root.join(Path::new(&rel)))
    }
}

impl FrameFetcher for DirFetcher {
    fn fetch(&self, source: &str) -> ScrollreelResult<Vec<u8>> {
        let path = self.resolve(source)?;
        let bytes =
            std::fs::read(&path).with_context(|| format!("read frame '{}'", path.display()))?;
        Ok(bytes)
    }
}

/// Normalize a frame source into a relative, forward-slash path.
pub fn normalize_source_path(source: &str) -> ScrollreelResult<String> {
    let s = source.replace('\\', "/");
    let s = s.split(['?', '#']).next().unwrap_or_default();
    if s.is_empty() {
        return Err(ScrollreelError::validation("frame source must be non-empty"));
    }
    if s.contains("://") {
        return Err(ScrollreelError::validation(
            "frame sources must be origin-relative paths",
        ));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ScrollreelError::validation(
                "frame sources must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ScrollreelError::validation(
            "frame source must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
