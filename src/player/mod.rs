pub(crate) mod config;
pub(crate) mod machine;
pub(crate) mod overlay;
pub(crate) mod scroll_lock;
