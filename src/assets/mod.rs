pub(crate) mod decode;
pub(crate) mod fetch;
pub(crate) mod frame_set;
pub(crate) mod loader;
pub(crate) mod naming;
