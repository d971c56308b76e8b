pub(crate) mod headless;
pub(crate) mod host;
pub(crate) mod instance;
pub(crate) mod scheduler;
pub(crate) mod sink;
pub(crate) mod timeline;
