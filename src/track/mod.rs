pub(crate) mod partition;
pub(crate) mod resolver;
pub(crate) mod sampler;
