pub(crate) mod dom;
pub(crate) mod loader;
