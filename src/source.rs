pub(crate) mod dir;
pub(crate) mod model;
