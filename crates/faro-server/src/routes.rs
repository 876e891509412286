pub(crate) mod api;
pub(crate) mod global;
pub(crate) mod swagger;
