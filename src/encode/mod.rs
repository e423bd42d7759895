pub(crate) mod path;
pub(crate) mod sink;
pub(crate) mod svg;
