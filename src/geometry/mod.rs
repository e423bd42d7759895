pub(crate) mod curve;
pub(crate) mod layout;
pub(crate) mod sample;
