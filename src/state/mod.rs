pub(crate) mod piece;
pub(crate) mod sliced;
