pub(crate) mod fingerprint;
pub(crate) mod sink;
pub(crate) mod update;
