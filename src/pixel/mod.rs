pub(crate) mod batch;
pub(crate) mod codec;
pub(crate) mod format;
pub(crate) mod layout;
