pub(crate) mod gamma;
pub(crate) mod model;
pub(crate) mod yuv;
