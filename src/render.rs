pub(crate) mod color;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod raster;
pub(crate) mod surface;
pub(crate) mod trail;
