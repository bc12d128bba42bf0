pub(crate) mod constants;
pub(crate) mod source;
pub(crate) mod stream;
