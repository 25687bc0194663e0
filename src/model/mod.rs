pub(crate) mod color;
pub(crate) mod shape;
pub(crate) mod slide;
pub(crate) mod theme;
