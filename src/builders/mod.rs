pub(crate) mod chrome;
pub(crate) mod flow;
pub(crate) mod primitive;
pub(crate) mod table;
