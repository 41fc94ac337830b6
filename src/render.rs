pub(crate) mod shapes;
pub(crate) mod target;
