pub(crate) mod background;
pub(crate) mod backend;
pub(crate) mod compose;
pub(crate) mod cpu;
pub(crate) mod text;
