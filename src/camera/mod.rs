pub(crate) mod animator;
pub(crate) mod catmull;
pub(crate) mod cloud;
pub(crate) mod hermite;
pub(crate) mod path;
pub(crate) mod policy;
