pub(crate) mod animator;
pub(crate) mod pose;
pub(crate) mod scheduler;
pub(crate) mod tween;
