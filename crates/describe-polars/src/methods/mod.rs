//! Summary method implementations

pub(crate) mod quantile;
