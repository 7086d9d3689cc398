//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
mod site;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
