//! Command resolution and execution.
//!
//! `registry` holds one generation's command table, `grammar` parses an
//! argument vector against it, `execution` runs the resolved command and
//! `router` turns its result into an outcome. `dispatcher` drives the whole
//! pipeline across both generations.

pub mod dispatcher;
pub mod execution;
pub mod grammar;
pub mod lifecycle;
pub mod registry;
pub mod router;
pub mod workaround;

#[cfg(test)]
pub(crate) mod testing;
