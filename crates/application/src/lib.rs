//! Wildcard DNS Application Layer
//!
//! The two engines behind the pipe backend: the [`Resolver`] decides which
//! records answer a query, the [`PipeSession`] speaks the line protocol.
pub mod pipe;
pub mod resolver;

pub use pipe::{PipeError, PipeSession};
pub use resolver::{Reply, Resolver};
