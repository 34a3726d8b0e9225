//! Application layer: the order cycle and its steps.
//!
//! [`session::Session`] drives one cycle through the builder, the summary,
//! payment and finally the [`processor::OrderProcessor`], which prepares
//! each ordered item on its own `tokio` task and waits for them under a
//! single deadline.

pub mod builder;
pub mod payment;
pub mod processor;
mod prompt;
pub mod session;
pub mod summary;
