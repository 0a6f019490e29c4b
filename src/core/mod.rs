//! Core library components.
//!
//! Address parsing, envelope encryption, the env codec and the flows that
//! tie them to a blob store.

#[cfg(feature = "aws")]
pub(crate) mod aws;
pub mod cipher;
pub mod constants;
pub mod env;
pub mod flow;
pub mod location;
pub mod settings;
pub mod store;
