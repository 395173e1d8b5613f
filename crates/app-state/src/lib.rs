//! Application state configuration for Diary Commons
//!
//! Server state is owned by an external query client. This crate carries
//! the default options the application hands to it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod query;

pub use query::{
    MutationDefaults, QueryClientConfig, QueryConfigError, QueryDefaults, RetryPolicy,
};
