//! Core types for NestKV
//!
//! This crate defines the foundational types used throughout the system:
//! - Key: opaque entry identifier
//! - Value: opaque, equality-comparable entry payload
//! - Error: core error type (`NoTransaction`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Key, Value};
