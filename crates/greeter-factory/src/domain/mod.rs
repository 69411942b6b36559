//! # Domain Module
//!
//! Core domain types for the greeter.

pub mod errors;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
