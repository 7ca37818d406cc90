//! Rotom Core
//!
//! Core domain types, traits, and error handling for the Rotom Pokédex
//! gateway. This crate has minimal dependencies and defines the shared
//! vocabulary used across all other crates.

pub mod compare;
pub mod error;
pub mod pokemon;
pub mod ports;
pub mod resource;
pub mod typing;

pub use error::{Error, Result};
pub use resource::ResourceKind;
