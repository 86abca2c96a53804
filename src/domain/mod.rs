//! Core domain types and logic.

pub mod record;
pub mod summary;
pub mod seed;
pub mod error;
