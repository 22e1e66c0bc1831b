//! Shared utilities.

pub mod alias;
pub mod utm;
