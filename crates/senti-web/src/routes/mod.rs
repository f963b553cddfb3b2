//! Route handlers.

pub mod analyze;
pub mod form;
pub mod health;
