//! Domain models

pub mod transaction;
