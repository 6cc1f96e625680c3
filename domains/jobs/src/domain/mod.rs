//! Jobs domain layer: document fields and listing rules

pub mod entities;
pub mod listing;
