//! Applications domain layer

pub mod entities;
