//! HTTP handlers for the Sessions domain

pub mod sessions;
