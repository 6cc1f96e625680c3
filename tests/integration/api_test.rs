//! API endpoint integration tests
//!
//! Drives the composed router over the in-memory document store: jobs,
//! applications, sessions and cross-cutting invariants.

#![allow(dead_code)]

mod applications;
mod common;
mod invariants;
mod jobs;
mod sessions;
