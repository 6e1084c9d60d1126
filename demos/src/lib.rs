//! Shared helpers for the slicewise demos.

pub mod common;
