//! Shared utilities and pure functions for typenv
//!
//! This crate provides the grammar checks the typed accessors validate raw
//! values with, plus the tracing setup used by binaries. Everything in
//! `validators` is pure and side-effect free.

pub mod tracing;
pub mod validators;

pub use validators::*;
