//! # textscan
//!
//! A small library for scanning plain text: triple-run finding, letter-only
//! normalization, and palindrome peeling.
//!
//! The scanning passes live in the [scan] module. The [config] module loads
//! the built-in sample strings (and user overrides) consumed by the
//! demonstration binary.

pub mod config;
pub mod scan;
