//! API Layer
//!
//! HTTP client for the Wayfarer backend.

pub mod client;

pub use client::*;
