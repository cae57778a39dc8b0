//! Wayfarer
//!
//! AI-assisted trip planning frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Prompt-driven itinerary generation
//! - Day-by-day timeline synchronized with a map view
//! - Voice-to-text input for prompts and expenses
//! - Free-text expense logging
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives behind the Wayfarer HTTP API; the client holds
//! only ephemeral UI state re-derived from the last fetch.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Info);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
