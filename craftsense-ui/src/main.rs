//! CraftSense Admin
//!
//! Artisan marketplace dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Animated stat cards
//! - Revenue, regional and product charts on canvas
//! - Workshop table and creation form with toast feedback
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is generated in the browser once per page load by the
//! `craftsense` core crate.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
