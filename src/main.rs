//! Trimly Onboarding
//!
//! Onboarding wizard for the Trimly booking assistant, built with Leptos (WASM).
//!
//! # Features
//!
//! - Step-by-step setup: connect accounts, pricing, schedule, policies
//! - Draft/save discipline with explicit clean/dirty tracking
//! - Bearer-token API client for the Trimly profile API
//! - Client-facing booking demo page
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Trimly API over HTTP and treats the
//! authentication provider as an external collaborator.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod forms;
mod pages;
mod state;
mod storage;
mod wizard;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
