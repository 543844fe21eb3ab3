//! # Postdesk Architecture
//!
//! Postdesk is a **UI-agnostic post composer**: it holds the form for a
//! question or article, normalizes its tags, encodes an optional image and
//! writes the result to a document store. The CLI is one client of the
//! library; a web or desktop front end would drive the same [`api::PostApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, opens the editor, prints status        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One editing session: draft, status line, controller      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - submit: validate, assemble, write, report, reset         │
//! │  - attach: encode image, apply to the right draft version   │
//! │  - list, config                                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Async DocumentStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submission lifecycle
//!
//! A session starts with an empty draft of type `question`. Field edits go
//! straight into the draft. Picking an image starts an asynchronous encode;
//! when it finishes only `image_payload` is written, and only if the draft has
//! not been reset in the meantime (see [`draft`]). Submitting validates,
//! builds a [`model::PostRecord`], calls the store once and publishes a status
//! line. The draft is reset after a successful write and kept as-is after a
//! failed one so the user can retry.
//!
//! ## Logging
//!
//! The library emits `tracing` events and never installs a subscriber; the
//! binary does that.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Document store abstraction and implementations
//! - [`model`]: `PostDraft`, `PostRecord`, `PersistedPost`
//! - [`draft`]: The editing session and its generation tokens
//! - [`tags`]: Tag field parsing
//! - [`image`]: Image to data-URI encoding
//! - [`status`]: The one-shot status line
//! - [`config`]: Configuration file handling
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod editor;
pub mod error;
pub mod image;
pub mod model;
pub mod status;
pub mod store;
pub mod tags;
