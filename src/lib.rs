//! Lector: Project Gutenberg EPUB reader core and delivery proxy
//!
//! The library half holds the reader's application logic: the Gutendex
//! catalog client, the session controller owning all reader state, the
//! annotation store and the bridge to an external EPUB rendering engine.
//! The binary half is a small axum server relaying EPUB downloads around
//! cross-origin restrictions (`GET /proxy-epub?url=...`).

pub mod annotations;
pub mod catalog;
pub mod config;
pub mod error;
pub mod reader;
pub mod routes;
pub mod state;
