//! Handwritten-math board: session state and the recognition client.
//!
//! The drawing itself (bitmap, strokes, undo/redo, labels) lives in the
//! `canvas` crate. This crate wraps it in a [`session::Session`] that adds
//! the variable binding table, routes toolbar commands, and talks to the
//! recognition service.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Board session: dispatch, submit, reset |
//! | [`recognize`] | `Recognizer` trait and the HTTP client |
//! | [`bindings`] | Variable table sent with each request |
//! | [`toolbar`] | Toolbar commands and view model |
//! | [`config`] | Environment-driven configuration |

pub mod bindings;
pub mod config;
pub mod recognize;
pub mod session;
pub mod toolbar;
