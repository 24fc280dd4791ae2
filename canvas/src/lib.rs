//! Drawing core for the handwritten-math board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! raster drawing surface and everything that mutates it: translating raw
//! pointer events into strokes, snapshot-based undo/redo, the toolbar's tool
//! state, and placement of result labels over the ink. The host layer wires
//! DOM events to the engine, blits the bitmap, and positions label elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | RGBA bitmap, stroke rasterization, snapshots |
//! | [`history`] | Undo/redo stacks of snapshots |
//! | [`input`] | Tool state, pointer events, and the stroke state machine |
//! | [`overlay`] | Result labels and their placement |
//! | [`geom`] | Points and ink bounds |
//! | [`color`] | Swatch parsing and palette |
//! | [`export`] | PNG / data-URL encoding of snapshots |
//! | [`render`] | Blitting the bitmap to a canvas element |
//! | [`consts`] | Shared numeric constants (brush limits, label placement) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod export;
pub mod geom;
pub mod history;
pub mod input;
pub mod overlay;
pub mod render;
pub mod surface;
