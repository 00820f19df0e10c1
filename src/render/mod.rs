//! Procedural arc rendering.
//!
//! Wedges are drawn into independent offscreen layers and merged onto a [`canvas::CanvasSurface`]
//! in wedge-index order.

/// Wedge layout and the concentric-arc renderer.
pub mod arc;
/// Drawing surface that layers are composited onto.
pub mod canvas;
/// Premultiplied source-over compositing.
pub mod composite;
