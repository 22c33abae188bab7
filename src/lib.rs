//! Maskview is an image-compositing preview core.
//!
//! Given a mutable view state (orientation, pan/zoom, content mode) and two
//! rasters (a content image and an alpha-bearing silhouette mask), maskview
//! deterministically composites a single frame onto a resizable output
//! surface. The pipeline accounts for device pixel ratio, orientation-driven
//! 180-degree rotation, aspect-preserving cover fit, and destination-in mask
//! clipping.
//!
//! # Pipeline overview
//!
//! 1. **Mutate**: UI collaborators write [`ViewState`] fields; every mutator
//!    raises a repaint flag.
//! 2. **Gate**: the first frame waits until both rasters in
//!    [`PreviewAssets`] have arrived; early calls are silent no-ops.
//! 3. **Render**: [`render_preview`] (or [`Previewer::render_if_needed`])
//!    re-executes the full compositing pipeline into the
//!    [`OutputSurface`] backing buffer, synchronously, one frame per call.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rendering the same inputs twice produces
//!   byte-identical buffers.
//! - **No IO in the renderer**: decoding happens up front in
//!   [`decode_image`] / [`rasterize_svg`]; the renderer only reads prepared
//!   premultiplied RGBA8.
//! - **Premultiplied RGBA8** end-to-end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod render;
mod state;

pub use assets::decode::{decode_image, parse_svg, rasterize_svg};
pub use assets::raster::{PreviewAssets, Raster};
pub use foundation::core::{Affine, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{PreviewError, PreviewResult};
pub use render::context::{CompositeOp, Context2d};
pub use render::pipeline::Previewer;
pub use render::preview::{BASE_VIEW_WIDTH, cover_fit, mask_box, render_preview};
pub use render::surface::OutputSurface;
pub use state::model::{
    CONTENT_SCALE_MAX, CONTENT_SCALE_MIN, ContentMode, MaskPosition, OVERLAY_HEIGHT_MAX,
    OVERLAY_HEIGHT_MIN, Orientation, ViewMode, ViewState,
};
