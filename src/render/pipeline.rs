use crate::{
    assets::raster::{PreviewAssets, Raster},
    render::preview::render_preview,
    render::surface::OutputSurface,
    state::model::ViewState,
};

/// Top-level coordinator: the explicit "state changed -> render" loop.
///
/// Owns the single [`ViewState`] instance, the raster store and the output
/// surface. Collaborator events (control mutations, raster arrival, layout
/// resize) all funnel through here and raise the repaint flag; the
/// embedding loop calls [`Previewer::render_if_needed`] at whatever cadence
/// it likes — immediate per event or coalesced.
#[derive(Debug, Default)]
pub struct Previewer {
    state: ViewState,
    assets: PreviewAssets,
    surface: OutputSurface,
}

impl Previewer {
    /// Previewer with documented default state and an empty asset store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutate the view state; setters raise the repaint flag themselves.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Read the raster store.
    pub fn assets(&self) -> &PreviewAssets {
        &self.assets
    }

    /// Read the output surface (composited pixels, physical size).
    pub fn surface(&self) -> &OutputSurface {
        &self.surface
    }

    /// Preset content raster finished decoding.
    pub fn set_content_raster(&mut self, raster: Raster) {
        self.assets.set_content(raster);
        self.state.request_repaint();
    }

    /// Silhouette mask raster finished decoding.
    pub fn set_mask_raster(&mut self, raster: Raster) {
        self.assets.set_mask(raster);
        self.state.request_repaint();
    }

    /// A user upload finished decoding.
    pub fn set_upload_raster(&mut self, raster: Raster) {
        self.assets.set_upload(raster);
        self.state.request_repaint();
    }

    /// Discard the uploaded raster.
    pub fn clear_upload_raster(&mut self) {
        self.assets.clear_upload();
        self.state.request_repaint();
    }

    /// Layout produced a new logical size for the surface.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64) {
        self.surface.set_logical_size(logical_width, logical_height);
        self.state.request_repaint();
    }

    /// The environment reported a new device pixel ratio.
    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.surface.set_device_pixel_ratio(dpr);
        self.state.request_repaint();
    }

    /// Whether both gating rasters have arrived.
    pub fn is_ready(&self) -> bool {
        self.assets.is_ready()
    }

    /// Render one frame if a repaint is due and the readiness gate is open.
    ///
    /// Returns whether a frame was composited. Draining the flag while the
    /// gate is closed is harmless: raster arrival raises it again.
    pub fn render_if_needed(&mut self) -> bool {
        if !self.state.take_repaint() {
            return false;
        }
        if !self.assets.is_ready() {
            tracing::debug!("render skipped: rasters not ready");
            return false;
        }
        render_preview(&self.state, &self.assets, &mut self.surface);
        true
    }

    /// Render one frame unconditionally (preconditions inside the renderer
    /// still apply) and drain any pending repaint.
    pub fn render_now(&mut self) {
        let _ = self.state.take_repaint();
        render_preview(&self.state, &self.assets, &mut self.surface);
    }
}
