use crate::foundation::core::Vec2;

/// Lower clamp bound for content and overlay zoom.
pub const CONTENT_SCALE_MIN: f64 = 0.1;
/// Upper clamp bound for content and overlay zoom.
pub const CONTENT_SCALE_MAX: f64 = 3.0;
/// Lower clamp bound for the overlay height percentage.
pub const OVERLAY_HEIGHT_MIN: f64 = 10.0;
/// Upper clamp bound for the overlay height percentage.
pub const OVERLAY_HEIGHT_MAX: f64 = 60.0;

const DEFAULT_OVERLAY_HEIGHT_PERCENT: f64 = 24.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Which way the silhouette faces; mirrors/rotates the composited output.
pub enum Orientation {
    /// Facing left (default).
    #[default]
    Left,
    /// Facing right.
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Viewing mode; selects the rotation rule and the vertical mask anchor.
pub enum ViewMode {
    /// Side view (default).
    #[default]
    Side,
    /// Top-down view.
    Top,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Vertical anchor of the mask box, derived from orientation and view mode.
pub enum MaskPosition {
    /// Anchored near the top edge (default).
    #[default]
    Top,
    /// Anchored at the vertical middle.
    Middle,
    /// Anchored near the bottom edge.
    Bottom,
}

impl MaskPosition {
    /// Derive the anchor for an (orientation, view mode) pair.
    ///
    /// Side view splits by orientation; top view is always `Middle`.
    pub fn for_view(orientation: Orientation, view_mode: ViewMode) -> Self {
        match view_mode {
            ViewMode::Side => match orientation {
                Orientation::Left => Self::Top,
                Orientation::Right => Self::Bottom,
            },
            ViewMode::Top => Self::Middle,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// What is drawn before the mask clip.
pub enum ContentMode {
    /// The preset content raster (default).
    #[default]
    Image,
    /// The user-uploaded raster, falling back to the preset when absent.
    Upload,
    /// A fixed translucent color fill.
    Color,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// All parameters that affect the rendered frame.
///
/// A single instance lives for the process lifetime, mutated in place by
/// UI collaborators and read by [`crate::render_preview`]. Every mutator
/// raises an internal repaint flag; the embedding loop drains it via
/// [`ViewState::take_repaint`] and decides batching policy.
///
/// `position` is never set independently: [`ViewState::set_orientation`]
/// and [`ViewState::set_view_mode`] recompute it via
/// [`MaskPosition::for_view`]. Scale and overlay-height setters clamp to
/// their documented ranges rather than rejecting out-of-range input; all
/// other setters are total.
pub struct ViewState {
    orientation: Orientation,
    view_mode: ViewMode,
    position: MaskPosition,
    content_mode: ContentMode,
    content_scale: f64,
    content_offset: Vec2,
    mask_offset: Vec2,
    overlay_scale: f64,
    overlay_offset: Vec2,
    overlay_height_percent: f64,
    #[serde(skip)]
    repaint: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            orientation: Orientation::Left,
            view_mode: ViewMode::Side,
            position: MaskPosition::Top,
            content_mode: ContentMode::Image,
            content_scale: 1.0,
            content_offset: Vec2::ZERO,
            mask_offset: Vec2::ZERO,
            overlay_scale: 1.0,
            overlay_offset: Vec2::ZERO,
            overlay_height_percent: DEFAULT_OVERLAY_HEIGHT_PERCENT,
            // First frame is due as soon as both rasters arrive.
            repaint: true,
        }
    }
}

impl ViewState {
    /// Documented startup defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set orientation and recompute the derived mask anchor.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.position = MaskPosition::for_view(self.orientation, self.view_mode);
        self.repaint = true;
    }

    /// Current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Set view mode and recompute the derived mask anchor.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
        self.position = MaskPosition::for_view(self.orientation, self.view_mode);
        self.repaint = true;
    }

    /// Derived vertical mask anchor.
    pub fn position(&self) -> MaskPosition {
        self.position
    }

    /// Current content mode.
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Select what is drawn before the mask clip.
    pub fn set_content_mode(&mut self, content_mode: ContentMode) {
        self.content_mode = content_mode;
        self.repaint = true;
    }

    /// Uniform zoom applied to the fitted content image.
    pub fn content_scale(&self) -> f64 {
        self.content_scale
    }

    /// Set content zoom, clamped to `[CONTENT_SCALE_MIN, CONTENT_SCALE_MAX]`.
    pub fn set_content_scale(&mut self, scale: f64) {
        self.content_scale = clamp_scale(scale);
        self.repaint = true;
    }

    /// Content pan in base (unscaled) units.
    pub fn content_offset(&self) -> Vec2 {
        self.content_offset
    }

    /// Set content pan in base units.
    pub fn set_content_offset(&mut self, offset: Vec2) {
        self.content_offset = offset;
        self.repaint = true;
    }

    /// Mask pan relative to its anchor, in base units.
    pub fn mask_offset(&self) -> Vec2 {
        self.mask_offset
    }

    /// Set mask pan in base units.
    pub fn set_mask_offset(&mut self, offset: Vec2) {
        self.mask_offset = offset;
        self.repaint = true;
    }

    /// Zoom of the secondary visual overlay.
    pub fn overlay_scale(&self) -> f64 {
        self.overlay_scale
    }

    /// Set overlay zoom, clamped to `[CONTENT_SCALE_MIN, CONTENT_SCALE_MAX]`.
    pub fn set_overlay_scale(&mut self, scale: f64) {
        self.overlay_scale = clamp_scale(scale);
        self.repaint = true;
    }

    /// Pan of the secondary visual overlay.
    pub fn overlay_offset(&self) -> Vec2 {
        self.overlay_offset
    }

    /// Set overlay pan.
    pub fn set_overlay_offset(&mut self, offset: Vec2) {
        self.overlay_offset = offset;
        self.repaint = true;
    }

    /// Overlay height as a percentage of its container.
    pub fn overlay_height_percent(&self) -> f64 {
        self.overlay_height_percent
    }

    /// Set overlay height, clamped to `[OVERLAY_HEIGHT_MIN, OVERLAY_HEIGHT_MAX]`.
    pub fn set_overlay_height_percent(&mut self, percent: f64) {
        self.overlay_height_percent = percent.clamp(OVERLAY_HEIGHT_MIN, OVERLAY_HEIGHT_MAX);
        self.repaint = true;
    }

    /// Raise the repaint flag without changing any field.
    ///
    /// Used by collaborators whose events invalidate the frame without
    /// touching view parameters (surface resize, raster arrival).
    pub fn request_repaint(&mut self) {
        self.repaint = true;
    }

    /// Drain the repaint flag, returning whether a repaint was due.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::replace(&mut self.repaint, false)
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(CONTENT_SCALE_MIN, CONTENT_SCALE_MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/state/model.rs"]
mod tests;
