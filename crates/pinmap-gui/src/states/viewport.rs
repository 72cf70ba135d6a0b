use pinmap_core::view::ViewTransform;

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Size of the raster behind `texture`.
    pub image_size: Option<[usize; 2]>,
    pub view: ViewTransform,
}

impl ViewportState {
    pub fn new(zoom_step: f64) -> Self {
        Self {
            texture: None,
            image_size: None,
            view: ViewTransform::with_step(zoom_step),
        }
    }
}
