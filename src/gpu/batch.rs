use crate::paint::{Fill, PaintSurface};

/// One rect fill, flattened through the transform state it was issued under.
///
/// Layout: 36 bytes, nine tightly packed f32 vertex attributes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadInstance {
    /// Untransformed top-left corner, in surface pixels.
    pub origin: [f32; 2],
    /// Rect extent, in surface pixels.
    pub size: [f32; 2],
    /// Transform rotation about the surface origin, radians.
    pub rotation: f32,
    /// Non-premultiplied sRGB fill.
    pub color: [f32; 4],
}

/// Records paint-surface calls into an instance list for one frame.
///
/// Implements the canvas transform model the renderer expects: a current
/// rotation about the surface origin, compounded by `rotate` and scoped by
/// the save/restore stack. The vertex shader applies the recorded rotation,
/// so instance order alone reproduces painter's-order overlap.
pub struct QuadBatch {
    instances: Vec<QuadInstance>,
    rotation: f64,
    saved: Vec<f64>,
    fill: Fill,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            rotation: 0.0,
            saved: Vec::new(),
            fill: Fill::rgba(0, 0, 0, 1.0),
        }
    }

    /// Drop last frame's instances and reset the transform to identity.
    pub fn begin_frame(&mut self) {
        self.instances.clear();
        self.rotation = 0.0;
        self.saved.clear();
    }

    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }
}

impl Default for QuadBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSurface for QuadBatch {
    fn save(&mut self) {
        self.saved.push(self.rotation);
    }

    fn restore(&mut self) {
        if let Some(rotation) = self.saved.pop() {
            self.rotation = rotation;
        }
    }

    fn rotate(&mut self, radians: f64) {
        self.rotation += radians;
    }

    fn set_fill(&mut self, fill: Fill) {
        self.fill = fill;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.instances.push(QuadInstance {
            origin: [x as f32, y as f32],
            size: [w as f32, h as f32],
            rotation: self.rotation as f32,
            color: self.fill.to_rgba(),
        });
    }
}
