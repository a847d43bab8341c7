//! Typed draw primitives consumed by the external rendering surface.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::effects::Rgb;

/// A filled circle. 8 floats = 32 bytes stride; `_pad` keeps the layout
/// a whole number of vec4s for GPU-side consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center X in world space.
    pub x: f32,
    /// Center Y in world space.
    pub y: f32,
    pub radius: f32,
    /// RGBA, each channel normalized to [0, 1].
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(center: Vec2, radius: f32, color: Rgb, alpha: f32) -> Self {
        let [r, g, b] = color.to_f32();
        Self {
            x: center.x,
            y: center.y,
            radius,
            r,
            g,
            b,
            a: alpha.clamp(0.0, 1.0),
            _pad: 0.0,
        }
    }
}

/// A line segment with width. 12 floats = 48 bytes stride.
/// The engine's own passes emit circles; segments are for driver-side
/// scene dressing drawn through the same buffer (ground lines, guides).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SegmentInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    /// RGBA, each channel normalized to [0, 1].
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: [f32; 3],
}

impl SegmentInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(start: Vec2, end: Vec2, width: f32, color: Rgb, alpha: f32) -> Self {
        let [r, g, b] = color.to_f32();
        Self {
            x0: start.x,
            y0: start.y,
            x1: end.x,
            y1: end.y,
            width,
            r,
            g,
            b,
            a: alpha.clamp(0.0, 1.0),
            _pad: [0.0; 3],
        }
    }
}

/// One frame's worth of draw primitives, in draw order.
/// The consumer draws its own background layers first, then `circles`
/// front to back in push order, then `segments`.
pub struct FrameBuffer {
    pub circles: Vec<CircleInstance>,
    pub segments: Vec<SegmentInstance>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::with_capacity(2048, 32)
    }

    /// Pre-size for an expected per-frame primitive load.
    pub fn with_capacity(circles: usize, segments: usize) -> Self {
        Self {
            circles: Vec::with_capacity(circles),
            segments: Vec::with_capacity(segments),
        }
    }

    pub fn clear(&mut self) {
        self.circles.clear();
        self.segments.clear();
    }

    pub fn push_circle(&mut self, circle: CircleInstance) {
        self.circles.push(circle);
    }

    pub fn push_segment(&mut self, segment: SegmentInstance) {
        self.segments.push(segment);
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.len() as u32
    }

    pub fn segment_count(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Circle data as raw bytes, for upload to a GPU buffer or blit
    /// across a process boundary.
    pub fn circle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }

    pub fn segment_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.segments)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
