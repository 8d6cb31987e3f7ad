//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers, atlas).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.
//! - Colors are linear premultiplied; the surface is sRGB where available.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::rounded_rect::RoundedRectRenderer;
pub use shapes::text::TextRenderer;
