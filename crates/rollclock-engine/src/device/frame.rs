/// A single acquired swapchain frame.
///
/// Holding the surface texture blocks acquisition of the next frame, so
/// hand it to [`Gpu::submit`](super::Gpu::submit) within the same callback.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
