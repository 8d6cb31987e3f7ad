//! wgpu device, queue and per-window surface.
//!
//! One `Gpu` per window: it owns the surface bound to that window, picks a
//! format and alpha mode from `GpuInit`, and hands out one `GpuFrame` per
//! redraw.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
