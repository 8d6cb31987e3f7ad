use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, RoundedRectCmd};

use super::common::{
    create_quad_pipeline, create_viewport_ubo, viewport_layout_entry, write_viewport_ubo,
    InstanceBuffer, QuadGeometry,
};

const LABEL: &str = "rollclock rounded_rect";

/// Renderer for `DrawCmd::RoundedRect`.
///
/// One instanced draw per frame; corners are an analytic SDF with a one
/// physical pixel anti-aliased edge.
#[derive(Default)]
pub struct RoundedRectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    quad: Option<QuadGeometry>,
    instances: InstanceBuffer,
    staging: Vec<RoundedRectInstance>,
}

impl RoundedRectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &mut DrawList) {
        self.staging.clear();
        self.staging.extend(draw_list.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::RoundedRect(cmd) => RoundedRectInstance::from_cmd(cmd, ctx.scale_factor),
            _ => None,
        }));
        if self.staging.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let quad = self.quad.get_or_insert_with(|| QuadGeometry::new(ctx, LABEL));

        let (Some(pipeline), Some(bind_group), Some(ubo)) =
            (self.pipeline.as_ref(), self.bind_group.as_ref(), self.viewport_ubo.as_ref())
        else {
            return;
        };

        write_viewport_ubo(ctx, ubo);
        let count = self.staging.len() as u32;
        let instance_vbo = self.instances.upload(ctx, "rollclock rounded_rect instance vbo", &self.staging);

        let mut rpass = target.begin_load_pass("rollclock rounded_rect pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        quad.draw_instanced(&mut rpass, instance_vbo, count);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        log::debug!("building rounded_rect pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rollclock rounded_rect shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/rounded_rect.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("rollclock rounded_rect bgl"),
            entries: &[viewport_layout_entry()],
        });

        let viewport_ubo = create_viewport_ubo(ctx, "rollclock rounded_rect viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("rollclock rounded_rect bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() }],
        });

        self.pipeline = Some(create_quad_pipeline(ctx, LABEL, &shader, &bgl, RoundedRectInstance::layout()));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(viewport_ubo);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (52 bytes):
///
///  offset  0  origin  [f32; 2]   loc 1
///  offset  8  size    [f32; 2]   loc 2
///  offset 16  radii   [f32; 4]   loc 3  (tl, tr, br, bl)
///  offset 32  color   [f32; 4]   loc 4  (premultiplied)
///  offset 48  aa      f32        loc 5  (logical px per physical px)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct RoundedRectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    radii: [f32; 4],
    color: [f32; 4],
    aa: f32,
}

impl RoundedRectInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // radii
        4 => Float32x4, // color
        5 => Float32    // aa
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RoundedRectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// `None` for commands that would draw nothing.
    fn from_cmd(cmd: &RoundedRectCmd, scale_factor: f32) -> Option<Self> {
        let r = cmd.rect.normalized();
        if r.is_empty() || !r.is_finite() || !cmd.color.is_finite() || cmd.color.a <= 0.0 {
            return None;
        }
        let radii = cmd.radii.clamped_to(r.size.x, r.size.y);
        Some(Self {
            origin: [r.origin.x, r.origin.y],
            size: [r.size.x, r.size.y],
            radii: radii.to_array(),
            color: cmd.color.to_array(),
            aa: 1.0 / scale_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};
    use crate::paint::Color;

    fn cmd(rect: Rect, radii: CornerRadii, color: Color) -> RoundedRectCmd {
        RoundedRectCmd { rect, radii, color }
    }

    #[test]
    fn instance_stride_matches_layout() {
        assert_eq!(std::mem::size_of::<RoundedRectInstance>(), 52);
    }

    #[test]
    fn skips_empty_and_transparent() {
        let empty = cmd(Rect::new(0.0, 0.0, 0.0, 10.0), CornerRadii::zero(), Color::WHITE);
        let clear = cmd(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::zero(), Color::TRANSPARENT);
        assert!(RoundedRectInstance::from_cmd(&empty, 1.0).is_none());
        assert!(RoundedRectInstance::from_cmd(&clear, 1.0).is_none());
    }

    #[test]
    fn radii_are_clamped_to_half_extent() {
        let c = cmd(Rect::new(4.0, 8.0, 40.0, 40.0), CornerRadii::all(50.0), Color::WHITE);
        let inst = RoundedRectInstance::from_cmd(&c, 2.0).unwrap();
        assert_eq!(inst.radii, [20.0; 4]);
        assert_eq!(inst.origin, [4.0, 8.0]);
        assert_eq!(inst.aa, 0.5);
    }
}
