use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::atlas::ShelfPacker;
use super::common::{
    create_quad_pipeline, create_viewport_ubo, viewport_layout_entry, write_viewport_ubo,
    InstanceBuffer, QuadGeometry,
};

const LABEL: &str = "rollclock text";
const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1;

#[derive(Debug, Copy, Clone)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// A glyph the layout placed, in physical pixels.
#[derive(Debug, Copy, Clone)]
struct PlacedGlyph {
    key: GlyphRasterConfig,
    x: f32,
    y: f32,
    w: usize,
    h: usize,
}

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are laid out and rasterized at physical size (logical size times
/// the scale factor) so they stay sharp on HiDPI displays, then placed back
/// in logical space. Rasterized glyphs live in a 2048 × 2048 R8Unorm atlas
/// keyed by `GlyphRasterConfig`; the digit set fits many times over, so the
/// cache is never evicted. A full atlas drops new glyphs with one warning.
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    atlas_texture: Option<wgpu::Texture>,
    packer: ShelfPacker,
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    quad: Option<QuadGeometry>,
    instances: InstanceBuffer,
    staging: Vec<GlyphInstance>,
    placed: Vec<PlacedGlyph>,

    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group: None,
            viewport_ubo: None,
            atlas_texture: None,
            packer: ShelfPacker::new(ATLAS_SIZE, GLYPH_PADDING),
            glyph_cache: HashMap::new(),
            quad: None,
            instances: InstanceBuffer::default(),
            staging: Vec::new(),
            placed: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every `DrawCmd::Text` in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        self.ensure_pipeline(ctx);
        let scale = ctx.scale_factor;
        self.staging.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };
            if cmd.text.is_empty() || cmd.color.a <= 0.0 || cmd.size.is_nan() || cmd.size <= 0.0 {
                continue;
            }
            let Some(font) = font_system.get(cmd.font) else {
                log::warn!("unknown {:?}, skipping text {:?}", cmd.font, cmd.text);
                continue;
            };

            self.layout.reset(&LayoutSettings {
                x: cmd.origin.x * scale,
                y: cmd.origin.y * scale,
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

            // Snapshot so the layout borrow ends before the atlas is mutated.
            self.placed.clear();
            self.placed.extend(
                self.layout
                    .glyphs()
                    .iter()
                    .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
                    .map(|g| PlacedGlyph { key: g.key, x: g.x, y: g.y, w: g.width, h: g.height }),
            );

            let color = cmd.color.to_array();
            for i in 0..self.placed.len() {
                let g = self.placed[i];
                let Some(cached) = self.cached_glyph(ctx, font, g.key) else { continue };
                self.staging.push(GlyphInstance {
                    dst_min: [g.x / scale, g.y / scale],
                    dst_max: [(g.x + g.w as f32) / scale, (g.y + g.h as f32) / scale],
                    uv_min: cached.uv_min,
                    uv_max: cached.uv_max,
                    color,
                });
            }
        }

        if self.staging.is_empty() {
            return;
        }

        let quad = self.quad.get_or_insert_with(|| QuadGeometry::new(ctx, LABEL));
        let (Some(pipeline), Some(bind_group), Some(ubo)) =
            (self.pipeline.as_ref(), self.bind_group.as_ref(), self.viewport_ubo.as_ref())
        else {
            return;
        };

        write_viewport_ubo(ctx, ubo);
        let count = self.staging.len() as u32;
        let instance_vbo = self.instances.upload(ctx, "rollclock text instance vbo", &self.staging);

        let mut rpass = target.begin_load_pass("rollclock text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        quad.draw_instanced(&mut rpass, instance_vbo, count);
    }

    // ── atlas ──────────────────────────────────────────────────────────────

    /// Cached atlas entry, rasterizing and uploading on first use.
    fn cached_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        font: &fontdue::Font,
        key: GlyphRasterConfig,
    ) -> Option<CachedGlyph> {
        if let Some(cached) = self.glyph_cache.get(&key) {
            return Some(*cached);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }
        let (w, h) = (metrics.width as u32, metrics.height as u32);

        let was_full = self.packer.is_full();
        let Some(slot) = self.packer.allocate(w, h) else {
            match rejection(was_full, &self.packer) {
                Rejection::JustFilled => log::warn!(
                    "glyph atlas is full ({ATLAS_SIZE}×{ATLAS_SIZE}); new glyphs are dropped"
                ),
                Rejection::AlreadyFull => {}
                Rejection::Oversized => log::debug!("glyph {w}×{h} is larger than the atlas"),
            }
            return None;
        };
        let atlas = self.atlas_texture.as_ref()?;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: slot.x, y: slot.y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let (uv_min, uv_max) = self.packer.uv(slot, w, h);
        let cached = CachedGlyph { uv_min, uv_max };
        self.glyph_cache.insert(key, cached);
        Some(cached)
    }

    // ── lazy init ──────────────────────────────────────────────────────────

    /// Builds pipeline, atlas and bindings together; a new surface format
    /// rebuilds all of them and empties the glyph cache.
    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }
        log::debug!("building text pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rollclock text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("rollclock text bgl"),
            entries: &[
                viewport_layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let atlas = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("rollclock text atlas"),
            size: wgpu::Extent3d {
                width: self.packer.size(),
                height: self.packer.size(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("rollclock text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let viewport_ubo = create_viewport_ubo(ctx, "rollclock text viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("rollclock text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        self.pipeline = Some(create_quad_pipeline(ctx, LABEL, &shader, &bgl, GlyphInstance::layout()));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(viewport_ubo);
        self.atlas_texture = Some(atlas);
        self.packer.reset();
        self.glyph_cache.clear();
    }
}

/// Why the packer refused a glyph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Rejection {
    /// This allocation filled the atlas.
    JustFilled,
    AlreadyFull,
    /// The glyph cannot fit even an empty atlas.
    Oversized,
}

fn rejection(was_full: bool, packer: &ShelfPacker) -> Rejection {
    match (was_full, packer.is_full()) {
        (true, _) => Rejection::AlreadyFull,
        (false, true) => Rejection::JustFilled,
        (false, false) => Rejection::Oversized,
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_stride_matches_layout() {
        assert_eq!(std::mem::size_of::<GlyphInstance>(), 48);
    }

    // ── atlas overflow ────────────────────────────────────────────────────

    #[test]
    fn atlas_overflow_is_reported_once() {
        let mut packer = ShelfPacker::new(16, 1);
        assert!(packer.allocate(14, 14).is_some());

        assert!(packer.allocate(14, 2).is_none());
        assert_eq!(rejection(false, &packer), Rejection::JustFilled);

        let was_full = packer.is_full();
        assert!(packer.allocate(1, 1).is_none());
        assert_eq!(rejection(was_full, &packer), Rejection::AlreadyFull);
    }

    #[test]
    fn oversized_glyph_does_not_fill_the_atlas() {
        let mut packer = ShelfPacker::new(16, 1);
        assert!(packer.allocate(20, 4).is_none());
        assert_eq!(rejection(false, &packer), Rejection::Oversized);
        assert!(packer.allocate(4, 4).is_some());
    }
}
