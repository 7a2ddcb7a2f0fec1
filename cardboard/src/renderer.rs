//! [`Renderer`] owns the surface and the shared quad pipeline, and
//! sequences every frame as `clear` → `draw`* → `present`.

use std::borrow::Cow;
use std::path::Path;

use glam::Mat4;

use crate::drawable::QUAD_INDICES;
use crate::{Color, Drawable, Error, Wgpu};

/// Monotonic frame and draw-call counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames presented so far.
    pub frames: u64,
    /// Indexed draws recorded so far, across all frames.
    pub draw_calls: u64,
}

/// A frame between `clear` and `present`: the acquired swapchain image and
/// the encoder collecting this frame's passes.
struct FrameInFlight {
    surface_tex: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    encoder: wgpu::CommandEncoder,
}

/// A wrapper over GPU state, the window surface, and the quad pipeline.
pub struct Renderer {
    pub gpu: Wgpu,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    globals_buf: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    locals_layout: wgpu::BindGroupLayout,
    stats: RenderStats,
    frame: Option<FrameInFlight>,
}

impl Renderer {
    /// Create a new Renderer with a full set of GPU resources, a surface,
    /// and the surface's size in pixels.
    pub fn with_gpu(width: u32, height: u32, gpu: Wgpu, surface: wgpu::Surface<'static>) -> Self {
        let width = if width == 0 { 320 } else { width };
        let height = if height == 0 { 240 } else { height };
        let swapchain_capabilities = surface.get_capabilities(gpu.adapter());
        let swapchain_format = swapchain_capabilities.formats[0];

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: swapchain_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: swapchain_capabilities.alpha_modes[0],
            view_formats: vec![swapchain_format],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);

        let shader = gpu
            .device()
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: None,
                source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("quad.wgsl"))),
            });

        let globals_layout =
            gpu.device()
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("globals"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });
        let locals_layout =
            gpu.device()
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("locals"),
                    entries: &[
                        // the per-quad model matrix
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: None,
                            },
                            count: None,
                        },
                        // the quad's texture
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
                        // and its sampler
                        wgpu::BindGroupLayoutEntry {
                            binding: 2,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });
        let pipeline_layout = gpu
            .device()
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: None,
                bind_group_layouts: &[&globals_layout, &locals_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device()
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("quad pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_main",
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<crate::Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x3,
                                offset: 0,
                                shader_location: 0,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: std::mem::size_of::<[f32; 3]>() as u64,
                                shader_location: 1,
                            },
                        ],
                    }],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: swapchain_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            });

        let globals_buf = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Mat4>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });

        let renderer = Self {
            gpu,
            surface,
            config,
            pipeline,
            globals_buf,
            globals_bind_group,
            locals_layout,
            stats: RenderStats::default(),
            frame: None,
        };
        renderer.write_projection();
        renderer
    }

    /// Screen-space projection: origin at the top left, y down, in pixels.
    fn write_projection(&self) {
        let proj = Mat4::orthographic_rh(
            0.0,
            self.config.width as f32,
            self.config.height as f32,
            0.0,
            -1.0,
            1.0,
        );
        self.gpu
            .queue()
            .write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&proj));
    }

    /// Reconfigure the surface and projection after a window resize.
    pub fn resize_surface(&mut self, w: u32, h: u32) {
        if w == 0 || h == 0 {
            return;
        }
        self.config.width = w;
        self.config.height = h;
        self.surface.configure(self.gpu.device(), &self.config);
        self.write_projection();
    }

    /// The surface size in pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// The frame and draw-call counters.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Begin a frame (if one isn't already open) and clear it to `color`.
    pub fn clear(&mut self, color: Color) {
        if self.frame.is_none() {
            let surface_tex = self
                .surface
                .get_current_texture()
                .expect("Failed to acquire next swap chain texture");
            let view = surface_tex.texture.create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.config.view_formats[0]),
                ..Default::default()
            });
            let encoder = self
                .gpu
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
            self.frame = Some(FrameInFlight {
                surface_tex,
                view,
                encoder,
            });
        }
        let frame = self.frame.as_mut().unwrap();
        frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.into()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });
    }

    /// Record one draw of `quad` into the open frame, uploading its model
    /// matrix first so the GPU sees the transform as of this call.
    ///
    /// Quads paint in call order; calling outside a frame is a logged no-op.
    pub fn draw(&mut self, quad: &Drawable) {
        if self.frame.is_none() {
            log::warn!("draw() outside a frame; call clear() first");
            return;
        }
        self.gpu
            .queue()
            .write_buffer(&quad.model_buf, 0, bytemuck::bytes_of(&quad.model));
        let frame = self.frame.as_mut().unwrap();
        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quad"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_bind_group(1, &quad.bind_group, &[]);
            rpass.set_vertex_buffer(0, quad.vertex_buf.slice(..));
            rpass.set_index_buffer(quad.index_buf.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
        }
        self.stats.draw_calls += 1;
    }

    /// Submit the open frame's passes and present the swapchain image.
    pub fn present(&mut self) {
        let Some(frame) = self.frame.take() else {
            log::warn!("present() without an open frame");
            return;
        };
        self.gpu.queue().submit(Some(frame.encoder.finish()));
        frame.surface_tex.present();
        self.stats.frames += 1;
    }

    /// Creates a texture on the renderer's GPU from RGBA8 pixel data.
    pub fn create_texture(
        &self,
        image: &[u8],
        format: wgpu::TextureFormat,
        (width, height): (u32, u32),
        label: Option<&str>,
    ) -> wgpu::Texture {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = self.gpu.device().create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.gpu.queue().write_texture(
            texture.as_image_copy(),
            image,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );
        texture
    }

    /// Decode a PNG and upload it, returning the texture and its pixel size.
    pub fn load_texture(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(wgpu::Texture, (u32, u32)), Error> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let size = img.dimensions();
        let texture = self.create_texture(
            &img,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            size,
            path.to_str(),
        );
        Ok((texture, size))
    }

    /// Bundle a texture into a [`Drawable`] quad of the given pixel size.
    pub fn create_quad(&self, texture: wgpu::Texture, size: (u32, u32)) -> Drawable {
        Drawable::new(&self.gpu, &self.locals_layout, texture, size)
    }

    /// Load an image and make a quad sized to it.
    pub fn load_quad(&self, path: impl AsRef<Path>) -> Result<Drawable, Error> {
        let (texture, size) = self.load_texture(path)?;
        Ok(self.create_quad(texture, size))
    }
}
