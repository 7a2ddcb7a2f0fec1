//! The renderer-facing resource bundle for one textured quad.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use crate::{Transform, Wgpu};

/// One corner of a quad: a position and a texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

/// Index layout for every quad: two triangles sharing the 1–3 diagonal.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// The four corners of a `w`×`h` quad anchored at the local origin,
/// wound to match [`QUAD_INDICES`].
pub fn quad_vertices(w: f32, h: f32) -> [Vertex; 4] {
    [
        Vertex {
            pos: [w, 0.0, 0.0],
            uv: [1.0, 0.0],
        },
        Vertex {
            pos: [w, h, 0.0],
            uv: [1.0, 1.0],
        },
        Vertex {
            pos: [0.0, h, 0.0],
            uv: [0.0, 1.0],
        },
        Vertex {
            pos: [0.0, 0.0, 0.0],
            uv: [0.0, 0.0],
        },
    ]
}

/// A textured quad and every GPU resource needed to draw it.
///
/// Each `Drawable` owns its vertex buffer, index buffer, texture (plus the
/// bind group tying them to the shared pipeline), and a uniform buffer for
/// its model matrix; no two drawables share a GPU object.  The resources
/// live exactly as long as the value and are released once, on drop.  There
/// is deliberately no `Clone`: a `Drawable` can only be moved, which
/// transfers ownership wholesale.
///
/// The stored model matrix is uploaded by [`crate::Renderer::draw`] on
/// every draw call, so whatever [`Drawable::set_transform`] saw last is
/// what the GPU sees — there is no cross-frame caching to invalidate.
pub struct Drawable {
    pub(crate) vertex_buf: wgpu::Buffer,
    pub(crate) index_buf: wgpu::Buffer,
    pub(crate) model_buf: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) model: Mat4,
    texture: wgpu::Texture,
    size: Vec2,
}

impl Drawable {
    pub(crate) fn new(
        gpu: &Wgpu,
        layout: &wgpu::BindGroupLayout,
        texture: wgpu::Texture,
        (w, h): (u32, u32),
    ) -> Self {
        let vertices = quad_vertices(w as f32, h as f32);
        let vertex_buf = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad vertices"),
            size: std::mem::size_of_val(&vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buf = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad indices"),
            size: std::mem::size_of_val(&QUAD_INDICES) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let model_buf = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad model"),
            size: std::mem::size_of::<Mat4>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        gpu.queue()
            .write_buffer(&vertex_buf, 0, bytemuck::cast_slice(&vertices));
        gpu.queue()
            .write_buffer(&index_buf, 0, bytemuck::cast_slice(&QUAD_INDICES));

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = gpu.device().create_sampler(&wgpu::SamplerDescriptor {
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let bind_group = gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quad locals"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: model_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            vertex_buf,
            index_buf,
            model_buf,
            bind_group,
            model: Mat4::IDENTITY,
            texture,
            size: Vec2::new(w as f32, h as f32),
        }
    }

    /// The texture this quad samples from.
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// Store the model matrix to upload at the next draw call.
    pub fn set_transform(&mut self, t: &Transform) {
        self.model = t.matrix();
    }

    /// The quad's untransformed pixel size.
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_four_corners() {
        let v = quad_vertices(64.0, 96.0);
        assert_eq!(v.len(), 4);
        let uvs: Vec<[f32; 2]> = v.iter().map(|v| v.uv).collect();
        for corner in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]] {
            assert!(uvs.contains(&corner), "missing uv corner {corner:?}");
        }
        // geometry spans (0,0)..(w,h) at z=0
        for vert in &v {
            assert!(vert.pos[0] == 0.0 || vert.pos[0] == 64.0);
            assert!(vert.pos[1] == 0.0 || vert.pos[1] == 96.0);
            assert_eq!(vert.pos[2], 0.0);
        }
    }

    #[test]
    fn indices_are_two_triangles_sharing_a_diagonal() {
        assert_eq!(QUAD_INDICES.len(), 6);
        let (t1, t2) = (&QUAD_INDICES[..3], &QUAD_INDICES[3..]);
        let shared: Vec<u16> = t1.iter().copied().filter(|i| t2.contains(i)).collect();
        assert_eq!(shared.len(), 2, "triangles must share exactly one edge");
        // all four corners are referenced
        for i in 0..4u16 {
            assert!(QUAD_INDICES.contains(&i));
        }
    }
}
