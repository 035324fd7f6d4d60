use super::helpers;
use crate::core::model::{DecodedImage, MeshVertex, ModelData};
use wgpu::util::DeviceExt;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MaterialUniforms {
    base_color: [f32; 4],
}

pub(crate) fn create_material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("material_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
    })
}

struct GpuPrimitive {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    material: usize,
}

/// Model geometry and materials resident on the GPU.
pub struct GpuModel {
    primitives: Vec<GpuPrimitive>,
    materials: Vec<wgpu::BindGroup>,
}

impl GpuModel {
    /// `images` is indexed like the glTF document's images; missing or
    /// undecodable images fall back to plain base colour.
    pub(crate) fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        data: &ModelData,
        images: &[Option<DecodedImage>],
    ) -> Self {
        let (_white_tex, white_view) =
            helpers::create_rgba_texture(device, queue, "white_tex", 1, 1, &[255, 255, 255, 255]);
        let image_views: Vec<Option<(wgpu::Texture, wgpu::TextureView)>> = images
            .iter()
            .enumerate()
            .map(|(i, img)| {
                img.as_ref().map(|img| {
                    helpers::create_rgba_texture(
                        device,
                        queue,
                        &format!("model_image_{}", i),
                        img.width,
                        img.height,
                        &img.rgba,
                    )
                })
            })
            .collect();

        let materials = data
            .materials
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let uniforms = MaterialUniforms {
                    base_color: m.base_color,
                };
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("material_uniforms"),
                    contents: bytemuck::bytes_of(&uniforms),
                    usage: wgpu::BufferUsages::UNIFORM,
                });
                let view = m
                    .base_color_image
                    .and_then(|idx| image_views.get(idx))
                    .and_then(|slot| slot.as_ref())
                    .map(|(_, view)| view)
                    .unwrap_or(&white_view);
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("material_bg_{}", i)),
                    layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: buffer.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::Sampler(sampler),
                        },
                    ],
                })
            })
            .collect();

        let primitives = data
            .primitives
            .iter()
            .filter(|p| !p.indices.is_empty())
            .map(|p| GpuPrimitive {
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("model_vertices"),
                    contents: bytemuck::cast_slice(&p.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("model_indices"),
                    contents: bytemuck::cast_slice(&p.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: p.indices.len() as u32,
                material: p.material,
            })
            .collect();

        Self {
            primitives,
            materials,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        for p in &self.primitives {
            let Some(material) = self.materials.get(p.material) else {
                continue;
            };
            rpass.set_bind_group(1, material, &[]);
            rpass.set_vertex_buffer(0, p.vertex_buffer.slice(..));
            rpass.set_index_buffer(p.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..p.index_count, 0, 0..1);
        }
    }
}
