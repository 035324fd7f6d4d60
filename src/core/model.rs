use glam::{Mat3, Mat4, Vec3};
use gltf::mesh::Mode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("glTF document has no scene")]
    NoScene,
    #[error("glTF buffer {index} is unavailable")]
    MissingBuffer { index: usize },
    #[error("model contains no triangle geometry")]
    Empty,
    #[error("image {index} could not be decoded: {source}")]
    Image {
        index: usize,
        #[source]
        source: image::ImageError,
    },
}

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// A triangle list in model space (node transforms already applied).
#[derive(Clone, Debug)]
pub struct ModelPrimitive {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub material: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelMaterial {
    pub base_color: [f32; 4],
    /// Index into the document's images.
    pub base_color_image: Option<usize>,
}

impl Default for ModelMaterial {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            base_color_image: None,
        }
    }
}

/// Flattened geometry of a glTF scene. `materials` holds the document's
/// materials followed by one default material for primitives without one.
#[derive(Clone, Debug)]
pub struct ModelData {
    pub primitives: Vec<ModelPrimitive>,
    pub materials: Vec<ModelMaterial>,
}

#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Where a glTF buffer's bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferSource {
    /// The binary chunk of a `.glb` container.
    Binary,
    Url(String),
}

/// Resolve a URI referenced by a glTF file against the file's own URL.
/// `data:` URIs, absolute URLs and root-relative paths are returned as-is.
pub fn resolve_uri(model_url: &str, uri: &str) -> String {
    if uri.starts_with("data:") || uri.contains("://") || uri.starts_with('/') {
        return uri.to_string();
    }
    match model_url.rfind('/') {
        Some(i) => format!("{}{}", &model_url[..=i], uri),
        None => uri.to_string(),
    }
}

pub fn buffer_sources(document: &gltf::Document, model_url: &str) -> Vec<BufferSource> {
    document
        .buffers()
        .map(|b| match b.source() {
            gltf::buffer::Source::Bin => BufferSource::Binary,
            gltf::buffer::Source::Uri(uri) => BufferSource::Url(resolve_uri(model_url, uri)),
        })
        .collect()
}

/// URLs of images stored outside the buffers, indexed like the document's
/// images. Images packed into a buffer view map to `None`.
pub fn external_image_urls(document: &gltf::Document, model_url: &str) -> Vec<Option<String>> {
    document
        .images()
        .map(|img| match img.source() {
            gltf::image::Source::Uri { uri, .. } => Some(resolve_uri(model_url, uri)),
            gltf::image::Source::View { .. } => None,
        })
        .collect()
}

/// Bytes of an image packed into a buffer view.
pub fn embedded_image_bytes<'b>(
    document: &gltf::Document,
    index: usize,
    buffers: &'b [Vec<u8>],
) -> Option<&'b [u8]> {
    let image = document.images().nth(index)?;
    match image.source() {
        gltf::image::Source::View { view, .. } => {
            let data = buffers.get(view.buffer().index())?;
            data.get(view.offset()..view.offset() + view.length())
        }
        gltf::image::Source::Uri { .. } => None,
    }
}

pub fn decode_image(index: usize, bytes: &[u8]) -> Result<DecodedImage, ModelError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|source| ModelError::Image { index, source })?
        .to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

impl ModelData {
    /// Flatten the default scene (or the first one) into triangle lists.
    /// `buffers` must be indexed like the document's buffers.
    pub fn from_gltf(document: &gltf::Document, buffers: &[Vec<u8>]) -> Result<Self, ModelError> {
        if let Some(b) = document.buffers().find(|b| buffers.get(b.index()).is_none()) {
            return Err(ModelError::MissingBuffer { index: b.index() });
        }
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(ModelError::NoScene)?;

        let default_material = document.materials().count();
        let mut primitives = Vec::new();
        for node in scene.nodes() {
            collect_node(&node, Mat4::IDENTITY, buffers, default_material, &mut primitives);
        }
        if primitives.is_empty() {
            return Err(ModelError::Empty);
        }

        let mut materials: Vec<ModelMaterial> = document
            .materials()
            .map(|m| {
                let pbr = m.pbr_metallic_roughness();
                ModelMaterial {
                    base_color: pbr.base_color_factor(),
                    base_color_image: pbr
                        .base_color_texture()
                        .map(|info| info.texture().source().index()),
                }
            })
            .collect();
        materials.push(ModelMaterial::default());

        Ok(Self {
            primitives,
            materials,
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(|p| p.indices.len() / 3).sum()
    }

    /// Images referenced by at least one material.
    pub fn used_images(&self) -> Vec<usize> {
        let mut used: Vec<usize> = self
            .materials
            .iter()
            .filter_map(|m| m.base_color_image)
            .collect();
        used.sort_unstable();
        used.dedup();
        used
    }
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[Vec<u8>],
    default_material: usize,
    out: &mut Vec<ModelPrimitive>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            match read_primitive(&primitive, world, buffers, default_material) {
                Some(p) => out.push(p),
                None => log::warn!(
                    "[model] skipped primitive {} of mesh {:?}",
                    primitive.index(),
                    mesh.name().unwrap_or("<unnamed>")
                ),
            }
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, default_material, out);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[Vec<u8>],
    default_material: usize,
) -> Option<ModelPrimitive> {
    if primitive.mode() != Mode::Triangles {
        return None;
    }
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.as_slice()));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }
    let mut indices: Vec<u32> = match reader.read_indices() {
        Some(read) => read.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    indices.truncate(indices.len() - indices.len() % 3);
    if indices.iter().any(|&i| i as usize >= positions.len()) {
        return None;
    }
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(read) => read.collect(),
        None => compute_vertex_normals(&positions, &indices),
    };
    let uvs: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map(|read| read.into_f32().collect())
        .unwrap_or_default();

    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
            MeshVertex {
                position: world.transform_point3(Vec3::from_array(*p)).to_array(),
                normal: (normal_matrix * Vec3::from_array(n))
                    .normalize_or_zero()
                    .to_array(),
                uv: uvs.get(i).copied().unwrap_or([0.0, 0.0]),
            }
        })
        .collect();

    Some(ModelPrimitive {
        vertices,
        indices,
        material: primitive.material().index().unwrap_or(default_material),
    })
}

/// Area-weighted vertex normals for meshes that ship without them.
/// Vertices not referenced by any non-degenerate triangle point up.
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (Some(pa), Some(pb), Some(pc)) = (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        let pa = Vec3::from_array(*pa);
        let face = (Vec3::from_array(*pb) - pa).cross(Vec3::from_array(*pc) - pa);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                [0.0, 1.0, 0.0]
            } else {
                n.to_array()
            }
        })
        .collect()
}
