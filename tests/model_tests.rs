// Host-side tests for glTF flattening and URI resolution.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod model {
    include!("../src/core/model.rs");
}

use model::*;

const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0, "translation": [0.0, 1.0, 0.0] }],
  "meshes": [{ "name": "tri", "primitives": [{ "attributes": { "POSITION": 0 }, "mode": MODE }] }],
  "buffers": [{ "uri": "tri.bin", "byteLength": 36 }],
  "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0,
    "componentType": 5126,
    "count": 3,
    "type": "VEC3",
    "min": [0.0, 0.0, 0.0],
    "max": [1.0, 1.0, 0.0]
  }]
}"#;

fn triangle_document(mode: u32) -> gltf::Document {
    let json = TRIANGLE_GLTF.replace("MODE", &mode.to_string());
    let gltf = gltf::Gltf::from_slice(json.as_bytes()).expect("valid glTF");
    gltf.document
}

fn triangle_buffer() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    bytemuck::cast_slice(&positions).to_vec()
}

#[test]
fn resolve_uri_joins_relative_paths() {
    assert_eq!(resolve_uri("models/scene.gltf", "scene.bin"), "models/scene.bin");
    assert_eq!(
        resolve_uri("https://cdn.test/a/scene.gltf", "tex/base.png"),
        "https://cdn.test/a/tex/base.png"
    );
    assert_eq!(resolve_uri("scene.gltf", "scene.bin"), "scene.bin");
}

#[test]
fn resolve_uri_keeps_absolute_references() {
    assert_eq!(resolve_uri("a/scene.gltf", "/abs.bin"), "/abs.bin");
    assert_eq!(
        resolve_uri("a/scene.gltf", "https://x.test/b.bin"),
        "https://x.test/b.bin"
    );
    let data = "data:application/octet-stream;base64,AAAA";
    assert_eq!(resolve_uri("a/scene.gltf", data), data);
}

#[test]
fn buffer_sources_resolve_against_model_url() {
    let doc = triangle_document(4);
    assert_eq!(
        buffer_sources(&doc, "assets/scene.gltf"),
        vec![BufferSource::Url("assets/tri.bin".to_string())]
    );
}

#[test]
fn flattens_triangle_with_node_transform() {
    let doc = triangle_document(4);
    let data = ModelData::from_gltf(&doc, &[triangle_buffer()]).expect("model");
    assert_eq!(data.primitives.len(), 1);
    assert_eq!(data.triangle_count(), 1);

    let prim = &data.primitives[0];
    assert_eq!(prim.indices, vec![0, 1, 2]);
    assert_eq!(prim.vertices[0].position, [0.0, 1.0, 0.0]);
    assert_eq!(prim.vertices[1].position, [1.0, 1.0, 0.0]);
    assert_eq!(prim.vertices[2].position, [0.0, 2.0, 0.0]);
    for v in &prim.vertices {
        assert!((v.normal[2] - 1.0).abs() < 1e-5);
        assert_eq!(v.uv, [0.0, 0.0]);
    }

    // No materials in the document: only the trailing default
    assert_eq!(data.materials, vec![ModelMaterial::default()]);
    assert_eq!(prim.material, 0);
    assert!(data.used_images().is_empty());
}

#[test]
fn non_triangle_primitives_are_skipped() {
    // mode 0 = POINTS
    let doc = triangle_document(0);
    let err = ModelData::from_gltf(&doc, &[triangle_buffer()]).unwrap_err();
    assert!(matches!(err, ModelError::Empty));
}

#[test]
fn missing_buffer_is_reported() {
    let doc = triangle_document(4);
    let err = ModelData::from_gltf(&doc, &[]).unwrap_err();
    assert!(matches!(err, ModelError::MissingBuffer { index: 0 }));
}

#[test]
fn computed_normals_are_area_weighted_and_unit() {
    // Two triangles sharing an edge, folded 90 degrees
    let positions = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];
    let indices = [0, 1, 2, 0, 3, 1];
    let normals = compute_vertex_normals(&positions, &indices);
    assert_eq!(normals.len(), 4);
    assert!((normals[2][2] - 1.0).abs() < 1e-5);
    assert!((normals[3][1] - 1.0).abs() < 1e-5);
    for n in &normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }
}

#[test]
fn unreferenced_vertices_get_up_normal() {
    let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
    // Degenerate (collinear) triangle
    let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
    assert!(normals.iter().all(|n| *n == [0.0, 1.0, 0.0]));
}

#[test]
fn decode_image_produces_rgba() {
    let img = image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .expect("encode png");

    let decoded = decode_image(0, &png).expect("decode");
    assert_eq!((decoded.width, decoded.height), (2, 1));
    assert_eq!(decoded.rgba, vec![10, 20, 30, 255, 10, 20, 30, 255]);
}

#[test]
fn decode_image_reports_index_on_garbage() {
    let err = decode_image(3, b"not an image").unwrap_err();
    assert!(matches!(err, ModelError::Image { index: 3, .. }));
}
