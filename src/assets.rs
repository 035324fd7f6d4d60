use crate::core::model::{self, BufferSource, DecodedImage, ModelData, ModelError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// A parsed model plus the decoded images its materials reference.
pub struct LoadedModel {
    pub data: ModelData,
    /// Indexed like the glTF document's images.
    pub images: Vec<Option<DecodedImage>>,
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !response.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, response.status());
    }
    let body = response
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let buffer = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch a `.gltf`/`.glb` file and everything it references.
///
/// Geometry failures are fatal; a texture that cannot be fetched or decoded
/// only loses its image and the material keeps its base colour.
pub async fn load_model(url: &str) -> anyhow::Result<LoadedModel> {
    let bytes = fetch_bytes(url).await?;
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(&bytes).map_err(ModelError::from)?;

    let mut blob = blob;
    let mut buffers = Vec::new();
    for (index, source) in model::buffer_sources(&document, url).into_iter().enumerate() {
        let data = match source {
            BufferSource::Binary => blob.take().ok_or(ModelError::MissingBuffer { index })?,
            BufferSource::Url(buffer_url) => fetch_bytes(&buffer_url).await?,
        };
        buffers.push(data);
    }

    let data = ModelData::from_gltf(&document, &buffers)?;

    let urls = model::external_image_urls(&document, url);
    let mut images: Vec<Option<DecodedImage>> = vec![None; urls.len()];
    for index in data.used_images() {
        let encoded = match urls.get(index).cloned().flatten() {
            Some(image_url) => fetch_bytes(&image_url).await,
            None => model::embedded_image_bytes(&document, index, &buffers)
                .map(|b| b.to_vec())
                .ok_or_else(|| anyhow::anyhow!("image {} has no data", index)),
        };
        let decoded = encoded.and_then(|b| model::decode_image(index, &b).map_err(Into::into));
        match (decoded, images.get_mut(index)) {
            (Ok(img), Some(slot)) => *slot = Some(img),
            (Ok(_), None) => log::warn!("[model] image {} out of range", index),
            (Err(e), _) => log::warn!("[model] texture skipped: {:?}", e),
        }
    }

    Ok(LoadedModel { data, images })
}
