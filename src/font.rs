use crate::constants::FONT_FAMILY;
use field_core::TtfFont;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the font file once and use it twice: parsed for outline sampling,
/// and registered with `document.fonts` under [`FONT_FAMILY`] so the canvas
/// backdrop draws the same typeface.
pub async fn load_font(path: &str) -> anyhow::Result<TtfFont> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", path, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !response.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", path, response.status());
    }
    let buffer: js_sys::ArrayBuffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("reading {} failed: {:?}", path, e))?
    .dyn_into()
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let font = TtfFont::from_bytes(js_sys::Uint8Array::new(&buffer).to_vec())?;
    if let Err(e) = register_font_face(&window, &buffer).await {
        // Points still follow the outlines; only the backdrop falls back.
        log::warn!("[font] {} not registered for canvas text: {:?}", path, e);
    }
    log::info!("[font] loaded {}", path);
    Ok(font)
}

async fn register_font_face(
    window: &web::Window,
    buffer: &js_sys::ArrayBuffer,
) -> anyhow::Result<()> {
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let face = web::FontFace::new_with_array_buffer(FONT_FAMILY, buffer)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let loading = face.load().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(loading)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    document
        .fonts()
        .add(&face)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
