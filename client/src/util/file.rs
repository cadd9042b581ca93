//! Browser file input and download glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms keep a [`PickedFile`] in a local signal: the metadata drives
//! validation on every target, the `web_sys::File` handle only exists in the
//! browser and is appended to multipart bodies by `net::api`.

use schema::validate::DocumentMeta;

/// A file chosen through an `<input type="file">`.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub meta: DocumentMeta,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// First file selected by the input that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn picked_file(ev: &web_sys::Event) -> Option<PickedFile> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    let mime = if file.type_().is_empty() {
        schema::validate::mime_for_file_name(&file.name()).to_owned()
    } else {
        file.type_()
    };
    Some(PickedFile { meta: DocumentMeta { file_name: file.name(), size, mime }, file })
}

/// Read a picked file as text.
///
/// # Errors
///
/// Returns an error string if the browser fails to read the blob.
#[cfg(feature = "hydrate")]
pub async fn read_text(file: &web_sys::File) -> Result<String, String> {
    let value = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| format!("{e:?}"))?;
    value.as_string().ok_or_else(|| "file is not text".to_owned())
}

/// Offer `contents` to the user as a file download.
///
/// # Errors
///
/// Returns an error string if any browser API in the chain fails.
#[cfg(feature = "hydrate")]
pub fn download_text(file_name: &str, mime: &str, contents: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
