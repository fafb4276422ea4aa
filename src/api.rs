//! Cataas API Layer
//!
//! Concurrent batch fetch of cat records plus image preloading.

use futures_util::future::{join_all, try_join_all};
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::CatImage;

/// Base URL of the cat image service
pub const API_BASE: &str = "https://cataas.com";

/// Number of cards fetched per session
pub const BATCH_SIZE: usize = 10;

/// Fetch one random cat record
async fn fetch_cat() -> Result<CatImage, String> {
    Request::get(&format!("{}/cat?json=true", API_BASE))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<CatImage>()
        .await
        .map_err(|e| e.to_string())
}

/// Preload one image. Settles on load and on error alike, so a broken
/// image can never block session start; it may render broken later.
async fn preload_image(url: String) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let img = match web_sys::HtmlImageElement::new() {
            Ok(img) => img,
            Err(_) => {
                let _ = resolve.call0(&JsValue::NULL);
                return;
            }
        };
        let on_load = {
            let resolve = resolve.clone();
            Closure::once_into_js(move || {
                let _ = resolve.call0(&JsValue::NULL);
            })
        };
        let on_error = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        img.set_onload(Some(on_load.unchecked_ref()));
        img.set_onerror(Some(on_error.unchecked_ref()));
        img.set_src(&url);
    });
    let _ = JsFuture::from(promise).await;
}

/// Fetch a full batch concurrently, then preload every image.
/// A single metadata-fetch failure fails the whole batch; preload
/// failures never do.
pub async fn load_batch() -> Result<Vec<CatImage>, String> {
    let cards = try_join_all((0..BATCH_SIZE).map(|_| fetch_cat())).await?;
    join_all(cards.iter().map(|card| preload_image(card.url()))).await;
    Ok(cards)
}
