use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::stream::{FuturesUnordered, StreamExt};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::HtmlImageElement;

use crate::error::BackgroundError;
use crate::preload::LoadBatch;

/// Load a single image, resolving when the browser fires `load` or `error`.
///
/// There is no timeout: a request that never settles never resolves.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, BackgroundError> {
    let image = HtmlImageElement::new()?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let settle = |ok: bool| {
        let tx = tx.clone();
        Closure::wrap(Box::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(ok);
            }
        }) as Box<dyn FnMut()>)
    };
    let on_load = settle(true);
    let on_error = settle(false);
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(url);

    let loaded = rx.await.unwrap_or(false);
    image.set_onload(None);
    image.set_onerror(None);

    if loaded {
        Ok(image)
    } else {
        Err(BackgroundError::AssetLoad(url.to_string()))
    }
}

/// Load every URL concurrently and return the images that loaded, in the
/// order they finished. Failures are logged and left out.
pub async fn preload(urls: &[String]) -> Vec<HtmlImageElement> {
    if urls.is_empty() {
        return Vec::new();
    }

    let mut batch = LoadBatch::new(urls.len());
    let mut pending: FuturesUnordered<_> = urls.iter().map(|url| load_image(url)).collect();
    while let Some(outcome) = pending.next().await {
        let finished = match outcome {
            Ok(image) => batch.succeed(image),
            Err(err) => {
                log::warn!("{err}");
                batch.fail()
            }
        };
        if let Some(loaded) = finished {
            log::info!("preloaded {}/{} images", loaded.len(), urls.len());
            return loaded;
        }
    }
    batch.into_loaded()
}
