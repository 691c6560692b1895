use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlImageElement};

use super::loader;
use super::render::{viewport_of, CanvasPainter, Surface};
use crate::config::{BackgroundConfig, RenderMode};
use crate::dispatch;
use crate::epoch::{RenderEpoch, RenderTicket};
use crate::error::BackgroundError;
use crate::layout::{self, ImagePlacement};

enum Preloaded {
    NotStarted,
    Loading,
    Ready(Rc<Vec<HtmlImageElement>>),
}

/// One background instance: config, render generations and the preloaded set,
/// which is kept for the page's lifetime.
pub struct Background {
    config: BackgroundConfig,
    epoch: RenderEpoch,
    images: RefCell<Preloaded>,
    preload_runs: Cell<u32>,
}

impl Background {
    pub fn new(config: BackgroundConfig) -> Rc<Self> {
        Rc::new(Self {
            config,
            epoch: RenderEpoch::new(),
            images: RefCell::new(Preloaded::NotStarted),
            preload_runs: Cell::new(0),
        })
    }

    pub fn generation(&self) -> u64 {
        self.epoch.current()
    }

    /// How many times the image set has been fetched. Stays at 1 once started.
    pub fn preload_runs(&self) -> u32 {
        self.preload_runs.get()
    }

    /// Number of preloaded images, `None` until the batch settles.
    pub fn loaded_count(&self) -> Option<usize> {
        match &*self.images.borrow() {
            Preloaded::Ready(images) => Some(images.len()),
            _ => None,
        }
    }

    /// Start a new render generation and paint with the current viewport.
    /// A page without the canvas is a silent no-op.
    pub fn refresh(self: &Rc<Self>) -> Result<(), BackgroundError> {
        let ticket = self.epoch.advance();
        let Some(surface) = self.surface()? else {
            log::debug!("no #{} canvas, skipping render", self.config.canvas_id);
            return Ok(());
        };
        match self.config.mode {
            RenderMode::Preload => self.refresh_preloaded(&surface),
            RenderMode::Eager => self.draw_eager(&surface, ticket),
        }
    }

    fn surface(&self) -> Result<Option<Surface>, BackgroundError> {
        let window = window().ok_or(BackgroundError::MissingWindow)?;
        let document = window.document().ok_or(BackgroundError::MissingDocument)?;
        Surface::find(&document, &self.config.canvas_id)
    }

    fn refresh_preloaded(self: &Rc<Self>, surface: &Surface) -> Result<(), BackgroundError> {
        let mut state = self.images.borrow_mut();
        let ready = match &*state {
            Preloaded::Ready(images) => Some(images.clone()),
            _ => None,
        };
        if let Some(images) = ready {
            drop(state);
            return self.paint(surface, &images);
        }
        if matches!(*state, Preloaded::NotStarted) {
            *state = Preloaded::Loading;
            drop(state);
            self.spawn_preload();
        }
        // The batch paints once it settles.
        Ok(())
    }

    fn spawn_preload(self: &Rc<Self>) {
        self.preload_runs.set(self.preload_runs.get() + 1);
        let this = self.clone();
        spawn_local(async move {
            let loaded = Rc::new(loader::preload(&this.config.images).await);
            *this.images.borrow_mut() = Preloaded::Ready(loaded.clone());
            let painted = this
                .surface()
                .and_then(|s| s.map_or(Ok(()), |s| this.paint(&s, &loaded)));
            if let Err(err) = painted {
                log::warn!("background paint failed: {err}");
            }
        });
    }

    fn paint(&self, surface: &Surface, images: &[HtmlImageElement]) -> Result<(), BackgroundError> {
        let window = window().ok_or(BackgroundError::MissingWindow)?;
        let mut rng = js_sys::Math::random;
        let mut painter = CanvasPainter {
            surface,
            viewport: viewport_of(&window),
            background: &self.config.background,
            rng: &mut rng,
        };
        let route = dispatch::dispatch(&mut painter, images)?;
        log::debug!("generation {} painted as {route:?}", self.epoch.current());
        Ok(())
    }

    /// Legacy path: every placement fetches its own image and paints when that
    /// load lands. Loads finishing after a newer generation started are dropped.
    fn draw_eager(&self, surface: &Surface, ticket: RenderTicket) -> Result<(), BackgroundError> {
        let window = window().ok_or(BackgroundError::MissingWindow)?;
        let viewport = viewport_of(&window);
        surface.prepare(&viewport)?;

        let urls = &self.config.images;
        let mut rng = js_sys::Math::random;
        for placement in layout::plan_eager(&viewport, urls.len(), &mut rng) {
            let url = urls[placement.image].clone();
            let surface = surface.clone();
            let ticket = ticket.clone();
            spawn_local(async move {
                draw_when_loaded(&surface, &url, &placement, &ticket).await;
            });
        }
        Ok(())
    }
}

/// Load `url` and paint it at `placement` if `ticket` is still current.
/// Returns whether anything was painted; failed loads paint nothing.
pub async fn draw_when_loaded(
    surface: &Surface,
    url: &str,
    placement: &ImagePlacement,
    ticket: &RenderTicket,
) -> bool {
    match loader::load_image(url).await {
        Ok(image) if ticket.is_current() => match surface.draw_placed(&image, placement) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("eager draw failed: {err}");
                false
            }
        },
        Ok(_) => {
            log::trace!("dropping stale draw of {url}");
            false
        }
        Err(err) => {
            log::warn!("{err}");
            false
        }
    }
}

/// Paint now (or on `load` if the page is still loading) and again on every resize.
pub fn attach(background: Rc<Background>) -> Result<(), BackgroundError> {
    let window = window().ok_or(BackgroundError::MissingWindow)?;
    let document = window.document().ok_or(BackgroundError::MissingDocument)?;

    let on_event = {
        let background = background.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = background.refresh() {
                log::warn!("background refresh failed: {err}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_event.as_ref().unchecked_ref())?;
    let loaded = document.ready_state() == "complete";
    if !loaded {
        window.add_event_listener_with_callback("load", on_event.as_ref().unchecked_ref())?;
    }
    // Listeners live as long as the page.
    on_event.forget();

    if loaded {
        if let Err(err) = background.refresh() {
            log::warn!("background refresh failed: {err}");
        }
    }
    Ok(())
}
