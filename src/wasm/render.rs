use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, Window};

use crate::dispatch::Painter;
use crate::error::BackgroundError;
use crate::layout::{self, ImagePlacement, PolygonShape, POLYGON_OPACITY};
use crate::random::RandomSource;
use crate::viewport::Viewport;

/// Current window size and pixel density.
pub fn viewport_of(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

/// The background canvas and its 2d context.
#[derive(Clone)]
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    /// Look up the canvas by id. `Ok(None)` when the page has no canvas with that id.
    pub fn find(document: &Document, id: &str) -> Result<Option<Self>, BackgroundError> {
        let Some(canvas) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return Ok(None);
        };
        let ctx = canvas
            .get_context("2d")?
            .ok_or(BackgroundError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackgroundError::ContextUnavailable)?;
        Ok(Some(Self { canvas, ctx }))
    }

    /// Size the canvas to the viewport and clear it.
    ///
    /// The backing store gets `pixel_ratio` physical pixels per CSS pixel and the
    /// context is scaled to match, so all drawing below uses logical coordinates.
    /// Resizing also resets any context state left by an earlier frame.
    pub fn prepare(&self, viewport: &Viewport) -> Result<(), BackgroundError> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;

        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let dpr = viewport.pixel_ratio;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    pub fn fill(&self, viewport: &Viewport, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    /// Draw one image rotated about its own center.
    pub fn draw_placed(
        &self,
        image: &HtmlImageElement,
        placement: &ImagePlacement,
    ) -> Result<(), BackgroundError> {
        self.ctx.save();
        let drawn = self.draw_transformed(image, placement);
        self.ctx.restore();
        drawn
    }

    fn draw_transformed(
        &self,
        image: &HtmlImageElement,
        p: &ImagePlacement,
    ) -> Result<(), BackgroundError> {
        let (cx, cy) = p.center();
        let half = p.size / 2.0;
        self.ctx.set_global_alpha(p.opacity);
        self.ctx.translate(cx, cy)?;
        self.ctx.rotate(p.rotation)?;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, -half, -half, p.size, p.size)?;
        Ok(())
    }

    pub fn fill_polygon(&self, shape: &PolygonShape) {
        self.ctx.begin_path();
        for (i, (x, y)) in shape.vertices().into_iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(x, y);
            } else {
                self.ctx.line_to(x, y);
            }
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(shape.color);
        self.ctx.set_global_alpha(POLYGON_OPACITY);
        self.ctx.fill();
    }
}

/// Paints either backdrop onto a [`Surface`] for one viewport snapshot.
pub struct CanvasPainter<'a, R: ?Sized> {
    pub surface: &'a Surface,
    pub viewport: Viewport,
    pub background: &'a str,
    pub rng: &'a mut R,
}

impl<R: RandomSource + ?Sized> Painter for CanvasPainter<'_, R> {
    type Image = HtmlImageElement;
    type Error = BackgroundError;

    fn paint_images(&mut self, images: &[HtmlImageElement]) -> Result<(), BackgroundError> {
        let vp = self.viewport;
        self.surface.prepare(&vp)?;
        self.surface.fill(&vp, self.background);
        let plan = layout::plan_images(&vp, images.len(), &mut *self.rng);
        for p in &plan {
            self.surface.draw_placed(&images[p.image], p)?;
        }
        log::debug!("painted {} images over {}x{}", plan.len(), vp.width, vp.height);
        Ok(())
    }

    fn paint_polygons(&mut self) -> Result<(), BackgroundError> {
        let vp = self.viewport;
        self.surface.prepare(&vp)?;
        let shapes = layout::plan_polygons(&vp, &mut *self.rng);
        for shape in &shapes {
            self.surface.fill_polygon(shape);
        }
        log::debug!("painted {} fallback polygons", shapes.len());
        Ok(())
    }
}
