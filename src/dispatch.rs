/// Which backdrop a set of preload results maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Images,
    Polygons,
}

/// Something that can paint either backdrop.
pub trait Painter {
    type Image;
    type Error;

    fn paint_images(&mut self, images: &[Self::Image]) -> Result<(), Self::Error>;
    fn paint_polygons(&mut self) -> Result<(), Self::Error>;
}

pub fn route<T>(loaded: &[T]) -> Route {
    if loaded.is_empty() {
        Route::Polygons
    } else {
        Route::Images
    }
}

/// Paint the image backdrop if anything loaded, the polygon fallback otherwise.
pub fn dispatch<P: Painter>(painter: &mut P, loaded: &[P::Image]) -> Result<Route, P::Error> {
    let chosen = route(loaded);
    match chosen {
        Route::Images => painter.paint_images(loaded)?,
        Route::Polygons => painter.paint_polygons()?,
    }
    Ok(chosen)
}
