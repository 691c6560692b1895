/// Snapshot of the window size taken once per render.
///
/// Renderers work from this value instead of re-reading the window, which
/// keeps planning independent from the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical (CSS pixel) width.
    pub width: f64,
    /// Logical (CSS pixel) height.
    pub height: f64,
    /// Device pixel ratio, always finite and positive.
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width: sanitize_len(width),
            height: sanitize_len(height),
            pixel_ratio: if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
                pixel_ratio
            } else {
                1.0
            },
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }

    /// Size of the canvas backing store in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).floor() as u32,
            (self.height * self.pixel_ratio).floor() as u32,
        )
    }
}

fn sanitize_len(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_size_scales_by_ratio() {
        let vp = Viewport::new(1280.0, 720.5, 2.0);
        assert_eq!(vp.backing_size(), (2560, 1441));
    }

    #[test]
    fn bogus_ratio_falls_back_to_one() {
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).pixel_ratio, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).pixel_ratio, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, -3.0).pixel_ratio, 1.0);
    }

    #[test]
    fn negative_or_nan_sizes_clamp_to_zero() {
        let vp = Viewport::new(-5.0, f64::INFINITY, 1.0);
        assert_eq!((vp.width, vp.height), (0.0, 0.0));
        assert!(vp.is_empty());
        assert_eq!(vp.backing_size(), (0, 0));
    }
}
