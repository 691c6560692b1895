//! Placement planning for each backdrop.
//!
//! Every function here is pure given a [`Viewport`] and a [`RandomSource`];
//! the browser side only paints what these return.

use std::f64::consts::TAU;

use crate::palette::pick_color;
use crate::random::RandomSource;
use crate::viewport::Viewport;

/// Viewport area covered by one image on average.
pub const AREA_PER_IMAGE: f64 = 120_000.0;
pub const MIN_IMAGES: usize = 6;
pub const MAX_IMAGES: usize = 28;

pub const IMAGE_SIZE: (f64, f64) = (50.0, 170.0);
pub const IMAGE_ROTATION: (f64, f64) = (-0.3, 0.3);
pub const IMAGE_OPACITY: (f64, f64) = (0.65, 0.9);

pub const POLYGON_COUNT: usize = 20;
pub const POLYGON_SIDES: (u32, u32) = (3, 7);
pub const POLYGON_RADIUS: (f64, f64) = (30.0, 160.0);
pub const POLYGON_OPACITY: f64 = 0.6;

pub const EAGER_COUNT: usize = 20;
pub const EAGER_SIZE: (f64, f64) = (50.0, 150.0);
pub const EAGER_OPACITY: f64 = 0.8;

/// One image draw: a square of side `size` at `(x, y)`, rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    /// Index into the image set the plan was made for.
    pub image: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Radians, clockwise.
    pub rotation: f64,
    pub opacity: f64,
}

impl ImagePlacement {
    pub fn center(&self) -> (f64, f64) {
        let half = self.size / 2.0;
        (self.x + half, self.y + half)
    }
}

/// A filled regular polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub sides: u32,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: &'static str,
}

impl PolygonShape {
    /// Vertices evenly spaced by angle, starting at angle zero.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        (0..self.sides)
            .map(|j| {
                let angle = j as f64 / self.sides as f64 * TAU;
                (
                    self.cx + self.radius * angle.cos(),
                    self.cy + self.radius * angle.sin(),
                )
            })
            .collect()
    }
}

/// Number of images for a viewport: area / 120000 rounded, clamped to 6..=28.
pub fn image_draw_count(viewport: &Viewport) -> usize {
    let raw = (viewport.area() / AREA_PER_IMAGE).round();
    raw.clamp(MIN_IMAGES as f64, MAX_IMAGES as f64) as usize
}

/// Plan the image backdrop over `available` loaded images.
///
/// Images are sampled with replacement and kept fully inside the viewport.
/// Returns nothing when there are no images to sample from.
pub fn plan_images<R: RandomSource + ?Sized>(
    viewport: &Viewport,
    available: usize,
    rng: &mut R,
) -> Vec<ImagePlacement> {
    if available == 0 {
        return Vec::new();
    }
    (0..image_draw_count(viewport))
        .map(|_| {
            let image = rng.index(available);
            let size = rng.range(IMAGE_SIZE.0, IMAGE_SIZE.1);
            let x = rng.next_unit() * (viewport.width - size).max(0.0);
            let y = rng.next_unit() * (viewport.height - size).max(0.0);
            let rotation = rng.range(IMAGE_ROTATION.0, IMAGE_ROTATION.1);
            let opacity = rng.range(IMAGE_OPACITY.0, IMAGE_OPACITY.1);
            ImagePlacement {
                image,
                x,
                y,
                size,
                rotation,
                opacity,
            }
        })
        .collect()
}

/// Plan the polygon fallback. Centers may sit anywhere in the viewport, so
/// shapes can spill past the edges.
pub fn plan_polygons<R: RandomSource + ?Sized>(viewport: &Viewport, rng: &mut R) -> Vec<PolygonShape> {
    let side_choices = (POLYGON_SIDES.1 - POLYGON_SIDES.0 + 1) as usize;
    (0..POLYGON_COUNT)
        .map(|_| {
            let sides = POLYGON_SIDES.0 + rng.index(side_choices) as u32;
            let cx = rng.next_unit() * viewport.width;
            let cy = rng.next_unit() * viewport.height;
            let radius = rng.range(POLYGON_RADIUS.0, POLYGON_RADIUS.1);
            PolygonShape {
                sides,
                cx,
                cy,
                radius,
                color: pick_color(rng),
            }
        })
        .collect()
}

/// Plan the legacy eager draw over a list of `urls` image URLs.
///
/// Unlike [`plan_images`], the count is fixed, rotation spans a full turn and
/// the top-left corner may land anywhere in the viewport.
pub fn plan_eager<R: RandomSource + ?Sized>(
    viewport: &Viewport,
    urls: usize,
    rng: &mut R,
) -> Vec<ImagePlacement> {
    if urls == 0 {
        return Vec::new();
    }
    (0..EAGER_COUNT)
        .map(|_| {
            let image = rng.index(urls);
            let x = rng.next_unit() * viewport.width;
            let y = rng.next_unit() * viewport.height;
            let size = rng.range(EAGER_SIZE.0, EAGER_SIZE.1);
            let rotation = rng.range(0.0, TAU);
            ImagePlacement {
                image,
                x,
                y,
                size,
                rotation,
                opacity: EAGER_OPACITY,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Cycles through a fixed list of samples.
    fn scripted(samples: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = samples[i % samples.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn full_hd_draws_seventeen() {
        let vp = Viewport::new(1920.0, 1080.0, 1.0);
        assert_eq!(image_draw_count(&vp), 17);
    }

    #[test]
    fn draw_count_clamps_at_both_ends() {
        assert_eq!(image_draw_count(&Viewport::new(0.0, 0.0, 1.0)), MIN_IMAGES);
        assert_eq!(image_draw_count(&Viewport::new(1.0, 1.0, 1.0)), MIN_IMAGES);
        assert_eq!(image_draw_count(&Viewport::new(1e9, 1e9, 1.0)), MAX_IMAGES);
        assert_eq!(image_draw_count(&Viewport::new(f64::MAX, f64::MAX, 1.0)), MAX_IMAGES);
    }

    #[test]
    fn images_stay_inside_viewport() {
        let vp = Viewport::new(800.0, 600.0, 2.0);
        for samples in [&[0.0][..], &[0.999_999][..], &[0.3, 0.7, 0.1, 0.9, 0.5, 0.2][..]] {
            let mut i = 0;
            let mut rng = move || {
                let v = samples[i % samples.len()];
                i += 1;
                v
            };
            for p in plan_images(&vp, 16, &mut rng) {
                assert!(p.image < 16);
                assert!(p.size >= 50.0 && p.size < 170.0);
                assert!(p.x >= 0.0 && p.x + p.size <= vp.width);
                assert!(p.y >= 0.0 && p.y + p.size <= vp.height);
                assert!(p.rotation >= -0.3 && p.rotation < 0.3);
                assert!(p.opacity >= 0.65 && p.opacity < 0.9);
            }
        }
    }

    #[test]
    fn degenerate_viewport_pins_images_to_origin() {
        let vp = Viewport::new(0.0, 0.0, 1.0);
        let plan = plan_images(&vp, 3, &mut scripted(&[0.5]));
        assert_eq!(plan.len(), MIN_IMAGES);
        assert!(plan.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn no_images_no_plan() {
        let vp = Viewport::new(1920.0, 1080.0, 1.0);
        assert!(plan_images(&vp, 0, &mut scripted(&[0.5])).is_empty());
        assert!(plan_eager(&vp, 0, &mut scripted(&[0.5])).is_empty());
    }

    #[test]
    fn placement_center() {
        let p = ImagePlacement {
            image: 0,
            x: 10.0,
            y: 20.0,
            size: 100.0,
            rotation: 0.0,
            opacity: 1.0,
        };
        assert_eq!(p.center(), (60.0, 70.0));
    }

    #[test]
    fn polygons_fixed_count_and_sides() {
        let vp = Viewport::new(1024.0, 768.0, 1.0);
        for sample in [0.0, 0.25, 0.5, 0.75, 0.999_999] {
            let shapes = plan_polygons(&vp, &mut move || sample);
            assert_eq!(shapes.len(), POLYGON_COUNT);
            for s in &shapes {
                assert!((3..=7).contains(&s.sides));
                assert!(s.radius >= 30.0 && s.radius < 160.0);
                assert!(crate::palette::PALETTE.contains(&s.color));
            }
        }
    }

    #[test]
    fn extreme_samples_reach_side_bounds() {
        let vp = Viewport::new(100.0, 100.0, 1.0);
        let low = plan_polygons(&vp, &mut || 0.0);
        let high = plan_polygons(&vp, &mut || 0.999);
        assert_eq!(low[0].sides, 3);
        assert_eq!(high[0].sides, 7);
    }

    #[test]
    fn square_vertices() {
        let shape = PolygonShape {
            sides: 4,
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
            color: "#0a192f",
        };
        let rounded: Vec<(i64, i64)> = shape
            .vertices()
            .into_iter()
            .map(|(x, y)| (x.round() as i64, y.round() as i64))
            .collect();
        assert_eq!(rounded, vec![(1, 0), (0, 1), (-1, 0), (0, -1)]);
    }

    #[test]
    fn eager_uses_fixed_count_and_opacity() {
        let vp = Viewport::new(640.0, 480.0, 1.0);
        let plan = plan_eager(&vp, 16, &mut scripted(&[0.1, 0.9, 0.4]));
        assert_eq!(plan.len(), EAGER_COUNT);
        for p in &plan {
            assert_eq!(p.opacity, EAGER_OPACITY);
            assert!(p.size >= 50.0 && p.size < 150.0);
            assert!(p.rotation >= 0.0 && p.rotation < TAU);
            assert!(p.x < vp.width && p.y < vp.height);
        }
    }
}
