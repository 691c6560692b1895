use crate::random::RandomSource;

/// Fill colors for fallback polygons.
pub const PALETTE: [&str; 8] = [
    "#0a192f", "#112240", "#1e3a5f", "#243b53", "#102a43", "#0d1b2a", "#1b263b", "#274060",
];

/// Solid fill painted under the images.
pub const IMAGE_BACKDROP: &str = "#021225";

pub fn pick_color<R: RandomSource + ?Sized>(rng: &mut R) -> &'static str {
    PALETTE[rng.index(PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_covers_both_ends() {
        let mut first = || 0.0;
        let mut last = || 0.99;
        assert_eq!(pick_color(&mut first), "#0a192f");
        assert_eq!(pick_color(&mut last), "#274060");
    }
}
