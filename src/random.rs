//! Source of uniform samples for layout planning.

/// Anything that yields uniform samples in `[0, 1)`.
///
/// Any `FnMut() -> f64` qualifies, so `js_sys::Math::random` can be passed
/// straight through in the browser and tests can script exact sequences.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}
