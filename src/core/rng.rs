//! Seeded generator behind `generate`: PCG-style LCG steps, uniform station
//! picks and Box-Muller normal readings. Avoids rand dependency

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const TIME_FALLBACK_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Different output on every run; used when no `--seed` is given.
    #[must_use]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(TIME_FALLBACK_SEED, |d| d.as_nanos() as u64);
        Self::seed(nanos)
    }

    /// High half of the next state; the low bits of an LCG cycle too quickly.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform index in `0..n` (`n` > 0), by multiply-shift.
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        ((u64::from(self.step()) * n as u64) >> 32) as usize
    }

    /// Sample from 𝒩(`mean`, `sd`²).
    #[inline]
    pub fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        let unit = |rng: &mut Self| f64::from(rng.step()) / f64::from(u32::MAX);
        let radius = (-2.0 * unit(self).max(f64::MIN_POSITIVE).ln()).sqrt();
        let angle = std::f64::consts::TAU * unit(self);
        sd.mul_add(radius * angle.cos(), mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let (mut a, mut b) = (Lcg::seed(7), Lcg::seed(7));
        for _ in 0..100 {
            assert_eq!(a.below(413), b.below(413));
            assert_eq!(a.normal(0.0, 1.0).to_bits(), b.normal(0.0, 1.0).to_bits());
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Lcg::seed(42);
        assert!((0..10_000).all(|_| rng.below(3) < 3));
    }

    #[test]
    fn normal_centres_on_mean() {
        let mut rng = Lcg::seed(5);
        let n = 20_000;
        let avg = (0..n).map(|_| rng.normal(15.0, 10.0)).sum::<f64>() / f64::from(n);
        assert!((avg - 15.0).abs() < 0.5, "avg {avg}");
    }
}
