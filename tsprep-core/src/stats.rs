//! Small statistics helpers over finite `f64` slices.

use tsprep_types::Estimator;

/// Scale factor making the MAD a consistent estimator of a normal standard deviation.
pub(crate) const MAD_TO_SIGMA: f64 = 1.482_602_218_505_602;

/// Arithmetic mean of finite values; falls back to summing `x / n` when the
/// plain sum overflows.
pub(crate) fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let n = xs.len() as f64;
    let sum: f64 = xs.iter().sum();
    if sum.is_finite() {
        return Some(sum / n);
    }
    Some(xs.iter().map(|x| x / n).sum())
}

/// Population standard deviation (`ddof = 0`).
pub(crate) fn std_dev(xs: &[f64]) -> Option<f64> {
    let m = mean(xs)?;
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    Some(var.sqrt())
}

/// Median, reordering `buf` in place.
pub(crate) fn median_in_place(buf: &mut [f64]) -> Option<f64> {
    let n = buf.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    buf.select_nth_unstable_by(mid, f64::total_cmp);
    let upper = buf[mid];
    if n % 2 == 1 {
        return Some(upper);
    }
    let lower = buf[..mid].iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(0.5 * (lower + upper))
}

pub(crate) fn median(xs: &[f64]) -> Option<f64> {
    let mut buf = xs.to_vec();
    median_in_place(&mut buf)
}

/// Centre and scale of `xs` according to `estimator`.
///
/// The MAD is rescaled by [`MAD_TO_SIGMA`] so both estimators share units.
pub(crate) fn centre_scale(xs: &[f64], estimator: Estimator) -> Option<(f64, f64)> {
    match estimator {
        Estimator::MeanStd => Some((mean(xs)?, std_dev(xs)?)),
        Estimator::MedianMad => {
            let mut buf = xs.to_vec();
            let med = median_in_place(&mut buf)?;
            for v in &mut buf {
                *v = (*v - med).abs();
            }
            let mad = median_in_place(&mut buf)?;
            Some((med, MAD_TO_SIGMA * mad))
        }
    }
}

/// Symmetric Hann window of length `m`: `0.5 - 0.5 cos(2πk / (m - 1))`.
pub(crate) fn hann(m: usize) -> Vec<f64> {
    if m == 1 {
        return vec![1.0];
    }
    let denom = (m - 1) as f64;
    (0..m)
        .map(|k| 0.5 - 0.5 * (2.0 * core::f64::consts::PI * k as f64 / denom).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_handles_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn mean_of_huge_values_does_not_overflow() {
        let m = mean(&[1e308, 1e308, 1.0]).unwrap();
        assert!(m.is_finite());
        assert!((m / (1e308 / 3.0 * 2.0) - 1.0).abs() < 1e-12);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn mad_scale_of_symmetric_sample() {
        let (c, s) = centre_scale(&[1.0, 2.0, 3.0, 4.0, 5.0], Estimator::MedianMad).unwrap();
        assert_eq!(c, 3.0);
        assert!((s - MAD_TO_SIGMA).abs() < 1e-12);
    }

    #[test]
    fn hann_matches_reference_values() {
        let w = hann(5);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, b) in w.iter().zip(expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
