//! Deterministic synthetic time series for tsprep tests and demos.
//!
//! Two sources are available: small named fixtures ([`fixture`]) and a seeded
//! generator ([`MockSeries`]) that produces noisy, jittered series with
//! injected gaps, outliers and large uncertainties at known indices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

mod fixtures;

/// An owned synthetic series with uncertainties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fixture {
    /// Timestamps, ascending.
    pub times: Vec<f64>,
    /// Values.
    pub values: Vec<f64>,
    /// Uncertainties (all positive).
    pub uncertainties: Vec<f64>,
}

impl Fixture {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if the fixture has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Look up a named fixture: `two_segments`, `constant`, `spike`, `clustered`.
#[must_use]
pub fn fixture(name: &str) -> Option<Fixture> {
    fixtures::by_name(name)
}

/// Deviation injected at a fixed index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anomaly {
    /// Add this offset to the value.
    Outlier(f64),
    /// Multiply the uncertainty by this factor.
    LargeUncertainty(f64),
    /// Shift this point and all later ones by this much time.
    Gap(f64),
}

/// Seeded generator for synthetic series.
///
/// The same seed and settings always yield the same series.
#[derive(Debug, Clone)]
pub struct MockSeries {
    seed: u64,
    points: usize,
    cadence: f64,
    jitter: f64,
    level: f64,
    amplitude: f64,
    period: f64,
    noise: f64,
    anomalies: Vec<(usize, Anomaly)>,
}

impl MockSeries {
    /// Start a generator with 100 points at unit cadence and mild noise.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            points: 100,
            cadence: 1.0,
            jitter: 0.0,
            level: 10.0,
            amplitude: 1.0,
            period: 25.0,
            noise: 0.1,
            anomalies: Vec::new(),
        }
    }

    /// Number of points.
    #[must_use]
    pub const fn points(mut self, n: usize) -> Self {
        self.points = n;
        self
    }

    /// Nominal time between points.
    #[must_use]
    pub const fn cadence(mut self, dt: f64) -> Self {
        self.cadence = dt;
        self
    }

    /// Random timing jitter as a fraction of the cadence, in `[0, 0.5)`.
    #[must_use]
    pub const fn jitter(mut self, fraction: f64) -> Self {
        self.jitter = fraction;
        self
    }

    /// Sinusoid level, amplitude and period.
    #[must_use]
    pub const fn signal(mut self, level: f64, amplitude: f64, period: f64) -> Self {
        self.level = level;
        self.amplitude = amplitude;
        self.period = period;
        self
    }

    /// Standard deviation of the Gaussian noise; also the nominal uncertainty.
    #[must_use]
    pub const fn noise(mut self, sigma: f64) -> Self {
        self.noise = sigma;
        self
    }

    /// Inject an anomaly at `index`. Indices past the end are ignored.
    #[must_use]
    pub fn anomaly(mut self, index: usize, anomaly: Anomaly) -> Self {
        self.anomalies.push((index, anomaly));
        self
    }

    /// Generate the series.
    #[must_use]
    pub fn build(&self) -> Fixture {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let jitter = self.jitter.clamp(0.0, 0.49) * self.cadence;

        let mut times = Vec::with_capacity(self.points);
        let mut values = Vec::with_capacity(self.points);
        let mut uncertainties = Vec::with_capacity(self.points);
        let mut shift = 0.0_f64;

        for i in 0..self.points {
            for (_, a) in self.anomalies.iter().filter(|(idx, _)| *idx == i) {
                if let Anomaly::Gap(dt) = *a {
                    shift += dt;
                }
            }
            let offset = if jitter > 0.0 {
                rng.random_range(-jitter..jitter)
            } else {
                0.0
            };
            let t = (i as f64).mul_add(self.cadence, shift + offset);
            let phase = 2.0 * std::f64::consts::PI * t / self.period;
            let z: f64 = StandardNormal.sample(&mut rng);
            let mut v = self.amplitude.mul_add(phase.sin(), self.level) + self.noise * z;
            let mut u = self.noise * rng.random_range(0.8..1.2);

            for (_, a) in self.anomalies.iter().filter(|(idx, _)| *idx == i) {
                match *a {
                    Anomaly::Outlier(dv) => v += dv,
                    Anomaly::LargeUncertainty(k) => u *= k,
                    Anomaly::Gap(_) => {}
                }
            }

            times.push(t);
            values.push(v);
            uncertainties.push(u);
        }

        Fixture {
            times,
            values,
            uncertainties,
        }
    }
}
