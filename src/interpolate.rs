//! One dimensional interpolants over strictly increasing abscissae.
//!
//! Both interpolants locate the interval containing a query value with
//! [`preceding_index_search`] and are evaluated one value at a time or over a whole grid with
//! [`linspace`].

use crate::algorithms::{preceding_index_search, strictly_increasing};
use crate::errors::{Result, RibError};

/// `count` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

fn check_samples(x: &[f64], y: &[f64], what: &str) -> Result<()> {
    if x.len() != y.len() {
        return Err(RibError::degenerate(format!(
            "{what}: {} abscissae but {} ordinates",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(RibError::degenerate(format!(
            "{what}: at least two samples are required, found {}",
            x.len()
        )));
    }
    if !strictly_increasing(x) {
        return Err(RibError::degenerate(format!(
            "{what}: abscissae are not strictly increasing"
        )));
    }
    Ok(())
}

/// Piecewise linear interpolation. Queries outside the sample range take the nearest end value.
pub struct Linear {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Linear {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        check_samples(x, y, "linear interpolant")?;
        Ok(Linear {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    pub fn at(&self, q: f64) -> f64 {
        let last = self.x.len() - 1;
        if q <= self.x[0] {
            return self.y[0];
        }
        if q >= self.x[last] {
            return self.y[last];
        }

        let i = preceding_index_search(&self.x, q);
        let f = (q - self.x[i]) / (self.x[i + 1] - self.x[i]);
        self.y[i] + f * (self.y[i + 1] - self.y[i])
    }

    pub fn sample(&self, qs: &[f64]) -> Vec<f64> {
        qs.iter().map(|q| self.at(*q)).collect()
    }
}

/// Monotone piecewise cubic Hermite interpolation (PCHIP).
///
/// Derivatives at interior samples are the weighted harmonic mean of the neighbouring secant
/// slopes, or zero where the data changes direction, so the interpolant never overshoots the
/// samples. End derivatives use the one sided three point estimate, limited to keep the same
/// shape preserving property.
pub struct Pchip {
    x: Vec<f64>,
    y: Vec<f64>,
    d: Vec<f64>,
}

fn edge_derivative(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if d.signum() != m0.signum() || m0 == 0.0 {
        0.0
    } else if m0.signum() != m1.signum() && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

impl Pchip {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        check_samples(x, y, "monotone cubic interpolant")?;

        let n = x.len();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let m: Vec<f64> = y
            .windows(2)
            .zip(h.iter())
            .map(|(w, hk)| (w[1] - w[0]) / hk)
            .collect();

        let mut d = vec![0.0; n];
        if n == 2 {
            d[0] = m[0];
            d[1] = m[0];
        } else {
            for k in 1..n - 1 {
                let (m0, m1) = (m[k - 1], m[k]);
                if m0 == 0.0 || m1 == 0.0 || m0.signum() != m1.signum() {
                    d[k] = 0.0;
                } else {
                    let w1 = 2.0 * h[k] + h[k - 1];
                    let w2 = h[k] + 2.0 * h[k - 1];
                    d[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
                }
            }
            d[0] = edge_derivative(h[0], h[1], m[0], m[1]);
            d[n - 1] = edge_derivative(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
        }

        Ok(Pchip {
            x: x.to_vec(),
            y: y.to_vec(),
            d,
        })
    }

    /// Evaluates the interpolant. Queries outside the sample range extend the end cubic.
    pub fn at(&self, q: f64) -> f64 {
        let i = preceding_index_search(&self.x, q).min(self.x.len() - 2);
        let h = self.x[i + 1] - self.x[i];
        let t = (q - self.x[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * self.y[i] + h10 * h * self.d[i] + h01 * self.y[i + 1] + h11 * h * self.d[i + 1]
    }

    pub fn sample(&self, qs: &[f64]) -> Vec<f64> {
        qs.iter().map(|q| self.at(*q)).collect()
    }
}
