use super::Airfoil;
use crate::geometry::common::{side_normal, Side};
use crate::geometry::distances2::deviation;
use ncollide2d::na::{Point2, Unit};

const EPSILON: f64 = 1e-3;

/// The camber line point and the matching upper and lower surface points at one chord fraction
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// An AirfoilGenerator is an entity which can generate the x, y position of the mean camber line
/// and the airfoil thickness at fractions of the chord. This provides the information necessary
/// for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the full thickness of the airfoil with respect to the camber line at a fraction from
    /// 0.0 to 1.0
    fn thickness(&self, x: f64) -> f64;

    fn station_at(&self, x: f64) -> CamberStation {
        let x0 = (x - EPSILON).max(0.0);
        let x1 = (x + EPSILON).min(1.0);

        let clx = self.camber_line(x);
        let dir = Unit::new_normalize(self.camber_line(x1) - self.camber_line(x0));
        let n = side_normal(&dir, Side::Left).into_inner();
        let t = self.thickness(x);

        CamberStation::new(clx, clx + n * (t / 2.0), clx - n * (t / 2.0))
    }

    /// Adaptively places stations until linear interpolation between neighbours stays within the
    /// tolerance, then assembles them into a single loop running from the trailing edge over the
    /// upper surface to the leading edge and back along the lower surface.
    fn generate(&self, tol: Option<f64>) -> Airfoil {
        let tol_value = tol.unwrap_or(1e-6);

        let mut stations: Vec<CamberStation> = Vec::new();
        let mut fractions: Vec<f64> = Vec::new();
        fractions.push(0.0);
        fractions.push(1.0);
        stations.push(self.station_at(0.0));
        stations.push(self.station_at(1.0));

        let mut index: usize = 0;
        while index < stations.len() - 1 {
            let x0 = &fractions[index];
            let x1 = &fractions[index + 1];

            let s0 = &stations[index];
            let s1 = &stations[index + 1];

            let x = (x0 + x1) / 2.0;
            let s = self.station_at(x);
            if deviation(&s0.upper, &s1.upper, &s.upper) < tol_value
                && deviation(&s0.lower, &s1.lower, &s.lower) < tol_value
                && deviation(&s0.camber, &s1.camber, &s.camber) < tol_value
            {
                index += 1;
            } else {
                fractions.insert(index + 1, x);
                stations.insert(index + 1, s);
            }
        }

        let mut points: Vec<Point2<f64>> = stations.iter().rev().map(|s| s.upper).collect();
        points.extend(stations.iter().skip(1).map(|s| s.lower));
        Airfoil { points }
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
pub struct Naca4Digit {
    t: f64,
    chord_len: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `chord_len` - the actual length of the airfoil chord
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, chord_len: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            chord_len,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    /// Parses a designation such as `naca2412` or `NACA0012` into a unit chord generator
    pub fn from_designation(name: &str) -> Option<Naca4Digit> {
        let lower = name.trim().to_ascii_lowercase();
        let digits = lower.strip_prefix("naca")?.trim_start();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let d: Vec<f64> = digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(f64::from)
            .collect();
        let t = (d[2] * 10.0 + d[3]) / 100.0;
        if t <= 0.0 {
            return None;
        }

        Some(Naca4Digit::new(t, 1.0, d[0] / 100.0, d[1] / 10.0))
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Point2<f64> {
        let y = if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powf(2.0)) * (2.0 * self.p * x - x.powf(2.0))
        } else {
            (self.m / (1.0 - self.p).powf(2.0))
                * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powf(2.0))
        };

        Point2::new(x * self.chord_len, y * self.chord_len)
    }

    fn thickness(&self, x: f64) -> f64 {
        (2.0 * self.t * self.chord_len)
            * (1.485 * x.sqrt()
                + -0.630 * x
                + -1.758 * x.powf(2.0)
                + 1.4215 * x.powf(3.0)
                + -0.5075 * x.powf(4.0))
    }
}
