use crate::algorithms::argmin;
use crate::errors::{Result, RibError};
use ncollide2d::na::Point2;
use std::path::Path;

pub mod generate;
pub mod mix;
pub mod resample;

/// Selects a portion of an airfoil loop. The upper and lower surfaces both include the leading
/// edge point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Surface {
    All,
    Upper,
    Lower,
}

/// One of the two surfaces of an airfoil, used where a feature has to be placed on one of them
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceSide {
    Upper,
    Lower,
}

impl From<SurfaceSide> for Surface {
    fn from(side: SurfaceSide) -> Self {
        match side {
            SurfaceSide::Upper => Surface::Upper,
            SurfaceSide::Lower => Surface::Lower,
        }
    }
}

/// An airfoil section as a single ordered loop of points running from the trailing edge over the
/// upper surface, around the leading edge (the point of minimum x) and back along the lower
/// surface. The order of the points is significant and is never changed after construction.
#[derive(Clone, Debug)]
pub struct Airfoil {
    points: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn new(points: Vec<Point2<f64>>) -> Result<Airfoil> {
        if points.len() < 3 {
            return Err(RibError::degenerate(format!(
                "an airfoil needs at least 3 points, found {}",
                points.len()
            )));
        }
        Ok(Airfoil { points })
    }

    /// Parses a coordinate table: one header line followed by rows of whitespace separated x and
    /// y values. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Airfoil> {
        let mut points = Vec::new();
        for (i, line) in text.lines().enumerate().skip(1) {
            let line_no = i + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 2 {
                return Err(RibError::format(
                    line_no,
                    format!("expected 2 columns, found {}", fields.len()),
                ));
            }

            let mut values = [0.0; 2];
            for (v, f) in values.iter_mut().zip(fields.iter()) {
                *v = f.parse::<f64>().map_err(|_| {
                    RibError::format(line_no, format!("'{f}' is not a number"))
                })?;
            }
            points.push(Point2::new(values[0], values[1]));
        }

        if points.len() < 3 {
            return Err(RibError::format(
                text.lines().count(),
                format!("an airfoil needs at least 3 points, found {}", points.len()),
            ));
        }

        Ok(Airfoil { points })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Airfoil> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Airfoil::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the leading edge, the first point with the minimum x coordinate
    pub fn leading_edge_index(&self) -> usize {
        argmin(self.points.iter().map(|p| p.x)).unwrap_or(0)
    }

    pub fn leading_edge(&self) -> Point2<f64> {
        self.points[self.leading_edge_index()]
    }

    /// Returns the selected portion of the loop. The split is recomputed on every call.
    pub fn get_points(&self, surface: Surface) -> &[Point2<f64>] {
        match surface {
            Surface::All => &self.points,
            Surface::Upper => &self.points[..=self.leading_edge_index()],
            Surface::Lower => &self.points[self.leading_edge_index()..],
        }
    }

    /// The points of one surface ordered from the leading edge towards the trailing edge, which
    /// is the direction of increasing x on a well formed airfoil
    pub fn surface_forward(&self, side: SurfaceSide) -> Vec<Point2<f64>> {
        let mut points = self.get_points(side.into()).to_vec();
        if side == SurfaceSide::Upper {
            points.reverse();
        }
        points
    }

    /// Linearly interpolates the y value of a surface at `x`, using the first edge (walking from
    /// the leading edge backwards) which spans `x`
    pub fn surface_y_at(&self, side: SurfaceSide, x: f64) -> Result<f64> {
        let points = self.surface_forward(side);
        for w in points.windows(2) {
            let (a, b) = (w[0], w[1]);
            if a.x.min(b.x) <= x && x <= a.x.max(b.x) {
                if a.x == b.x {
                    return Ok(a.y);
                }
                let f = (x - a.x) / (b.x - a.x);
                return Ok(a.y + f * (b.y - a.y));
            }
        }

        Err(RibError::degenerate(format!(
            "x = {x} is outside the {side:?} surface"
        )))
    }

    /// Finds the two points which sandwich `x` on a surface: the last point strictly before it
    /// and the first point strictly after it, in leading to trailing edge order
    pub fn bracketing_points(
        &self,
        side: SurfaceSide,
        x: f64,
    ) -> Result<(Point2<f64>, Point2<f64>)> {
        let points = self.surface_forward(side);
        let before = points.iter().rev().find(|p| p.x < x);
        let after = points.iter().find(|p| p.x > x);
        match (before, after) {
            (Some(a), Some(b)) => Ok((*a, *b)),
            _ => Err(RibError::degenerate(format!(
                "no points on the {side:?} surface bracket x = {x}"
            ))),
        }
    }
}
