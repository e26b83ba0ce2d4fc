use crate::errors::{Result, RibError};
use crate::geometry::common::{side_normal, Side, UnitVec2};
use ncollide2d::na::{Point2, Unit, Vector2};

const TANGENT_TOL: f64 = 1e-12;

fn unit_tangent(v: Vector2<f64>, i: usize) -> Result<UnitVec2> {
    Unit::try_new(v, TANGENT_TOL)
        .ok_or_else(|| RibError::degenerate(format!("zero length tangent at vertex {i}")))
}

/// Estimates the unit tangent at each vertex of an open polyline. Interior vertices use the
/// central difference of their neighbours, the two end vertices use their single adjacent edge.
pub fn tangents(points: &[Point2<f64>]) -> Result<Vec<UnitVec2>> {
    let n = points.len();
    if n < 2 {
        return Err(RibError::degenerate(format!(
            "cannot estimate tangents on a polyline with {n} points"
        )));
    }

    (0..n)
        .map(|i| {
            let (a, b) = if i == 0 {
                (0, 1)
            } else if i == n - 1 {
                (n - 2, n - 1)
            } else {
                (i - 1, i + 1)
            };
            unit_tangent(points[b] - points[a], i)
        })
        .collect()
}

/// Builds a polyline parallel to `points` by moving every vertex `distance` along its local
/// normal on the given side. The result has the same number of vertices as the input.
///
/// This is a first order offset: there are no miter or round joins and no self intersection
/// removal, so tight concave corners under large distances can fold over themselves.
pub fn offset(points: &[Point2<f64>], distance: f64, side: Side) -> Result<Vec<Point2<f64>>> {
    let t = tangents(points)?;
    Ok(points
        .iter()
        .zip(t.iter())
        .map(|(p, d)| *p + side_normal(d, side).into_inner() * distance)
        .collect())
}
