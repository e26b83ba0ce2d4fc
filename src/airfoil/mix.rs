use super::{Airfoil, SurfaceSide};
use crate::errors::{Result, RibError};
use crate::interpolate::{linspace, Linear};
use itertools::Itertools;
use ncollide2d::na::Point2;

/// Number of chordwise stations on the common grid used for blending
pub const NUM_POINTS_FOR_MIX: usize = 90;

fn surface_interpolant(airfoil: &Airfoil, side: SurfaceSide, label: &str) -> Result<Linear> {
    let points = airfoil.surface_forward(side);
    let x = points.iter().map(|p| p.x).collect_vec();
    let y = points.iter().map(|p| p.y).collect_vec();
    Linear::new(&x, &y).map_err(|e| {
        RibError::degenerate(format!("{label} {side:?} surface cannot be blended: {e}"))
    })
}

/// Blends two airfoils into a new one. Both surfaces of each airfoil are resampled at
/// `NUM_POINTS_FOR_MIX` evenly spaced chord fractions on [0, 1] and their y values are linearly
/// blended, so that a ratio of 0.0 gives back `a` and a ratio of 1.0 gives back `b` on the grid.
///
/// Each surface must have strictly increasing x from the leading edge to the trailing edge.
pub fn mix(a: &Airfoil, b: &Airfoil, ratio: f64) -> Result<Airfoil> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(RibError::degenerate(format!(
            "mix ratio {ratio} is outside [0, 1]"
        )));
    }

    let qx = linspace(0.0, 1.0, NUM_POINTS_FOR_MIX);
    let upper_a = surface_interpolant(a, SurfaceSide::Upper, "first")?.sample(&qx);
    let upper_b = surface_interpolant(b, SurfaceSide::Upper, "second")?.sample(&qx);
    let lower_a = surface_interpolant(a, SurfaceSide::Lower, "first")?.sample(&qx);
    let lower_b = surface_interpolant(b, SurfaceSide::Lower, "second")?.sample(&qx);

    let blend = |ya: &[f64], yb: &[f64]| -> Vec<f64> {
        ya.iter()
            .zip(yb.iter())
            .map(|(u, v)| (1.0 - ratio) * u + ratio * v)
            .collect()
    };
    let upper_y = blend(&upper_a, &upper_b);
    let lower_y = blend(&lower_a, &lower_b);

    // Upper surface from the trailing edge to the leading edge, then the lower surface without
    // repeating the shared leading edge point
    let upper = qx
        .iter()
        .zip(upper_y.iter())
        .rev()
        .map(|(x, y)| Point2::new(*x, *y));
    let lower = qx
        .iter()
        .zip(lower_y.iter())
        .skip(1)
        .map(|(x, y)| Point2::new(*x, *y));

    Airfoil::new(upper.chain(lower).collect())
}
