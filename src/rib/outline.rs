use crate::airfoil::{Airfoil, Surface};
use crate::errors::{Result, RibError};
use crate::geometry::common::Side;
use crate::geometry::offset::offset;
use log::debug;
use ncollide2d::na::Point2;

/// Offsets a run of points inwards, leaving runs too short to carry a tangent out entirely
fn offset_run(points: &[Point2<f64>], distance: f64) -> Result<Vec<Point2<f64>>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }
    offset(points, distance, Side::Left)
}

/// Builds the rib outline from the scaled wing outline.
///
/// The wing outline runs clockwise (trailing edge, upper surface, leading edge, lower surface),
/// so the left side of travel is the inside of the section. Ahead of the plank ends the outline
/// is pulled in by the plank thickness, behind them by the rib cap thickness. The three offset
/// runs are joined without cleaning up the seams between them.
///
/// # Arguments
///
/// * `upper_end` and `lower_end` - chord fractions where the planking stops on each surface
pub fn build_rib_outline(
    wing_outline: &Airfoil,
    chord: f64,
    plank: f64,
    ribcap: f64,
    upper_end: f64,
    lower_end: f64,
) -> Result<Airfoil> {
    let all = wing_outline.get_points(Surface::All);
    let n = all.len();
    let le = wing_outline.leading_edge_index();

    let upper_threshold = upper_end * chord;
    let lower_threshold = lower_end * chord;

    // Points behind each plank end, counted from the trailing edge
    let iu = wing_outline
        .get_points(Surface::Upper)
        .iter()
        .filter(|p| p.x > upper_threshold)
        .count();
    let kl = wing_outline
        .get_points(Surface::Lower)
        .iter()
        .filter(|p| p.x > lower_threshold)
        .count();

    if iu > le {
        return Err(RibError::degenerate(format!(
            "upper plank end {upper_threshold} is ahead of the leading edge"
        )));
    }
    if kl > n - 1 - le {
        return Err(RibError::degenerate(format!(
            "lower plank end {lower_threshold} is ahead of the leading edge"
        )));
    }
    if iu >= n - kl {
        return Err(RibError::degenerate("the planked front of the rib is empty"));
    }

    let upper_cap = offset_run(&all[..=iu], ribcap)?;
    let front = offset(&all[iu..n - kl], plank, Side::Left)?;
    let lower_cap = offset_run(&all[n - kl - 1..], ribcap)?;

    debug!(
        "rib outline: {} cap, {} planked, {} cap points",
        upper_cap.len(),
        front.len(),
        lower_cap.len()
    );

    let mut points = upper_cap;
    points.extend(front);
    points.extend(lower_cap);
    Airfoil::new(points)
}
