use super::Airfoil;
use crate::algorithms::{argmax, argmin};
use crate::errors::{Result, RibError};
use crate::interpolate::{linspace, Pchip};
use itertools::Itertools;
use log::debug;
use ncollide2d::na::Point2;

/// Number of samples taken along each of the three outline arcs
pub const NUM_POINTS_TO_DRAW_OUTLINE: usize = 200;

/// The three natural arcs of a raw airfoil loop. The leading edge arc runs from the highest to the
/// lowest point and wraps the nose, where x is not a function of y.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Arc {
    RearUpper,
    LeadingEdge,
    RearLower,
}

/// Resamples one arc with a monotone cubic. Returns the arc's points in outline order.
fn resample_arc(raw: &[Point2<f64>], arc: Arc, count: usize) -> Result<Vec<Point2<f64>>> {
    // Abscissa and ordinate as seen by the interpolant, ordered so the abscissa increases
    let (u, v): (Vec<f64>, Vec<f64>) = match arc {
        Arc::RearUpper => raw.iter().rev().map(|p| (p.x, p.y)).unzip(),
        Arc::LeadingEdge => raw.iter().rev().map(|p| (p.y, p.x)).unzip(),
        Arc::RearLower => raw.iter().map(|p| (p.x, p.y)).unzip(),
    };

    let pchip = Pchip::new(&u, &v)
        .map_err(|e| RibError::degenerate(format!("{arc:?} arc cannot be resampled: {e}")))?;
    let qu = linspace(u[0], u[u.len() - 1], count);
    let qv = pchip.sample(&qu);

    let points = qu.iter().zip(qv.iter());
    Ok(match arc {
        Arc::RearUpper => points.rev().map(|(x, y)| Point2::new(*x, *y)).collect_vec(),
        Arc::LeadingEdge => points.rev().map(|(y, x)| Point2::new(*x, *y)).collect_vec(),
        Arc::RearLower => points.map(|(x, y)| Point2::new(*x, *y)).collect_vec(),
    })
}

/// Converts a raw airfoil loop into a smooth, evenly parameterized outline scaled to `chord`.
///
/// The loop is cut at its highest and lowest points into a rear upper arc, a leading edge arc and
/// a rear lower arc. The rear arcs are sampled as y(x) and the leading edge arc as x(y), each at
/// `NUM_POINTS_TO_DRAW_OUTLINE` even stations with a shape preserving cubic so the nose does not
/// ring. The arcs are joined without repeating their shared end points and the trailing edge is
/// closed with the point (1, 0) before scaling, so the last point is exactly `(chord, 0)`.
pub fn resample_outline(airfoil: &Airfoil, chord: f64) -> Result<Airfoil> {
    let raw = airfoil.get_points(super::Surface::All);
    let i_max = argmax(raw.iter().map(|p| p.y)).unwrap_or(0);
    let i_min = argmin(raw.iter().map(|p| p.y)).unwrap_or(0);

    if i_max == 0 || i_max >= i_min || i_min == raw.len() - 1 {
        return Err(RibError::degenerate(format!(
            "highest point {i_max} and lowest point {i_min} do not split the loop into three arcs"
        )));
    }

    let arcs = [
        (Arc::RearUpper, &raw[..=i_max]),
        (Arc::LeadingEdge, &raw[i_max..=i_min]),
        (Arc::RearLower, &raw[i_min..]),
    ];

    let mut points = Vec::with_capacity(3 * (NUM_POINTS_TO_DRAW_OUTLINE - 1) + 1);
    for (arc, section) in arcs.iter() {
        let mut sampled = resample_arc(section, *arc, NUM_POINTS_TO_DRAW_OUTLINE)?;
        // The last point is repeated as the first point of the next arc
        sampled.pop();
        points.extend(sampled);
    }
    points.push(Point2::new(1.0, 0.0));

    debug!(
        "resampled {} raw points into {} outline points",
        raw.len(),
        points.len()
    );

    Ok(Airfoil {
        points: points.into_iter().map(|p| p * chord).collect(),
    })
}
