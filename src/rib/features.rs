//! Pure generators for the holes and marks cut into a rib. Nothing here touches a drawing sink;
//! every function returns geometry and the caller decides when to emit it.

use super::{BeamHole, RearSpar, Stringer};
use crate::airfoil::{Airfoil, SurfaceSide};
use crate::drawing::Primitive;
use crate::errors::{Result, RibError};
use crate::geometry::distances2::{direct, divide, heading};
use crate::geometry::shapes2::Circle2;
use ncollide2d::na::Point2;
use ncollide2d::query::Ray;
use std::f64::consts::{FRAC_PI_2, PI};

/// A circular hole with its construction marks
#[derive(Clone, Debug)]
pub struct Hole {
    pub circle: Circle2,
    pub marks: Vec<[Point2<f64>; 2]>,
}

impl Hole {
    pub fn center(&self) -> Point2<f64> {
        self.circle.center
    }

    pub fn diameter(&self) -> f64 {
        self.circle.radius() * 2.0
    }

    /// The circle followed by each mark as a two point polyline
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut result = vec![Primitive::circle(self.circle.clone())];
        result.extend(self.marks.iter().map(|m| Primitive::segment(m[0], m[1])));
        result
    }
}

fn checked_circle(center: Point2<f64>, diameter: f64, what: &str) -> Result<Circle2> {
    if !(diameter.is_finite() && diameter > 0.0) {
        return Err(RibError::degenerate(format!(
            "{what} diameter must be positive, got {diameter}"
        )));
    }
    Ok(Circle2::from_diameter(center, diameter))
}

/// A line through `center` reaching `half_len` to either side along `theta`, starting on the side
/// opposite to `theta`
fn center_line(center: Point2<f64>, half_len: f64, theta: f64) -> [Point2<f64>; 2] {
    let ray = Ray::new(center, direct(half_len, theta));
    [ray.point_at(-1.0), ray.point_at(1.0)]
}

/// Places the main beam hole halfway between the rib surfaces at `beam.x` of the chord.
///
/// The marks are a reference line parallel to the chord running from ahead of the leading edge
/// to behind the trailing edge, and a line square to it spanning twice the local rib thickness.
pub fn beam_hole(rib_outline: &Airfoil, chord: f64, aoa: f64, beam: &BeamHole) -> Result<Hole> {
    let x = beam.x * chord;
    let upper_y = rib_outline.surface_y_at(SurfaceSide::Upper, x)?;
    let lower_y = rib_outline.surface_y_at(SurfaceSide::Lower, x)?;
    let center = Point2::new(x, (upper_y + lower_y) / 2.0);
    let circle = checked_circle(center, beam.diameter, "beam hole")?;

    let aoa = aoa.to_radians();
    let left = center + direct(1.2 * x, aoa + PI);
    let chord_line = Ray::new(left, direct(1.2 * chord, aoa));
    let thickness = upper_y - lower_y;

    Ok(Hole {
        circle,
        marks: vec![
            [left, chord_line.point_at(1.0)],
            center_line(center, thickness, aoa - FRAC_PI_2),
        ],
    })
}

/// Places the rear spar hole at the spar's polar offset from the beam hole center, marked with a
/// cross aligned to the chord
pub fn rear_spar_hole(beam_center: &Point2<f64>, aoa: f64, spar: &RearSpar) -> Result<Hole> {
    let center = *beam_center + direct(spar.dist, spar.theta);
    let circle = checked_circle(center, spar.diameter, "rear spar hole")?;

    let aoa = aoa.to_radians();
    Ok(Hole {
        circle,
        marks: vec![
            center_line(center, spar.diameter, aoa),
            center_line(center, spar.diameter, aoa - FRAC_PI_2),
        ],
    })
}

/// Places the bracing wire holes on the line between the beam and rear spar centers, at `pos` and
/// at its mirror `1 - pos`. A position of exactly one half gives a single hole.
pub fn bracing_holes(
    beam_center: &Point2<f64>,
    spar_center: &Point2<f64>,
    pos: f64,
    diameter: f64,
) -> Result<Vec<Circle2>> {
    let mut fractions = vec![pos];
    if pos != 0.5 {
        fractions.push(1.0 - pos);
    }

    fractions
        .into_iter()
        .map(|f| checked_circle(divide(beam_center, spar_center, f), diameter, "bracing hole"))
        .collect()
}

/// The rib name, written just below the beam hole and rotated with the chord
pub fn name_label(name: &str, beam: &Hole, aoa: f64) -> Primitive {
    let aoa_rad = aoa.to_radians();
    let position = beam.center() + direct(beam.diameter(), aoa_rad - FRAC_PI_2);
    Primitive::text(name, position, aoa)
}

/// Computes the notch for a T shaped stringer as eight open polyline vertices.
///
/// The notch is pinned to the rib outline where the stringer sits and aligned with the outline
/// segment there. It is traced from one side of the tangential leg around the normal leg to the
/// other side, always cutting into the rib.
pub fn stringer_hole(
    rib_outline: &Airfoil,
    chord: f64,
    stringer: &Stringer,
) -> Result<Vec<Point2<f64>>> {
    let site = &stringer.site;
    let x = chord * site.fraction;
    let (left, right) = rib_outline.bracketing_points(site.side, x)?;
    let pinned = divide(&left, &right, (x - left.x) / (right.x - left.x));
    let theta = heading(&(right - left));

    let s = match site.side {
        SurfaceSide::Upper => 1.0,
        SurfaceSide::Lower => -1.0,
    };
    let d = &stringer.dims;
    let flange = (d.tan_width - d.norm_thickness) / 2.0;
    let steps = [
        (d.tan_width / 2.0, theta + PI),
        (d.tan_thickness, theta - s * FRAC_PI_2),
        (flange, theta),
        (d.norm_width, theta - s * FRAC_PI_2),
        (d.norm_thickness, theta),
        (d.norm_width, theta + s * FRAC_PI_2),
        (flange, theta),
        (d.tan_thickness, theta + s * FRAC_PI_2),
    ];

    Ok(steps
        .iter()
        .scan(pinned, |p, (dist, angle)| {
            *p += direct(*dist, *angle);
            Some(*p)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rib::{StringerDims, StringerSite};
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn flat_plate(chord: usize, h: f64) -> Airfoil {
        let mut points: Vec<Point2<f64>> = (1..=chord)
            .rev()
            .map(|x| Point2::new(x as f64, h))
            .collect();
        points.push(Point2::new(0.0, 0.0));
        points.extend((1..=chord).map(|x| Point2::new(x as f64, -h)));
        Airfoil::new(points).unwrap()
    }

    fn assert_point(e: (f64, f64), p: &Point2<f64>) {
        assert_relative_eq!(e.0, p.x, epsilon = 1e-9);
        assert_relative_eq!(e.1, p.y, epsilon = 1e-9);
    }

    fn dims() -> StringerDims {
        StringerDims {
            tan_thickness: 1.0,
            tan_width: 10.0,
            norm_thickness: 2.0,
            norm_width: 4.0,
        }
    }

    #[test]
    fn test_beam_hole_on_flat_plate() {
        let plate = flat_plate(100, 5.0);
        let beam = BeamHole {
            x: 0.3,
            diameter: 10.0,
        };
        let hole = beam_hole(&plate, 100.0, 0.0, &beam).unwrap();

        assert_point((30.0, 0.0), &hole.center());
        assert_relative_eq!(5.0, hole.circle.radius());
        assert_point((-6.0, 0.0), &hole.marks[0][0]);
        assert_point((114.0, 0.0), &hole.marks[0][1]);
        assert_point((30.0, 10.0), &hole.marks[1][0]);
        assert_point((30.0, -10.0), &hole.marks[1][1]);
        assert_eq!(3, hole.primitives().len());
    }

    #[test]
    fn test_beam_hole_outside_outline() {
        let plate = flat_plate(100, 5.0);
        let beam = BeamHole {
            x: 1.3,
            diameter: 10.0,
        };
        assert!(matches!(
            beam_hole(&plate, 100.0, 0.0, &beam),
            Err(RibError::GeometryDegenerate(_))
        ));
    }

    #[test_case(0.0, (30.0, 0.0))]
    #[test_case(6.0, (29.835_656_9, -3.135_853_9))]
    #[test_case(90.0, (0.0, -30.0))]
    #[test_case(-90.0, (0.0, 30.0))]
    fn test_rear_spar_polar_offset(angle: f64, e: (f64, f64)) {
        let spar = RearSpar::new(10.0, 30.0, angle);
        let hole = rear_spar_hole(&Point2::new(0.0, 0.0), 0.0, &spar).unwrap();
        assert_relative_eq!(e.0, hole.center().x, epsilon = 1e-6);
        assert_relative_eq!(e.1, hole.center().y, epsilon = 1e-6);
    }

    #[test]
    fn test_rear_spar_cross_follows_aoa() {
        let spar = RearSpar::new(6.0, 30.0, 0.0);
        let hole = rear_spar_hole(&Point2::new(0.0, 0.0), 90.0, &spar).unwrap();
        assert_point((30.0, -6.0), &hole.marks[0][0]);
        assert_point((30.0, 6.0), &hole.marks[0][1]);
        assert_point((24.0, 0.0), &hole.marks[1][0]);
        assert_point((36.0, 0.0), &hole.marks[1][1]);
    }

    #[test_case(0.4, vec![(4.0, 0.0), (6.0, 0.0)])]
    #[test_case(0.5, vec![(5.0, 0.0)])]
    #[test_case(0.0, vec![(0.0, 0.0), (10.0, 0.0)])]
    fn test_bracing_holes(pos: f64, e: Vec<(f64, f64)>) {
        let holes =
            bracing_holes(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0), pos, 2.0).unwrap();
        assert_eq!(e.len(), holes.len());
        for (ep, h) in e.iter().zip(holes.iter()) {
            assert_point(*ep, &h.center);
            assert_relative_eq!(1.0, h.radius());
        }
    }

    #[test]
    fn test_zero_diameter_is_degenerate() {
        assert!(bracing_holes(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0), 0.4, 0.0).is_err());
    }

    #[test]
    fn test_upper_stringer_cuts_down() {
        let plate = flat_plate(100, 5.0);
        let stringer = Stringer::new(dims(), StringerSite::from_signed(0.5));
        let nodes = stringer_hole(&plate, 100.0, &stringer).unwrap();

        let expected = [
            (45.0, 5.0),
            (45.0, 4.0),
            (49.0, 4.0),
            (49.0, 0.0),
            (51.0, 0.0),
            (51.0, 4.0),
            (55.0, 4.0),
            (55.0, 5.0),
        ];
        assert_eq!(8, nodes.len());
        for (e, p) in expected.iter().zip(nodes.iter()) {
            assert_point(*e, p);
        }
    }

    #[test]
    fn test_lower_stringer_cuts_up() {
        let plate = flat_plate(100, 5.0);
        let stringer = Stringer::new(dims(), StringerSite::from_signed(-0.255));
        let nodes = stringer_hole(&plate, 100.0, &stringer).unwrap();

        assert_point((20.5, -5.0), &nodes[0]);
        assert_point((20.5, -4.0), &nodes[1]);
        assert_point((24.5, 0.0), &nodes[3]);
        assert_point((30.5, -5.0), &nodes[7]);
    }

    /// Upper surface y = 0.1x and lower surface y = -0.1x, sampled every unit of x
    fn wedge(chord: usize) -> Airfoil {
        let mut points: Vec<Point2<f64>> = (1..=chord)
            .rev()
            .map(|x| Point2::new(x as f64, 0.1 * x as f64))
            .collect();
        points.push(Point2::new(0.0, 0.0));
        points.extend((1..=chord).map(|x| Point2::new(x as f64, -0.1 * x as f64)));
        Airfoil::new(points).unwrap()
    }

    #[test_case(0.45, (40.0248, 4.0025), (44.5025, -0.5747), (49.9752, 4.9975))]
    #[test_case(-0.45, (40.0248, -4.0025), (44.5025, 0.5747), (49.9752, -4.9975))]
    fn test_stringer_follows_sloped_surface(
        position: f64,
        first: (f64, f64),
        fourth: (f64, f64),
        last: (f64, f64),
    ) {
        let stringer = Stringer::new(dims(), StringerSite::from_signed(position));
        let nodes = stringer_hole(&wedge(100), 100.0, &stringer).unwrap();

        assert_eq!(8, nodes.len());
        for (e, p) in [(first, nodes[0]), (fourth, nodes[3]), (last, nodes[7])] {
            assert_relative_eq!(e.0, p.x, epsilon = 1e-4);
            assert_relative_eq!(e.1, p.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_stringer_past_trailing_edge() {
        let plate = flat_plate(100, 5.0);
        let stringer = Stringer::new(dims(), StringerSite::from_signed(1.0));
        assert!(stringer_hole(&plate, 100.0, &stringer).is_err());
    }

    #[test]
    fn test_name_label_below_beam() {
        let hole = Hole {
            circle: Circle2::new(30.0, 0.0, 5.0),
            marks: Vec::new(),
        };
        match name_label("R1", &hole, 0.0) {
            Primitive::Text {
                content,
                position,
                rotation,
            } => {
                assert_eq!("R1", content);
                assert_point((30.0, -10.0), &position);
                assert_relative_eq!(0.0, rotation);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
