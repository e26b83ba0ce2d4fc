//! Wing ribs and the drafting of their drawings.

use crate::airfoil::mix::mix;
use crate::airfoil::{Airfoil, SurfaceSide};
use crate::drawing::DrawingSink;
use crate::errors::{Result, RibError};
use serde::Deserialize;
use std::borrow::Cow;

pub mod collection;
pub mod features;
pub mod outline;
pub mod stages;

pub use collection::{AirfoilCatalog, RibCollection, RibReport};
pub use stages::{Braced, RibGeometry};

/// The airfoil a rib is cut from, either taken straight from the catalog or blended from two
#[derive(Clone, Debug, PartialEq)]
pub enum AirfoilSelection {
    Single(String),
    Mixed {
        first: String,
        second: String,
        ratio: f64,
    },
}

impl AirfoilSelection {
    pub fn names(&self) -> Vec<&str> {
        match self {
            AirfoilSelection::Single(name) => vec![name.as_str()],
            AirfoilSelection::Mixed { first, second, .. } => vec![first.as_str(), second.as_str()],
        }
    }

    fn lookup<'a>(catalog: &'a AirfoilCatalog, name: &str) -> Result<&'a Airfoil> {
        catalog.get(name).ok_or_else(|| RibError::lookup(name))
    }

    /// Finds the airfoil in the catalog, blending a new one if two are named
    pub fn resolve<'a>(&self, catalog: &'a AirfoilCatalog) -> Result<Cow<'a, Airfoil>> {
        match self {
            AirfoilSelection::Single(name) => Ok(Cow::Borrowed(Self::lookup(catalog, name)?)),
            AirfoilSelection::Mixed {
                first,
                second,
                ratio,
            } => {
                let a = Self::lookup(catalog, first)?;
                let b = Self::lookup(catalog, second)?;
                Ok(Cow::Owned(mix(a, b, *ratio)?))
            }
        }
    }
}

/// The main beam hole, placed at a fraction `x` of the chord midway between the rib surfaces
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeamHole {
    pub x: f64,
    pub diameter: f64,
}

/// The rear spar hole, placed relative to the main beam hole
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RearSpar {
    pub diameter: f64,
    /// Center to center distance from the main beam hole
    pub dist: f64,
    /// Direction from the main beam hole in radians, counter-clockwise from the chord line
    pub theta: f64,
}

impl RearSpar {
    /// Creates a rear spar from a drafting angle in degrees, measured from straight back along the
    /// chord with downwards positive
    pub fn new(diameter: f64, dist: f64, angle_deg: f64) -> RearSpar {
        RearSpar {
            diameter,
            dist,
            theta: -angle_deg.to_radians(),
        }
    }
}

/// Cross section dimensions of a T shaped stringer. The tangential leg lies along the skin and the
/// normal leg points into the rib.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct StringerDims {
    pub tan_thickness: f64,
    pub tan_width: f64,
    pub norm_thickness: f64,
    pub norm_width: f64,
}

/// Where a stringer sits: a surface and a chord fraction along it
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StringerSite {
    pub side: SurfaceSide,
    pub fraction: f64,
}

impl StringerSite {
    /// Decodes the signed position used in rib tables, where a negative fraction marks the lower
    /// surface. Zero is read as the lower surface.
    pub fn from_signed(position: f64) -> StringerSite {
        let side = if position > 0.0 {
            SurfaceSide::Upper
        } else {
            SurfaceSide::Lower
        };
        StringerSite {
            side,
            fraction: position.abs(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stringer {
    pub dims: StringerDims,
    pub site: StringerSite,
}

impl Stringer {
    pub fn new(dims: StringerDims, site: StringerSite) -> Stringer {
        Stringer { dims, site }
    }
}

/// Everything needed to draft one rib
#[derive(Clone, Debug)]
pub struct Rib {
    pub name: String,
    pub airfoil: AirfoilSelection,
    pub chord: f64,
    /// Angle of attack in degrees
    pub aoa: f64,
    pub plank_thickness: f64,
    pub ribcap_thickness: f64,
    /// Chord fraction where the upper plank ends and the rib cap begins
    pub upper_plank_end_x: f64,
    /// Chord fraction where the lower plank ends and the rib cap begins
    pub lower_plank_end_x: f64,
    pub stringers: Vec<Stringer>,
    pub beam_hole: BeamHole,
    pub rearspar: RearSpar,
    /// Fraction along the line from the beam hole to the rear spar hole where the bracing holes
    /// are placed, mirrored about the middle
    pub bracing_hole_pos: f64,
}

impl Rib {
    /// Runs every drafting step without touching a drawing sink
    pub fn draft<'a>(&'a self, catalog: &AirfoilCatalog) -> Result<Braced<'a>> {
        let airfoil = self.airfoil.resolve(catalog)?;
        stages::Empty::new(self)
            .outline_wing(&airfoil)?
            .outline_rib()?
            .drill_beam_hole()?
            .drill_rear_spar_hole()?
            .drill_bracing_holes()
    }

    /// Drafts the rib and hands the result to `sink`, which is saved once everything is emitted
    pub fn draw<S: DrawingSink>(&self, catalog: &AirfoilCatalog, sink: &mut S) -> Result<RibGeometry> {
        self.draft(catalog)?.save(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.3, SurfaceSide::Upper, 0.3)]
    #[test_case(-0.45, SurfaceSide::Lower, 0.45)]
    #[test_case(0.0, SurfaceSide::Lower, 0.0)]
    fn test_stringer_site_from_signed(p: f64, side: SurfaceSide, fraction: f64) {
        let site = StringerSite::from_signed(p);
        assert_eq!(side, site.side);
        assert_relative_eq!(fraction, site.fraction);
    }

    #[test]
    fn test_rear_spar_angle_is_inverted_radians() {
        let spar = RearSpar::new(10.0, 30.0, 6.0);
        assert_relative_eq!(-6.0_f64.to_radians(), spar.theta, epsilon = 1e-15);
    }

    #[test]
    fn test_missing_airfoil_is_lookup_error() {
        let catalog = AirfoilCatalog::new();
        let sel = AirfoilSelection::Mixed {
            first: "a".to_string(),
            second: "b".to_string(),
            ratio: 0.5,
        };
        assert!(matches!(sel.resolve(&catalog), Err(RibError::Lookup(n)) if n == "a"));
        assert_eq!(vec!["a", "b"], sel.names());
    }
}
