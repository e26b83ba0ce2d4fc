//! The drafting sequence of a single rib as a chain of typed states.
//!
//! Each step consumes the previous state and returns the next one, so a step can only run once
//! everything it depends on exists. The states collect drawing primitives in the order they are
//! meant to appear in the output, and nothing reaches a sink until [`Braced::save`].

use super::features::{self, Hole};
use super::outline::build_rib_outline;
use super::Rib;
use crate::airfoil::resample::resample_outline;
use crate::airfoil::{Airfoil, Surface};
use crate::drawing::{DrawingSink, Primitive};
use crate::errors::Result;
use crate::geometry::shapes2::Circle2;
use crate::serialize::{point_seq, Point2f64};
use log::debug;
use ncollide2d::na::Point2;
use serde::Serialize;

pub struct Empty<'a> {
    rib: &'a Rib,
}

impl<'a> Empty<'a> {
    pub fn new(rib: &'a Rib) -> Empty<'a> {
        Empty { rib }
    }

    /// Resamples the airfoil into the wing outline at full chord and draws it with the chord line
    pub fn outline_wing(self, airfoil: &Airfoil) -> Result<OutlineComputed<'a>> {
        let wing_outline = resample_outline(airfoil, self.rib.chord)?;
        let points = wing_outline.get_points(Surface::All);
        let primitives = vec![
            Primitive::polyline(points.to_vec()),
            Primitive::segment(Point2::origin(), points[0]),
        ];
        debug!("{}: wing outline computed", self.rib.name);

        Ok(OutlineComputed {
            rib: self.rib,
            primitives,
            wing_outline,
        })
    }
}

pub struct OutlineComputed<'a> {
    rib: &'a Rib,
    primitives: Vec<Primitive>,
    pub wing_outline: Airfoil,
}

impl<'a> OutlineComputed<'a> {
    /// Insets the wing outline by the skin thicknesses and notches it for each stringer
    pub fn outline_rib(self) -> Result<RibOutlined<'a>> {
        let rib = self.rib;
        let rib_outline = build_rib_outline(
            &self.wing_outline,
            rib.chord,
            rib.plank_thickness,
            rib.ribcap_thickness,
            rib.upper_plank_end_x,
            rib.lower_plank_end_x,
        )?;

        let mut primitives = self.primitives;
        primitives.push(Primitive::polyline(
            rib_outline.get_points(Surface::All).to_vec(),
        ));
        for stringer in rib.stringers.iter() {
            let nodes = features::stringer_hole(&rib_outline, rib.chord, stringer)?;
            primitives.push(Primitive::polyline(nodes));
        }
        debug!(
            "{}: rib outlined with {} stringer holes",
            rib.name,
            rib.stringers.len()
        );

        Ok(RibOutlined {
            rib,
            primitives,
            wing_outline: self.wing_outline,
            rib_outline,
        })
    }
}

pub struct RibOutlined<'a> {
    rib: &'a Rib,
    primitives: Vec<Primitive>,
    pub wing_outline: Airfoil,
    pub rib_outline: Airfoil,
}

impl<'a> RibOutlined<'a> {
    /// Places the main beam hole and labels the rib beneath it
    pub fn drill_beam_hole(self) -> Result<BeamHoled<'a>> {
        let rib = self.rib;
        let beam = features::beam_hole(&self.rib_outline, rib.chord, rib.aoa, &rib.beam_hole)?;

        let mut primitives = self.primitives;
        primitives.extend(beam.primitives());
        primitives.push(features::name_label(&rib.name, &beam, rib.aoa));
        debug!("{}: beam hole at {:?}", rib.name, beam.center());

        Ok(BeamHoled {
            rib,
            primitives,
            wing_outline: self.wing_outline,
            rib_outline: self.rib_outline,
            beam,
        })
    }
}

pub struct BeamHoled<'a> {
    rib: &'a Rib,
    primitives: Vec<Primitive>,
    pub wing_outline: Airfoil,
    pub rib_outline: Airfoil,
    pub beam: Hole,
}

impl<'a> BeamHoled<'a> {
    pub fn drill_rear_spar_hole(self) -> Result<SparHoled<'a>> {
        let rib = self.rib;
        let spar = features::rear_spar_hole(&self.beam.center(), rib.aoa, &rib.rearspar)?;

        let mut primitives = self.primitives;
        primitives.extend(spar.primitives());
        debug!("{}: rear spar hole at {:?}", rib.name, spar.center());

        Ok(SparHoled {
            rib,
            primitives,
            wing_outline: self.wing_outline,
            rib_outline: self.rib_outline,
            beam: self.beam,
            spar,
        })
    }
}

pub struct SparHoled<'a> {
    rib: &'a Rib,
    primitives: Vec<Primitive>,
    pub wing_outline: Airfoil,
    pub rib_outline: Airfoil,
    pub beam: Hole,
    pub spar: Hole,
}

impl<'a> SparHoled<'a> {
    /// Bracing holes share the rear spar hole diameter
    pub fn drill_bracing_holes(self) -> Result<Braced<'a>> {
        let rib = self.rib;
        let bracing = features::bracing_holes(
            &self.beam.center(),
            &self.spar.center(),
            rib.bracing_hole_pos,
            rib.rearspar.diameter,
        )?;

        let mut primitives = self.primitives;
        primitives.extend(bracing.iter().cloned().map(Primitive::circle));

        Ok(Braced {
            rib,
            primitives,
            wing_outline: self.wing_outline,
            rib_outline: self.rib_outline,
            beam: self.beam,
            spar: self.spar,
            bracing,
        })
    }
}

/// A fully drafted rib, ready to be written out
pub struct Braced<'a> {
    rib: &'a Rib,
    primitives: Vec<Primitive>,
    pub wing_outline: Airfoil,
    pub rib_outline: Airfoil,
    pub beam: Hole,
    pub spar: Hole,
    pub bracing: Vec<Circle2>,
}

impl<'a> Braced<'a> {
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Emits every primitive into `sink` in drafting order and saves it
    pub fn save<S: DrawingSink>(self, sink: &mut S) -> Result<RibGeometry> {
        for primitive in self.primitives.iter() {
            sink.emit(primitive)?;
        }
        sink.save()?;
        debug!(
            "{}: saved {} primitives",
            self.rib.name,
            self.primitives.len()
        );

        Ok(RibGeometry {
            name: self.rib.name.clone(),
            wing_outline: self.wing_outline.get_points(Surface::All).to_vec(),
            rib_outline: self.rib_outline.get_points(Surface::All).to_vec(),
            beam_hole_center: self.beam.center(),
            rearspar_hole_center: self.spar.center(),
            bracing_hole_centers: self.bracing.iter().map(|c| c.center).collect(),
            primitives: self.primitives,
        })
    }
}

/// The geometry derived for a saved rib
#[derive(Clone, Debug, Serialize)]
pub struct RibGeometry {
    pub name: String,

    #[serde(serialize_with = "point_seq")]
    pub wing_outline: Vec<Point2<f64>>,

    #[serde(serialize_with = "point_seq")]
    pub rib_outline: Vec<Point2<f64>>,

    #[serde(with = "Point2f64")]
    pub beam_hole_center: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub rearspar_hole_center: Point2<f64>,

    #[serde(serialize_with = "point_seq")]
    pub bracing_hole_centers: Vec<Point2<f64>>,

    pub primitives: Vec<Primitive>,
}
