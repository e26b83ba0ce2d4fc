//! Drawing primitives and the sinks which receive them.
//!
//! The geometry code never talks to a file format. It produces [`Primitive`] values, and a single
//! step replays them into a [`DrawingSink`] in order.

use crate::errors::{Result, RibError};
use crate::geometry::shapes2::Circle2;
use crate::serialize::{point_seq, Point2f64};
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod dxf;

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Polyline {
        #[serde(serialize_with = "point_seq")]
        points: Vec<Point2<f64>>,
    },
    Circle {
        circle: Circle2,
    },
    /// A text label; `rotation` is in degrees counter-clockwise
    Text {
        content: String,
        #[serde(with = "Point2f64")]
        position: Point2<f64>,
        rotation: f64,
    },
}

impl Primitive {
    pub fn polyline(points: Vec<Point2<f64>>) -> Primitive {
        Primitive::Polyline { points }
    }

    pub fn segment(a: Point2<f64>, b: Point2<f64>) -> Primitive {
        Primitive::Polyline { points: vec![a, b] }
    }

    pub fn circle(circle: Circle2) -> Primitive {
        Primitive::Circle { circle }
    }

    pub fn text(content: impl Into<String>, position: Point2<f64>, rotation: f64) -> Primitive {
        Primitive::Text {
            content: content.into(),
            position,
            rotation,
        }
    }
}

/// The receiving end of a drawing. Each rib creates its own sink, fills it and saves it once.
pub trait DrawingSink {
    fn add_polyline(&mut self, points: &[Point2<f64>]) -> Result<()>;

    fn add_circle(&mut self, center: &Point2<f64>, radius: f64) -> Result<()>;

    /// Adds a text label with its insertion point at `position`, rotated by `rotation` degrees
    fn add_text(&mut self, content: &str, position: &Point2<f64>, rotation: f64) -> Result<()>;

    /// Finishes the drawing. No primitives may be added afterwards.
    fn save(&mut self) -> Result<()>;

    fn emit(&mut self, primitive: &Primitive) -> Result<()> {
        match primitive {
            Primitive::Polyline { points } => self.add_polyline(points),
            Primitive::Circle { circle } => self.add_circle(&circle.center, circle.radius()),
            Primitive::Text {
                content,
                position,
                rotation,
            } => self.add_text(content, position, *rotation),
        }
    }
}

/// A sink which keeps everything it receives in memory
#[derive(Default, Debug)]
pub struct RecordingSink {
    pub primitives: Vec<Primitive>,
    saved: bool,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    fn push(&mut self, primitive: Primitive) -> Result<()> {
        if self.saved {
            return Err(RibError::SinkClosed("recording".to_string()));
        }
        self.primitives.push(primitive);
        Ok(())
    }

    pub fn polylines(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { .. }))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count()
    }

    pub fn texts(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
            .count()
    }
}

impl DrawingSink for RecordingSink {
    fn add_polyline(&mut self, points: &[Point2<f64>]) -> Result<()> {
        self.push(Primitive::polyline(points.to_vec()))
    }

    fn add_circle(&mut self, center: &Point2<f64>, radius: f64) -> Result<()> {
        self.push(Primitive::circle(Circle2::from_point(*center, radius)))
    }

    fn add_text(&mut self, content: &str, position: &Point2<f64>, rotation: f64) -> Result<()> {
        self.push(Primitive::text(content, *position, rotation))
    }

    fn save(&mut self) -> Result<()> {
        if self.saved {
            return Err(RibError::SinkClosed("recording".to_string()));
        }
        self.saved = true;
        Ok(())
    }
}
