use super::DrawingSink;
use crate::errors::{Result, RibError};
use dxf::entities::{Circle, Entity, EntityType, LwPolyline, Text};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex, Point};
use log::debug;
use ncollide2d::na::Point2;
use std::path::PathBuf;

const DEFAULT_TEXT_HEIGHT: f64 = 5.0;

fn dxf_point(p: &Point2<f64>) -> Point {
    Point::new(p.x, p.y, 0.0)
}

/// A sink which collects entities in memory and writes a single DXF file when saved. Polylines
/// are written open, as light weight polylines.
pub struct DxfSink {
    path: PathBuf,
    drawing: Drawing,
    text_height: f64,
    saved: bool,
}

impl DxfSink {
    /// Prepares a drawing for `path`. Nothing is written until the sink is saved.
    pub fn create<P: Into<PathBuf>>(path: P) -> DxfSink {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;
        DxfSink {
            path: path.into(),
            drawing,
            text_height: DEFAULT_TEXT_HEIGHT,
            saved: false,
        }
    }

    pub fn with_text_height(mut self, text_height: f64) -> DxfSink {
        self.text_height = text_height;
        self
    }

    fn add(&mut self, specific: EntityType) -> Result<()> {
        if self.saved {
            return Err(RibError::SinkClosed(self.path.display().to_string()));
        }
        self.drawing.add_entity(Entity::new(specific));
        Ok(())
    }
}

impl DrawingSink for DxfSink {
    fn add_polyline(&mut self, points: &[Point2<f64>]) -> Result<()> {
        let mut polyline = LwPolyline::default();
        polyline.vertices = points
            .iter()
            .map(|p| {
                let mut v = LwPolylineVertex::default();
                v.x = p.x;
                v.y = p.y;
                v
            })
            .collect();
        self.add(EntityType::LwPolyline(polyline))
    }

    fn add_circle(&mut self, center: &Point2<f64>, radius: f64) -> Result<()> {
        self.add(EntityType::Circle(Circle::new(dxf_point(center), radius)))
    }

    fn add_text(&mut self, content: &str, position: &Point2<f64>, rotation: f64) -> Result<()> {
        let mut text = Text::default();
        text.location = dxf_point(position);
        text.text_height = self.text_height;
        text.value = content.to_string();
        text.rotation = rotation;
        self.add(EntityType::Text(text))
    }

    fn save(&mut self) -> Result<()> {
        if self.saved {
            return Err(RibError::SinkClosed(self.path.display().to_string()));
        }

        let mut buffer = Vec::new();
        self.drawing.save(&mut buffer)?;
        std::fs::write(&self.path, buffer)?;
        self.saved = true;
        debug!("wrote {}", self.path.display());
        Ok(())
    }
}
