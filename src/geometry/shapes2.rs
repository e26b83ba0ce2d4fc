use crate::serialize::{Ballf64, Point2f64};
use ncollide2d::na::Point2;
use ncollide2d::shape::Ball;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Circle2 {
    #[serde(with = "Point2f64")]
    pub center: Point2<f64>,

    #[serde(with = "Ballf64")]
    pub ball: Ball<f64>,
}

impl Circle2 {
    pub fn new(x: f64, y: f64, r: f64) -> Circle2 {
        Circle2 {
            center: Point2::new(x, y),
            ball: Ball::new(r),
        }
    }

    pub fn from_point(center: Point2<f64>, r: f64) -> Circle2 {
        Circle2 {
            center,
            ball: Ball::new(r),
        }
    }

    /// A circle specified by diameter, which is how holes are dimensioned
    pub fn from_diameter(center: Point2<f64>, diameter: f64) -> Circle2 {
        Circle2::from_point(center, diameter * 0.5)
    }

    pub fn radius(&self) -> f64 {
        self.ball.radius
    }
}
