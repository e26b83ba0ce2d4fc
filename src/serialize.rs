use ncollide2d::na::Point2;
use ncollide2d::shape::Ball;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
#[serde(remote = "Ball<f64>")]
pub struct Ballf64 {
    radius: f64,
}

#[derive(Serialize)]
struct PointEntry(#[serde(with = "Point2f64")] Point2<f64>);

/// Serializes a point sequence as a list of `{x, y}` objects, for use with `serialize_with`
pub fn point_seq<S: Serializer>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(|p| PointEntry(*p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "point_seq")]
        points: Vec<Point2<f64>>,
        #[serde(with = "Ballf64")]
        ball: Ball<f64>,
    }

    #[test]
    fn test_points_serialize_as_objects() {
        let w = Wrapper {
            points: vec![Point2::new(1.0, 2.0), Point2::new(-0.5, 0.0)],
            ball: Ball::new(3.0),
        };
        let text = serde_json::to_string(&w).unwrap();
        assert_eq!(
            r#"{"points":[{"x":1.0,"y":2.0},{"x":-0.5,"y":0.0}],"ball":{"radius":3.0}}"#,
            text
        );
    }
}
