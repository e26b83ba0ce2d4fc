use ncollide2d::na::{Point2, RealField, Vector2};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// The distance of `p` from the straight line through `a` and `b`, which is the error made by
/// replacing `p` with a linear interpolation between its neighbours
pub fn deviation(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len = ab.norm();
    if len <= f64::EPSILON {
        return dist(a, p);
    }
    ab.perp(&(p - a)).abs() / len
}

/// The angle of a vector measured counter-clockwise from the positive x axis
pub fn heading(v: &Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// A vector of length `d` pointing at angle `theta` (radians) from the positive x axis
pub fn direct(d: f64, theta: f64) -> Vector2<f64> {
    Vector2::new(d * theta.cos(), d * theta.sin())
}

/// The point dividing the segment from `a` to `b` at `ratio`, such that a ratio of 0.0 returns
/// `a` and a ratio of 1.0 returns `b`
pub fn divide(a: &Point2<f64>, b: &Point2<f64>, ratio: f64) -> Point2<f64> {
    *a + (b - a) * ratio
}
