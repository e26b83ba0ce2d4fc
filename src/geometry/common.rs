use ncollide2d::na::{Unit, Vector2};

pub type UnitVec2 = Unit<Vector2<f64>>;

/// Which side of a directed polyline, looking along the direction of travel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The unit normal on the given side of a unit direction
pub fn side_normal(dir: &UnitVec2, side: Side) -> UnitVec2 {
    let left = Vector2::new(-dir.y, dir.x);
    match side {
        Side::Left => Unit::new_unchecked(left),
        Side::Right => Unit::new_unchecked(-left),
    }
}
