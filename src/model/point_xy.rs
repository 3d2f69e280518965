//! Serde adapter storing a [`Point2`] as `{ "x": .., "y": .. }`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::Point2;

#[derive(Serialize, Deserialize)]
struct Xy {
    x: f64,
    y: f64,
}

pub fn serialize<S: Serializer>(p: &Point2, serializer: S) -> Result<S::Ok, S::Error> {
    Xy { x: p.x, y: p.y }.serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point2, D::Error> {
    let Xy { x, y } = Xy::deserialize(deserializer)?;
    Ok(Point2::new(x, y))
}
