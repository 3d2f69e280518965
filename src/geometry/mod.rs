//! Pure geometric kernel over walls.

pub mod wall;

pub use wall::{find_nearest_wall, NearestWall, WallEnd, WallProjection};
