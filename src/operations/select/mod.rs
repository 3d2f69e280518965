//! Point picking and rectangle selection.

mod hit;
mod marquee;

pub use hit::{hit_item, hit_wall, pick, Hit};
pub use marquee::{MarqueeHits, MarqueeSelect};
