use crate::math::{Point2, Rect};
use crate::model::Plan;
use crate::operations::attach::OpeningGeometry;
use crate::selection::Selection;
use crate::view::ViewState;

/// Transient geometry of the gesture in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    /// Pending wall from its start to the snapped cursor.
    pub wall: Option<(Point2, Point2)>,
    /// Pending opening rectangle.
    pub opening: Option<OpeningGeometry>,
    /// Marquee being dragged, normalized.
    pub marquee: Option<Rect>,
}

impl Preview {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wall.is_none() && self.opening.is_none() && self.marquee.is_none()
    }
}

/// Everything a renderer needs for one frame. Read-only by construction.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub plan: &'a Plan,
    pub view: &'a ViewState,
    pub selection: &'a Selection,
    pub preview: &'a Preview,
}
