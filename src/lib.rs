pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod math;
pub mod model;
pub mod operations;
pub mod selection;
pub mod view;

pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{PlanwrightError, Result};
pub use history::EditHistory;
pub use model::{Item, Plan, Wall};
pub use selection::Selection;
pub use view::ViewState;
