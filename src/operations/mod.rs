pub mod attach;
pub mod junction;
pub mod select;
