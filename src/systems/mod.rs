pub mod behaviors;
pub mod brush;
