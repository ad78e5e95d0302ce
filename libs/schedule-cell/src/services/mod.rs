pub mod editor;
pub mod schedule;
pub mod slots;
