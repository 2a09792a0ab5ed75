pub mod layout;
mod drill;
mod summary;

pub use drill::{draw_drill, draw_quit_confirmation};
pub use layout::{calculate_drill_chunks, calculate_summary_chunks};
pub use summary::draw_summary;
