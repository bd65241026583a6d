//! raylib-backed surfaces and widgets the carousel draws with.

pub mod controls;
pub mod dots;
pub mod modal;
pub mod panel;
pub mod track;

pub use controls::{Control, Controls};
pub use dots::DotRow;
pub use modal::Modal;
pub use panel::Panel;
pub use track::Track;
