//! Reusable components

mod code_viewer;
mod hunt_card;
mod map;
mod nav;
mod protected;

pub use code_viewer::CodeViewer;
pub use hunt_card::HuntCard;
pub use map::MapWidget;
pub use nav::Nav;
pub use protected::Protected;
