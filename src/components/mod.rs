//! Rendering components for the fan-site page sections.

pub mod batmobile_card;
pub mod batmobile_gallery;
pub mod batmobile_modal;
pub mod gadget_card;
pub mod gadget_grid;
pub mod hero;
