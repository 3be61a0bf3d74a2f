//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by panel (`gadgets`, `gallery`) so each section of the
//! page depends on a small focused model, and no state crosses panel
//! boundaries. Transitions are plain methods on plain structs; components
//! wrap each model in an `RwSignal` and perform the I/O around it.

pub mod gadgets;
pub mod gallery;
