//! egui rendering for the portfolio assistant widget.

pub mod panels;
pub mod state;
pub mod theme;
