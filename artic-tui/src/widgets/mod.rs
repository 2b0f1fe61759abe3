//! Small reusable pieces of the terminal UI.

pub mod spinner;

pub use spinner::Spinner;
