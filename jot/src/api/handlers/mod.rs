pub mod diagnostics;
pub mod digest;
pub mod notes;
