pub mod check;
pub mod context;

pub use check::{run_check, run_check_impl};
