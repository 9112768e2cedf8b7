pub mod matrix;
pub mod neural;
pub mod prelude;
