mod color;
mod r#move;
mod outcome;
mod position;
mod san;

pub use color::*;
pub use outcome::*;
pub use position::*;
pub use r#move::*;
pub use san::*;
