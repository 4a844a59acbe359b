mod error;
mod moves;
mod piece;
mod position;
pub mod rules;


pub use error::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use rules::MoveList;
