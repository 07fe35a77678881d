pub mod engine;
pub use engine::*;

pub mod outcome;
pub use outcome::*;

pub mod score;
pub use score::*;

pub mod table;
pub use table::*;

pub mod turn;
pub use turn::*;
