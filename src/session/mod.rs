pub mod backlog;
pub use backlog::*;

pub mod roster;
pub use roster::*;

pub mod rules;
pub use rules::*;

pub mod session;
pub use session::*;
