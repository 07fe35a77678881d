pub mod disk;
pub use disk::*;

pub mod record;
pub use record::*;

pub mod status;
pub use status::*;
