pub mod entities;
pub mod helpers;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
