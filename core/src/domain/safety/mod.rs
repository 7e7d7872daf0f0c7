pub mod aggregator;
pub mod pipeline;
pub mod ports;
pub mod scorer;
pub mod services;
pub mod value_objects;

pub use ports::*;
pub use value_objects::*;
