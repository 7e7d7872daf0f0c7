pub mod detector;
pub mod entities;
pub mod lexicon;

pub use detector::*;
pub use entities::*;
pub use lexicon::*;
