pub mod error;
pub mod sequence;
pub mod utils;

pub use error::{Result, TallyError};
pub use sequence::Sequence;
