pub mod error;
pub mod traits;

pub use error::{DropLineError, Result};
pub use traits::{BoundingBox, Validate};
