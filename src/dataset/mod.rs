//! @ai:module:intent Numeric dataset model and file loading
//! @ai:module:layer domain
//! @ai:module:public_api Value, DatasetLoader

pub mod loader;
pub mod value;

pub use loader::{DatasetLoader, DatasetLoaderTrait};
pub use value::Value;
