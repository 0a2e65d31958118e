pub mod constants;
pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{CatalogError, CatalogResult, ConfigError, ConfigResult};
pub use traits::*;
pub use types::*;
