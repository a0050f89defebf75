pub mod domain;
pub mod error;
pub mod permissions;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use permissions::*;
pub use traits::*;
