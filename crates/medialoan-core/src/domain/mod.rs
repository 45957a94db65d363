pub mod dates;
pub mod error;
pub mod models;
pub mod rank;

pub use dates::*;
pub use error::*;
pub use models::*;
pub use rank::*;
