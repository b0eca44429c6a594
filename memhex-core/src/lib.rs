pub mod error;
pub mod transcode;

pub use error::*;
pub use transcode::*;
