pub mod config;
pub mod convert;
pub mod debug;
pub mod emit;
pub mod error;
pub mod extract;
pub mod transcode;

pub use config::*;
pub use convert::*;
pub use emit::*;
pub use error::*;
pub use extract::*;
pub use transcode::*;
