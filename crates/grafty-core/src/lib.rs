mod error;
pub use error::Error;

pub mod reflect;
pub use reflect::Reflector;

pub mod registry;
pub use registry::Registry;

pub mod schema;

/// A Result type alias that uses Grafty's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
