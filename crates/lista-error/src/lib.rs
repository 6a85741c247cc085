mod any;
mod context;

pub use any::AnyError;
pub use context::Context;

pub type Result<T> = core::result::Result<T, AnyError>;
