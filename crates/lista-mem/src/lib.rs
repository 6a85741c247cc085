//! Growable and fixed capacity list containers built on a pluggable [`Allocator`].
//!
//! [`DynamicList`] is the everyday growable list. [`FixedList`] shares its
//! storage and operations but never grows past the capacity it was created with.

mod macros;
mod errors;
mod allocator;
mod global_alloc;

pub mod capacity_policy;
pub mod list_types;

pub use errors::ListError;
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use capacity_policy::CapacityPolicy;
pub use list_types::{AllocList, DynamicList, FixedList, IntoIter};

pub type Result<T> = core::result::Result<T, ListError>;
