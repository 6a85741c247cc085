mod strategies;
mod alloc_list;
mod dynamic;
mod fixed;
mod into_iter;
mod fmt;

pub use alloc_list::{AllocList, DynamicList, FixedList};
pub use into_iter::IntoIter;

pub type Iter<'a, T> = core::slice::Iter<'a, T>;
pub type IterMut<'a, T> = core::slice::IterMut<'a, T>;
