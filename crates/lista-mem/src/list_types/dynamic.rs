use core::alloc::Layout;

use std::alloc::handle_alloc_error;

use crate::{
    allocator::Allocator,
    capacity_policy::Dyn,
    errors::ListError,
    global_alloc::GlobalAlloc,
};

use super::AllocList;

/// Diverges after a growable list failed to grow, the same way the
/// standard collections do.
#[cold]
pub(super) fn growth_failed<T>(err: ListError) -> ! {
    match err {
        ListError::AllocFailed { new_capacity } => {
            match Layout::array::<T>(new_capacity) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            }
        },
        ListError::CapacityOverflow { requested } => {
            panic!("capacity overflow while requesting {} elements", requested)
        },
        err => panic!("{}", err),
    }
}

impl<T, Alloc: Allocator> AllocList<T, Dyn, Alloc> {

    #[inline(always)]
    pub fn new_in(alloc: Alloc) -> Self {
        Self::empty_in(alloc)
    }

    /// Appends `value` to the back of the list and returns a reference to it.
    ///
    /// The list grows as needed; running out of memory aborts like
    /// [`Vec::push`] does.
    #[inline(always)]
    pub fn append(&mut self, value: T) -> &mut T {
        match self.try_append(value) {
            Ok(value) => value,
            Err(err) => growth_failed::<T>(err),
        }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Fails only when `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange { index, len: self.len })
        }
        match self.try_insert(index, value) {
            Ok(value) => Ok(value),
            Err(err) => growth_failed::<T>(err),
        }
    }

    pub fn extend_from_slice(&mut self, values: &[T])
        where
            T: Clone
    {
        if let Err(err) = self.try_extend_from_slice(values) {
            growth_failed::<T>(err)
        }
    }
}

impl<T> AllocList<T, Dyn, GlobalAlloc> {

    #[inline(always)]
    pub fn new() -> Self {
        Self::empty_in(GlobalAlloc)
    }

    /// Creates a list holding clones of `values`, in order.
    pub fn from_slice(values: &[T]) -> Self
        where
            T: Clone
    {
        let mut list = Self::new();
        list.extend_from_slice(values);
        list
    }
}

impl<T> Default for AllocList<T, Dyn, GlobalAlloc> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Alloc: Allocator> Extend<T> for AllocList<T, Dyn, Alloc> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(required) = self.len.checked_add(lower) {
            if let Err(err) = self.reserve(required) {
                growth_failed::<T>(err)
            }
        }
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for AllocList<T, Dyn, GlobalAlloc> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for AllocList<T, Dyn, GlobalAlloc> {

    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for AllocList<T, Dyn, GlobalAlloc> {

    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

#[cfg(test)]
mod tests {

    use crate::DynamicList;

    #[test]
    fn append_grows_in_powers_of_two() {
        let mut list = DynamicList::new();
        assert_eq!(list.capacity(), 0);
        list.append(0u32);
        assert_eq!(list.capacity(), 2);
        for i in 1..5 {
            list.append(i);
        }
        assert_eq!(list.capacity(), 8);
        assert_eq!(list, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn append_returns_new_element() {
        let mut list = DynamicList::from([1]);
        *list.append(2) += 10;
        assert_eq!(list.size(), 2);
        assert_eq!(list.get(list.size() - 1), Ok(&12));
    }

    #[test]
    fn with_capacity_rounds_up() {
        let list = DynamicList::<u64>::with_capacity(5).unwrap();
        assert_eq!(list.capacity(), 8);
        assert!(list.is_empty());
    }

    #[test]
    fn collect_and_extend() {
        let mut list: DynamicList<_> = (0..3).collect();
        list.extend([3, 4]);
        list.extend_from_slice(&[5]);
        assert_eq!(list, [0, 1, 2, 3, 4, 5]);
        let from_slice = DynamicList::from(&[1, 2][..]);
        assert_eq!(from_slice, [1, 2]);
    }

    #[test]
    fn insert_only_fails_on_index() {
        let mut list = DynamicList::from(['a', 'c']);
        list.insert(1, 'b').unwrap();
        assert_eq!(list, ['a', 'b', 'c']);
        assert!(list.insert(4, 'x').is_err());
    }
}
