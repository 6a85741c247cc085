use crate::{
    allocator::Allocator,
    capacity_policy::Fixed,
    errors::ListError,
    global_alloc::GlobalAlloc,
};

use super::AllocList;

impl<T, Alloc: Allocator> AllocList<T, Fixed, Alloc> {

    /// Creates a full list of `len` clones of `value`.
    pub fn with_len_in(len: usize, value: T, alloc: Alloc) -> Result<Self, ListError>
        where
            T: Clone
    {
        let mut list = Self::with_capacity_in(len, alloc)?;
        for _ in 0..len {
            list.try_append(value.clone())?;
        }
        Ok(list)
    }

    /// Creates a full list holding every element of `iter`, sized to
    /// the iterator's reported length.
    pub fn from_exact_in<I>(iter: I, alloc: Alloc) -> Result<Self, ListError>
        where
            I: IntoIterator<Item = T>,
            I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity_in(iter.len(), alloc)?;
        for value in iter {
            list.try_append(value)?;
        }
        Ok(list)
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }
}

impl<T> AllocList<T, Fixed, GlobalAlloc> {

    #[inline(always)]
    pub fn with_len(len: usize, value: T) -> Result<Self, ListError>
        where
            T: Clone
    {
        Self::with_len_in(len, value, GlobalAlloc)
    }

    #[inline(always)]
    pub fn from_exact<I>(iter: I) -> Result<Self, ListError>
        where
            I: IntoIterator<Item = T>,
            I::IntoIter: ExactSizeIterator,
    {
        Self::from_exact_in(iter, GlobalAlloc)
    }
}

#[cfg(test)]
mod tests {

    use crate::{FixedList, ListError};

    #[test]
    fn with_len_fills_every_slot() {
        let list = FixedList::<Option<&str>>::with_len(4, None).unwrap();
        assert_eq!(list.size(), 4);
        assert_eq!(list.capacity(), 4);
        assert!(list.is_full());
        assert!(list.iter().all(Option::is_none));
    }

    #[test]
    fn from_exact_sizes_to_input() {
        let list = FixedList::from_exact(["hossan", "jahid"]).unwrap();
        assert_eq!(list.capacity(), 2);
        assert_eq!(list.get(1), Ok(&"jahid"));
    }

    #[test]
    fn full_list_refuses_to_grow() {
        let mut list = FixedList::from_exact([1, 2, 3]).unwrap();
        assert_eq!(
            list.try_append(4).map(|v| *v),
            Err(ListError::FixedCapacity { capacity: 3 }),
        );
        assert_eq!(
            list.try_insert(0, 0).map(|v| *v),
            Err(ListError::FixedCapacity { capacity: 3 }),
        );
        assert_eq!(list.reserve(4), Err(ListError::FixedCapacity { capacity: 3 }));
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn removal_frees_a_slot() {
        let mut list = FixedList::from_exact([1, 2]).unwrap();
        list.remove_at(0).unwrap();
        assert!(!list.is_full());
        list.try_append(3).unwrap();
        assert_eq!(list, [2, 3]);
    }

    #[test]
    fn set_on_fixed_list() {
        let mut list = FixedList::with_len(2, 0).unwrap();
        list.set(1, 7).unwrap();
        assert_eq!(list, [0, 7]);
        assert_eq!(list.set(2, 7), Err(ListError::IndexOutOfRange { index: 2, len: 2 }));
    }
}
