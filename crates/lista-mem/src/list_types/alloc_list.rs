use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_policy::{CapacityPolicy, Dyn, Fixed},
    errors::ListError,
    global_alloc::GlobalAlloc,
    const_assert,
    size_of,
};

use super::{
    strategies,
    Iter,
    IterMut,
};

use ListError::{IndexOutOfRange, FixedCapacity, AllocFailed, CapacityOverflow};

/// Contiguous list storage whose growth is decided by `CapacityPol`.
///
/// Elements live in `data[0..len]`; `data[len..capacity]` is uninitialized.
/// Zero-sized element types never allocate.
pub struct AllocList<T, CapacityPol, Alloc = GlobalAlloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{
    pub(super) data: NonNull<T>,
    pub(super) capacity: usize,
    pub(super) len: usize,
    pub(super) alloc: Alloc,
    pub(super) _markers: PhantomData<(T, CapacityPol)>,
}

/// A growable, ordered, indexable list.
///
/// # Example
/// ```rust
/// use lista_mem::DynamicList;
///
/// let mut friends = DynamicList::from(["jahid", "hossan", "roni"]);
/// assert_eq!(friends.get(1), Ok(&"hossan"));
///
/// friends.append("salim");
/// friends.remove_at(1).unwrap();
/// friends.set(0, "samin").unwrap();
/// assert_eq!(friends, ["samin", "roni", "salim"]);
/// assert_eq!(friends.size(), 3);
/// ```
pub type DynamicList<T, Alloc = GlobalAlloc> = AllocList<T, Dyn, Alloc>;

/// A list whose capacity is fixed when it is created.
pub type FixedList<T, Alloc = GlobalAlloc> = AllocList<T, Fixed, Alloc>;

const_assert!(size_of!(DynamicList<u32>) == size_of!(Option<DynamicList<u32>>));

unsafe impl<T, CapacityPol, Alloc> Send for AllocList<T, CapacityPol, Alloc>
    where
        T: Send,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator + Send,
{}

unsafe impl<T, CapacityPol, Alloc> Sync for AllocList<T, CapacityPol, Alloc>
    where
        T: Sync,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator + Sync,
{}

impl<T, CapacityPol, Alloc> AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    pub(super) const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(super) fn empty_in(alloc: Alloc) -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: if Self::IS_ZST && CapacityPol::can_grow() { usize::MAX } else { 0 },
            len: 0,
            alloc,
            _markers: PhantomData,
        }
    }

    /// Creates an empty list able to hold at least `capacity` elements.
    ///
    /// Growable lists round `capacity` up to a power of two.
    pub fn with_capacity_in(capacity: usize, alloc: Alloc) -> Result<Self, ListError> {
        let mut list = Self::empty_in(alloc);
        if capacity == 0 || capacity <= list.capacity {
            return Ok(list)
        }
        if Self::IS_ZST {
            list.capacity = capacity;
            return Ok(list)
        }
        let true_capacity =
            if CapacityPol::power_of_two() {
                capacity
                    .checked_next_power_of_two()
                    .ok_or(CapacityOverflow { requested: capacity })?
            }
            else {
                capacity
            };
        list.data = list.allocate(true_capacity)?;
        list.capacity = true_capacity;
        Ok(list)
    }

    fn allocate(&self, capacity: usize) -> Result<NonNull<T>, ListError> {
        if Layout::array::<T>(capacity).is_err() {
            return Err(CapacityOverflow { requested: capacity })
        }
        unsafe {
            self.alloc
                .allocate_uninit(capacity)
                .ok_or(AllocFailed { new_capacity: capacity })
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored elements, same as [`len`](Self::len).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn allocator(&self) -> &Alloc {
        &self.alloc
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Makes room for at least `capacity` elements in total.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ListError> {
        if capacity <= self.capacity {
            return Ok(())
        }
        if !CapacityPol::can_grow() {
            return Err(FixedCapacity { capacity: self.capacity })
        }
        let new_capacity = CapacityPol::grow(self.capacity, capacity)
            .ok_or(CapacityOverflow { requested: capacity })?;
        let tmp = self.allocate(new_capacity)?;
        debug_assert!(self.len <= self.capacity);
        unsafe {
            strategies::move_elements(self.data, tmp, self.len);
        }
        self.free_buffer();
        self.data = tmp;
        self.capacity = new_capacity;
        Ok(())
    }

    fn grow_one(&mut self) -> Result<(), ListError> {
        if self.len < self.capacity {
            return Ok(())
        }
        let required = self.len
            .checked_add(1)
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        self.reserve(required)
    }

    pub(super) fn free_buffer(&mut self) {
        if self.capacity == 0 || Self::IS_ZST {
            return
        }
        unsafe { self.alloc.free_uninit(self.data, self.capacity) }
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index >= self.len {
            Err(IndexOutOfRange { index, len: self.len })
        }
        else {
            Ok(())
        }
    }

    /// Appends `value` to the back of the list, failing only when the
    /// capacity policy refuses to grow or allocation fails.
    pub fn try_append(&mut self, value: T) -> Result<&mut T, ListError> {
        self.grow_one()?;
        unsafe {
            let mut ptr = self.data.add(self.len);
            ptr.write(value);
            self.len += 1;
            Ok(ptr.as_mut())
        }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        Ok(unsafe { self.data.add(index).as_ref() })
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        Ok(unsafe { self.data.add(index).as_mut() })
    }

    /// Replaces the element at `index`, dropping the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, ListError> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Removes the element at `index`; every later element moves one
    /// position towards the front.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        unsafe {
            let removed = self.data.add(index).read();
            strategies::shift_left(self.data, index, self.len);
            self.len -= 1;
            Ok(removed)
        }
    }

    /// Inserts `value` at `index`, which may equal `len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, ListError> {
        if index > self.len {
            return Err(IndexOutOfRange { index, len: self.len })
        }
        self.grow_one()?;
        unsafe {
            strategies::shift_right(self.data, index, self.len);
            let mut ptr = self.data.add(index);
            ptr.write(value);
            self.len += 1;
            Ok(ptr.as_mut())
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.data.add(self.len).read() })
    }

    #[inline(always)]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Drops every element, keeping the buffer.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            strategies::drop_in_place(self.data, len);
        }
    }

    pub fn contains(&self, value: &T) -> bool
        where
            T: PartialEq
    {
        self.as_slice().contains(value)
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
        where
            T: PartialEq
    {
        self.iter().position(|v| v == value)
    }

    /// Appends clones of every element in `values`.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), ListError>
        where
            T: Clone
    {
        let required = self.len
            .checked_add(values.len())
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        self.reserve(required)?;
        for value in values {
            self.try_append(value.clone())?;
        }
        Ok(())
    }
}

impl<T> AllocList<T, Dyn, GlobalAlloc> {

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_capacity_in(capacity, GlobalAlloc)
    }
}

impl<T> AllocList<T, Fixed, GlobalAlloc> {

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Self::with_capacity_in(capacity, GlobalAlloc)
    }
}

impl<T, CapacityPol, Alloc> Drop for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    fn drop(&mut self) {
        self.clear();
        self.free_buffer();
    }
}

impl<T, CapacityPol, Alloc> Index<usize> for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of range for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<T, CapacityPol, Alloc> IndexMut<usize> for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of range for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<T, CapacityPol, Alloc> AsRef<[T]> for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, CapacityPol, Alloc> AsMut<[T]> for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, CapacityPol, Alloc> Deref for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, CapacityPol, Alloc> DerefMut for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'list, T, CapacityPol, Alloc> IntoIterator for &'list AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    type Item = &'list T;
    type IntoIter = Iter<'list, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'list, T, CapacityPol, Alloc> IntoIterator for &'list mut AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    type Item = &'list mut T;
    type IntoIter = IterMut<'list, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, CapacityPol, Alloc> Clone for AllocList<T, CapacityPol, Alloc>
    where
        T: Clone,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator + Clone,
{

    fn clone(&self) -> Self {
        let capacity =
            if CapacityPol::can_grow() {
                self.len
            }
            else {
                self.capacity
            };
        let mut list = Self::with_capacity_in(capacity, self.alloc.clone())
            .unwrap_or_else(|err| super::dynamic::growth_failed::<T>(err));
        for value in self {
            if let Err(err) = list.try_append(value.clone()) {
                super::dynamic::growth_failed::<T>(err)
            }
        }
        list
    }
}

impl<T, U, P1, P2, A1, A2> PartialEq<AllocList<U, P2, A2>> for AllocList<T, P1, A1>
    where
        T: PartialEq<U>,
        P1: CapacityPolicy,
        P2: CapacityPolicy,
        A1: Allocator,
        A2: Allocator,
{

    #[inline(always)]
    fn eq(&self, other: &AllocList<U, P2, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, CapacityPol, Alloc> Eq for AllocList<T, CapacityPol, Alloc>
    where
        T: Eq,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{}

impl<T, U, CapacityPol, Alloc> PartialEq<[U]> for AllocList<T, CapacityPol, Alloc>
    where
        T: PartialEq<U>,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, CapacityPol, Alloc> PartialEq<&[U]> for AllocList<T, CapacityPol, Alloc>
    where
        T: PartialEq<U>,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, CapacityPol, Alloc, const N: usize> PartialEq<[U; N]> for AllocList<T, CapacityPol, Alloc>
    where
        T: PartialEq<U>,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    #[inline(always)]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
