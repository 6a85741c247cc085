use core::{
    iter::FusedIterator,
    marker::PhantomData,
    mem::{self, ManuallyDrop},
    ptr::{self, NonNull},
};

use crate::{
    allocator::Allocator,
    capacity_policy::CapacityPolicy,
    global_alloc::GlobalAlloc,
};

use super::{AllocList, strategies};

/// Owning iterator over the elements of an [`AllocList`].
pub struct IntoIter<T, Alloc: Allocator = GlobalAlloc> {
    data: NonNull<T>,
    capacity: usize,
    head: usize,
    tail: usize,
    alloc: Alloc,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send, Alloc: Allocator + Send> Send for IntoIter<T, Alloc> {}

unsafe impl<T: Sync, Alloc: Allocator + Sync> Sync for IntoIter<T, Alloc> {}

impl<T, Alloc: Allocator> IntoIter<T, Alloc> {

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tail - self.head
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }
}

impl<T, CapacityPol, Alloc> IntoIterator for AllocList<T, CapacityPol, Alloc>
    where
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    type Item = T;
    type IntoIter = IntoIter<T, Alloc>;

    fn into_iter(self) -> Self::IntoIter {
        let list = ManuallyDrop::new(self);
        IntoIter {
            data: list.data,
            capacity: list.capacity,
            head: 0,
            tail: list.len,
            alloc: unsafe { ptr::read(&list.alloc) },
            _marker: PhantomData,
        }
    }
}

impl<T, Alloc: Allocator> Iterator for IntoIter<T, Alloc> {

    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None
        }
        let value = unsafe { self.data.add(self.head).read() };
        self.head += 1;
        Some(value)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T, Alloc: Allocator> DoubleEndedIterator for IntoIter<T, Alloc> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None
        }
        self.tail -= 1;
        Some(unsafe { self.data.add(self.tail).read() })
    }
}

impl<T, Alloc: Allocator> ExactSizeIterator for IntoIter<T, Alloc> {}

impl<T, Alloc: Allocator> FusedIterator for IntoIter<T, Alloc> {}

impl<T, Alloc: Allocator> Drop for IntoIter<T, Alloc> {

    fn drop(&mut self) {
        let head = self.head;
        let remaining = self.len();
        self.head = self.tail;
        unsafe {
            strategies::drop_in_place(self.data.add(head), remaining);
        }
        if self.capacity != 0 && mem::size_of::<T>() != 0 {
            unsafe { self.alloc.free_uninit(self.data, self.capacity) }
        }
    }
}
