use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Raw memory source for list storage.
///
/// # Safety
/// Implementors must return memory valid for `size` bytes at `align` from
/// [`Allocator::allocate_raw`] and accept that same block back in
/// [`Allocator::free_raw`].
pub unsafe trait Allocator {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        unsafe {
            self.allocate_raw(layout.size(), layout.align())
                .map(|ptr| ptr.cast::<T>())
        }
    }

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let Ok(layout) = Layout::array::<T>(count) else {
            return
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout.size(), layout.align()) }
    }
}
