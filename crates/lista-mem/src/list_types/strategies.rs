use core::ptr::{self, NonNull};

#[inline(always)]
pub(super) unsafe fn move_elements<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    unsafe {
        src.copy_to_nonoverlapping(dst, len);
    }
}

/// Opens a hole at `index` by moving `index..len` one slot right.
/// The slot at `len` must be allocated.
#[inline(always)]
pub(super) unsafe fn shift_right<T>(ptr: NonNull<T>, index: usize, len: usize) {
    unsafe {
        let hole = ptr.add(index);
        hole.copy_to(hole.add(1), len - index);
    }
}

/// Closes the hole at `index` by moving `index + 1..len` one slot left.
#[inline(always)]
pub(super) unsafe fn shift_left<T>(ptr: NonNull<T>, index: usize, len: usize) {
    unsafe {
        let hole = ptr.add(index);
        hole.add(1).copy_to(hole, len - index - 1);
    }
}

#[inline(always)]
pub(super) unsafe fn drop_in_place<T>(ptr: NonNull<T>, len: usize) {
    unsafe {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
    }
}
