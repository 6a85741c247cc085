use core::{
    cell::Cell,
    ptr::NonNull,
};

use std::rc::Rc;

use lista_mem::{
    Allocator, DynamicList, FixedList, GLOBAL_ALLOC, ListError,
};

#[derive(Default)]
struct Counts {
    allocs: Cell<usize>,
    frees: Cell<usize>,
    live_bytes: Cell<usize>,
}

#[derive(Clone, Default)]
struct CountingAlloc(Rc<Counts>);

unsafe impl Allocator for CountingAlloc {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let ptr = unsafe { GLOBAL_ALLOC.allocate_raw(size, align)? };
        self.0.allocs.set(self.0.allocs.get() + 1);
        self.0.live_bytes.set(self.0.live_bytes.get() + size);
        Some(ptr)
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        self.0.frees.set(self.0.frees.get() + 1);
        self.0.live_bytes.set(self.0.live_bytes.get() - size);
        unsafe { GLOBAL_ALLOC.free_raw(ptr, size, align) }
    }
}

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {

    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn friend_list_walkthrough() {
    let mut friends = DynamicList::from(["jahid", "hossan", "roni"]);
    assert_eq!(friends.get(1), Ok(&"hossan"));

    friends.append("salim");
    assert_eq!(friends.size(), 4);
    assert_eq!(friends.get(3), Ok(&"salim"));

    assert_eq!(friends.remove_at(1), Ok("hossan"));
    assert_eq!(friends, ["jahid", "roni", "salim"]);

    friends.set(0, "samin").unwrap();
    assert_eq!(friends, ["samin", "roni", "salim"]);
    assert_eq!(friends.size(), 3);
}

#[test]
fn append_increases_size_by_one() {
    let mut list = DynamicList::new();
    for i in 0..100u32 {
        let before = list.size();
        list.append(i * 3);
        assert_eq!(list.size(), before + 1);
        assert_eq!(list.get(list.size() - 1), Ok(&(i * 3)));
    }
    for i in 0..100u32 {
        assert_eq!(list.get(i as usize), Ok(&(i * 3)));
    }
}

#[test]
fn remove_preserves_relative_order() {
    let values: Vec<u32> = (0..20).collect();
    for remove in 0..values.len() {
        let mut list: DynamicList<u32> = values.iter().copied().collect();
        let removed = list.remove_at(remove).unwrap();
        assert_eq!(removed, values[remove]);
        assert_eq!(list.size(), values.len() - 1);
        for (i, value) in list.iter().enumerate() {
            let expected = if i < remove { values[i] } else { values[i + 1] };
            assert_eq!(*value, expected);
        }
    }
}

#[test]
fn out_of_range_operations_leave_list_untouched() {
    let mut list = DynamicList::from([10, 20]);
    let err = ListError::IndexOutOfRange { index: 2, len: 2 };
    assert_eq!(list.get(2), Err(err));
    assert_eq!(list.set(2, 0), Err(err));
    assert_eq!(list.remove_at(2), Err(err));
    assert_eq!(list, [10, 20]);
}

#[test]
fn elements_dropped_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    let mut list = DynamicList::new();
    for _ in 0..5 {
        list.append(DropCounter(drops.clone()));
    }
    drop(list.remove_at(0).unwrap());
    assert_eq!(drops.get(), 1);
    list.set(0, DropCounter(drops.clone())).unwrap();
    assert_eq!(drops.get(), 2);
    drop(list);
    assert_eq!(drops.get(), 6);
}

#[test]
fn into_iter_drops_unconsumed_elements() {
    let drops = Rc::new(Cell::new(0));
    let list: DynamicList<_> = (0..4).map(|_| DropCounter(drops.clone())).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    assert_eq!(drops.get(), 1);
    drop(iter);
    assert_eq!(drops.get(), 4);
}

#[test]
fn buffers_are_returned_to_allocator() {
    let alloc = CountingAlloc::default();
    {
        let mut list = DynamicList::<u64, CountingAlloc>::new_in(alloc.clone());
        for i in 0..33u64 {
            list.append(i);
        }
        assert_eq!(list.capacity(), 64);
        assert!(alloc.0.allocs.get() > 1);
        assert_eq!(alloc.0.frees.get(), alloc.0.allocs.get() - 1);
    }
    assert_eq!(alloc.0.frees.get(), alloc.0.allocs.get());
    assert_eq!(alloc.0.live_bytes.get(), 0);
}

#[test]
fn fixed_list_allocates_once() {
    let alloc = CountingAlloc::default();
    {
        let mut list = FixedList::<u8, CountingAlloc>::with_capacity_in(3, alloc.clone()).unwrap();
        list.try_append(1).unwrap();
        list.try_append(2).unwrap();
        list.try_append(3).unwrap();
        assert!(list.try_append(4).is_err());
        assert_eq!(alloc.0.allocs.get(), 1);
    }
    assert_eq!(alloc.0.frees.get(), 1);
    assert_eq!(alloc.0.live_bytes.get(), 0);
}

#[test]
fn empty_list_never_allocates() {
    let alloc = CountingAlloc::default();
    let list = DynamicList::<u32, _>::new_in(alloc.clone());
    assert!(list.is_empty());
    drop(list);
    assert_eq!(alloc.0.allocs.get(), 0);
    assert_eq!(alloc.0.frees.get(), 0);
}

#[test]
fn lists_compare_across_policies() {
    let dynamic = DynamicList::from([1, 2, 3]);
    let fixed = FixedList::from_exact([1, 2, 3]).unwrap();
    assert_eq!(dynamic, fixed);
    assert_eq!(dynamic, &[1, 2, 3][..]);
}
