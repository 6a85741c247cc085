//! Growth rules for [`AllocList`](crate::AllocList).

pub trait CapacityPolicy {
    fn power_of_two() -> bool;
    fn can_grow() -> bool;
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Grows to the next power of two, never below 2.
#[derive(Clone, Copy, Debug)]
pub struct Dyn {}

impl CapacityPolicy for Dyn {

    #[inline]
    fn power_of_two() -> bool {
        true
    }

    #[inline]
    fn can_grow() -> bool {
        true
    }

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { required.max(2).checked_next_power_of_two() }
    }
}

/// Capacity chosen at construction, never grows.
#[derive(Clone, Copy, Debug)]
pub struct Fixed {}

impl CapacityPolicy for Fixed {

    #[inline]
    fn power_of_two() -> bool {
        false
    }

    #[inline]
    fn can_grow() -> bool {
        false
    }

    #[inline]
    fn grow(_: usize, _: usize) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn dyn_grows_to_powers_of_two() {
        assert_eq!(Dyn::grow(0, 1), Some(2));
        assert_eq!(Dyn::grow(2, 3), Some(4));
        assert_eq!(Dyn::grow(4, 9), Some(16));
        assert_eq!(Dyn::grow(8, 8), None);
        assert_eq!(Dyn::grow(0, usize::MAX), None);
    }

    #[test]
    fn fixed_never_grows() {
        assert!(!Fixed::can_grow());
        assert_eq!(Fixed::grow(0, 1), None);
    }
}
