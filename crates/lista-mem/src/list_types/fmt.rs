use core::fmt::{self, Debug, Display, Formatter};

use crate::{
    allocator::Allocator,
    capacity_policy::CapacityPolicy,
};

use super::AllocList;

impl<T, CapacityPol, Alloc> Debug for AllocList<T, CapacityPol, Alloc>
    where
        T: Debug,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes `[a, b, c]`.
impl<T, CapacityPol, Alloc> Display for AllocList<T, CapacityPol, Alloc>
    where
        T: Display,
        CapacityPol: CapacityPolicy,
        Alloc: Allocator,
{

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            Display::fmt(value, f)?;
        }
        write!(f, "]")
    }
}
