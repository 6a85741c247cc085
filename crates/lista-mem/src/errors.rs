#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListError {
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    FixedCapacity {
        capacity: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
    CapacityOverflow {
        requested: usize,
    },
}

impl core::fmt::Display for ListError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} was out of range of len {}", index, len)
            },
            Self::FixedCapacity { capacity } => {
                write!(f, "exceeded fixed capacity of {}", capacity)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::CapacityOverflow { requested } => {
                write!(f, "requested capacity {} overflows the address space", requested)
            },
        }
    }
}

impl core::error::Error for ListError {}
