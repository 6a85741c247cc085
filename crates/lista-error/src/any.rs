//! Provides [`AnyError`], a described wrapper around any source error.

use core::{
    fmt::{self, Display, Debug, Formatter},
    error,
};

use compact_str::CompactString;

pub struct AnyError {
    desc: CompactString,
    err: Option<Box<dyn error::Error + Send + Sync>>,
}

impl AnyError {

    pub fn new(desc: impl AsRef<str>, err: impl error::Error + Send + Sync + 'static) -> Self {
        Self {
            desc: CompactString::new(desc),
            err: Some(Box::new(err)),
        }
    }

    /// An error with a description and no underlying cause.
    pub fn just_context(desc: impl AsRef<str>) -> Self {
        Self {
            desc: CompactString::new(desc),
            err: None,
        }
    }

    #[inline(always)]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Walks the source chain, starting with this error.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn error::Error + 'static)> {
        let mut next = Some(self as &(dyn error::Error + 'static));
        core::iter::from_fn(move || {
            let current = next?;
            next = current.source();
            Some(current)
        })
    }
}

impl Debug for AnyError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.err {
            Some(err) => write!(f, "AnyError(desc: {}, err: {:?})", self.desc, err),
            None => write!(f, "AnyError(desc: {}, err: None)", self.desc),
        }
    }
}

impl Display for AnyError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.desc)
    }
}

impl error::Error for AnyError {

    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.err
            .as_deref()
            .map(|err| err as &(dyn error::Error + 'static))
    }
}
