use core::error;

use super::any::AnyError;

pub trait Context<T, E: error::Error + Send + Sync + 'static> {

    fn ctx_err(self, ctx: impl AsRef<str>) -> Result<T, AnyError>;

    fn ctx_err_with<C: AsRef<str>>(self, f: impl FnOnce() -> C) -> Result<T, AnyError>;
}

impl<T, E: error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {

    fn ctx_err(self, ctx: impl AsRef<str>) -> Result<T, AnyError> {
        self.map_err(|err| AnyError::new(ctx, err))
    }

    fn ctx_err_with<C: AsRef<str>>(self, f: impl FnOnce() -> C) -> Result<T, AnyError> {
        self.map_err(|err| AnyError::new(f(), err))
    }
}

#[cfg(test)]
mod tests {

    use std::io;

    use super::*;

    #[test]
    fn wraps_error_with_context() {
        let res: Result<(), io::Error> = Err(io::Error::other("disk"));
        let err = res.ctx_err("failed to write").unwrap_err();
        assert_eq!(err.to_string(), "failed to write");
        assert_eq!(
            error::Error::source(&err).map(|e| e.to_string()).as_deref(),
            Some("disk"),
        );
    }

    #[test]
    fn context_closure_only_runs_on_error() {
        let res: Result<u8, io::Error> = Ok(1);
        let value = res.ctx_err_with(|| -> String { panic!("should not run") }).unwrap();
        assert_eq!(value, 1);
    }
}
