use std::{
    io::Write,
    sync::OnceLock,
};

use core::str::FromStr;

use termcolor::StandardStream;

pub use termcolor::{ColorSpec, Color, ColorChoice, WriteColor};

use parking_lot::Mutex;

mod error;
mod filter;
pub mod fmt;

pub use error::LogError;
pub use filter::Filter;
pub use fmt::{LogFmt, LogFmtBuilder, LogSpec, SegmentSpec};

pub type Result<T> = core::result::Result<T, LogError>;

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl Level {

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

struct Logger {
    out: Box<dyn WriteColor + Send>,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    filter: Filter,
}

impl Logger {

    fn new(filter: Filter, out: Box<dyn WriteColor + Send>) -> Self {
        Self {
            out,
            error_fmt: LogFmt::level_default(Level::Error),
            warn_fmt: LogFmt::level_default(Level::Warn),
            info_fmt: LogFmt::level_default(Level::Info),
            debug_fmt: LogFmt::level_default(Level::Debug),
            trace_fmt: LogFmt::level_default(Level::Trace),
            filter,
        }
    }

    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filter.enabled(target, level) {
            return Ok(false)
        }
        let fmt = match level {
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        for segment in fmt {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        write!(self.out, "{}", msg)?;
                        self.out.reset()?;
                    } else {
                        write!(self.out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        self.out.write_all(text.as_bytes())?;
                        self.out.reset()?;
                    } else {
                        self.out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Installs the global logger writing to stderr, filtered by `RUST_LOG`.
///
/// Later calls are no-ops.
pub fn init() {
    init_with(Filter::from_env(), ColorChoice::Auto)
}

pub fn init_with(filter: Filter, color: ColorChoice) {
    init_with_writer(filter, Box::new(StandardStream::stderr(color)))
}

/// Installs the global logger with a custom sink.
pub fn init_with_writer(filter: Filter, out: Box<dyn WriteColor + Send>) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(filter, out)));
}

#[inline(always)]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Rebuilds the line format of `level`.
pub fn level_fmt(level: Level, f: impl FnOnce(&mut LogFmtBuilder)) -> Result<()> {
    let mut logger = LOGGER
        .get()
        .ok_or(LogError::Uninitialized)?
        .lock();
    let mut builder = LogFmtBuilder::new(logger.fmt_mut(level));
    f(&mut builder);
    Ok(())
}

#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    LOGGER
        .get()
        .ok_or(LogError::Uninitialized)?
        .lock()
        .log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
