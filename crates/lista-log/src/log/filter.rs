use core::str::FromStr;

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use super::Level;

/// Per-target level thresholds, in the `RUST_LOG` syntax:
/// comma separated `level` or `target=level` entries.
#[derive(Clone, Debug)]
pub struct Filter {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filter {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filter {

    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(env) => Self::parse(&env),
            Err(_) => Self::default(),
        }
    }

    /// Unknown levels are ignored. A target named more than once keeps its
    /// quietest level.
    pub fn parse(spec: &str) -> Self {
        let mut filter = Self::default();
        for arg in spec.split(',') {
            let (target, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match target {
                Some(target) if !target.is_empty() => {
                    let entry = filter.target_levels
                        .entry(CompactString::new(target))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                _ => filter.base_level = level,
            }
        }
        filter
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Level of the closest configured `::` ancestor of `target`.
    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.target_level(target)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn default_is_error_only() {
        let filter = Filter::parse("");
        assert_eq!(filter.base_level(), Level::Error);
        assert!(filter.enabled("any", Level::Error));
        assert!(!filter.enabled("any", Level::Warn));
    }

    #[test]
    fn base_and_target_levels() {
        let filter = Filter::parse("warn, lista::demo=trace ,lista_mem=info");
        assert_eq!(filter.base_level(), Level::Warn);
        assert_eq!(filter.target_level("lista::demo"), Level::Trace);
        assert_eq!(filter.target_level("lista::demo::inner"), Level::Trace);
        assert_eq!(filter.target_level("lista"), Level::Warn);
        assert_eq!(filter.target_level("lista_mem"), Level::Info);
        assert_eq!(filter.target_level("other::module"), Level::Warn);
    }

    #[test]
    fn repeated_target_keeps_quietest() {
        let filter = Filter::parse("lista=trace,lista=warn");
        assert_eq!(filter.target_level("lista"), Level::Warn);
    }

    #[test]
    fn unknown_levels_are_ignored() {
        let filter = Filter::parse("loud,lista=verbose");
        assert_eq!(filter.base_level(), Level::Error);
        assert_eq!(filter.target_level("lista"), Level::Error);
    }
}
