use compact_str::CompactString;

use lista_log::ColorChoice;

pub struct DemoSettings {
    pub app_name: CompactString,
    pub color: ColorChoice,
}

impl DemoSettings {

    pub fn new(app_name: &str, color: ColorChoice) -> Self {
        Self {
            app_name: CompactString::new(app_name),
            color,
        }
    }

    /// Colour follows the terminal unless `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let color =
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                ColorChoice::Never
            }
            else {
                ColorChoice::Auto
            };
        Self::new(env!("CARGO_PKG_NAME"), color)
    }
}
