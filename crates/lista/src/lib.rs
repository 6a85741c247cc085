mod settings;
mod demo;

pub use settings::DemoSettings;
pub use demo::run;

pub use lista_mem as mem;
pub use lista_error as error;
pub use lista_log as log;
