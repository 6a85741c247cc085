use std::{io, process::ExitCode};

use lista::{DemoSettings, log::{self, Filter}};

fn main() -> ExitCode {
    let settings = DemoSettings::from_env();
    log::init_with(Filter::from_env(), settings.color);
    log::debug!("{} starting", settings.app_name);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match lista::run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            for cause in err.chain() {
                log::error!("{}", cause);
            }
            ExitCode::FAILURE
        },
    }
}
