mod adapters;
mod cli;
mod config;
mod core;

use std::path::Path;

use clap::Parser;

use cli::Cli;
use config::app_config::AppConfig;
use config::settings::Settings;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let args = match Cli::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    cli::logging::init(args.verbose, args.quiet);

    let result = load_settings(&args)
        .and_then(|settings| {
            cli::commands::diff::execute(&args.file1, &args.file2, &settings)
                .map(|found| (found, settings.check))
        });

    match result {
        Ok((found, check)) if found > 0 && check => 1,
        Ok(_) => 0,
        Err(e) => {
            log::debug!("{e:?}");
            cli::output::error(&format!("Error: {e}"));
            1
        }
    }
}

fn load_settings(args: &Cli) -> crate::core::errors::Result<Settings> {
    let config = args
        .config
        .as_deref()
        .map(|path| AppConfig::load(Path::new(path)))
        .transpose()?;
    Settings::resolve(&args.options(), config.as_ref())
}
