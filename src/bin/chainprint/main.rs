use std::process::ExitCode;

use env_logger::Env;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod util;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::parse();
    let ctx = display::Context::for_stderr(cli.io.quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::run_describe(cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
