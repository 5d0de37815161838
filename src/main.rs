use std::io;

use anyhow::Result;
use clap::Parser;

mod cli;
mod runtime;

use cli::CliArgs;
use runtime::Host;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    cmdedit::tracing::init();

    let config = args.editor_config();

    if args.init_config {
        match &args.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        return Ok(());
    }

    let mut host = Host::new(&config, args.history, args.json);

    let stdin = io::stdin();
    let stdout = io::stdout();
    host.run(stdin.lock(), stdout.lock())
}
