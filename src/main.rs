use clap::Parser;
use tribox::app;
use tribox::cli::{Cli, Commands};
use tribox::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => app::run_render(&args)?,
        Commands::InitConfig { path, force } => {
            let path = app::run_init_config(path, force)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
