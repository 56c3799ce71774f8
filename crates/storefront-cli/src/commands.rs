use super::args::{Cli, Commands, ConfigCommand, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = match &cli.command {
        Some(Commands::Browse) => true,
        None => std::io::stdout().is_terminal(),
        Some(_) => false,
    };

    // The TUI owns the screen: it logs to --log-file or not at all
    if !interactive || cli.log_file.is_some() {
        logging::init(cli.log_level, cli.log_file.as_deref())?;
    }

    let ctx = ExecutionContext::new(cli.config)?;
    let format = cli.format;

    let Some(command) = cli.command else {
        if interactive {
            info!("no subcommand; opening the storefront");
            return handlers::browse::handle(&ctx);
        }
        return handlers::guidance::handle(&ctx, &HandlerContext::new(format, &ViewModeArgs::default()));
    };

    match command {
        Commands::Browse => {
            info!("browse");
            handlers::browse::handle(&ctx)
        }

        Commands::Replay {
            intents,
            file,
            view_mode,
        } => {
            info!(count = intents.len(), "replay");
            handlers::replay::handle(
                &ctx,
                &intents,
                file.as_deref(),
                &HandlerContext::new(format, &view_mode),
            )
        }

        Commands::Catalog {
            category,
            view_mode,
        } => {
            info!(%category, "catalog");
            handlers::catalog::handle(&ctx, &category, &HandlerContext::new(format, &view_mode))
        }

        Commands::Categories => {
            info!("categories");
            handlers::catalog::categories(
                &ctx,
                &HandlerContext::new(format, &ViewModeArgs::default()),
            )
        }

        Commands::Config { command } => {
            let out = HandlerContext::new(format, &ViewModeArgs::default());
            match command {
                ConfigCommand::Init { force } => handlers::config::init(&ctx, force, &out),
                ConfigCommand::Show => handlers::config::show(&ctx, &out),
            }
        }
    }
}
