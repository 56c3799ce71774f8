use super::HandlerContext;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use tracing::info;

pub fn init(ctx: &ExecutionContext, force: bool, out: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    let written = force || !path.exists();

    if written {
        Config::default().save_to(path)?;
        info!(path = %path.display(), "config written");
    }

    out.render(presenters::present_config_init(path, written))
}

pub fn show(ctx: &ExecutionContext, out: &HandlerContext) -> Result<()> {
    let config = ctx.config()?;
    out.render(presenters::present_config(ctx.config_path(), config))
}
