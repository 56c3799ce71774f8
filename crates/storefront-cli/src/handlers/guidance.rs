use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

/// What to print when there is no subcommand and no terminal to browse in.
pub fn handle(ctx: &ExecutionContext, out: &HandlerContext) -> Result<()> {
    let config = ctx.config()?;
    let controller = ctx.controller();
    out.render(presenters::present_guidance(
        &config.store.name,
        controller.catalog(),
    ))
}
