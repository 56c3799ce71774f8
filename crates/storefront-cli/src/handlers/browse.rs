use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "browse needs an interactive terminal; use 'storefront replay' for scripted output"
        );
    }

    let config = ctx.config()?;
    let renderer = TuiRenderer::new(ctx.controller(), config.store.clone(), config.tui.clone());
    renderer.run()
}
