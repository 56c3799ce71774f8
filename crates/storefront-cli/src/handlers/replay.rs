use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::intent::{ParsedIntent, parse_script};
use crate::presentation::presenters;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Arguments first, then the lines of `file`, all against one fresh session.
pub fn handle(
    ctx: &ExecutionContext,
    intents: &[String],
    file: Option<&Path>,
    out: &HandlerContext,
) -> Result<()> {
    let mut parsed = intents
        .iter()
        .map(|raw| raw.parse::<ParsedIntent>())
        .collect::<storefront_types::Result<Vec<_>>>()?;

    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read intent file {}", path.display()))?;
        parsed.extend(parse_script(&text)?);
    }

    let config = ctx.config()?;
    let mut controller = ctx.controller();
    let mut model = controller.render();
    let applied = parsed.len();

    for intent in parsed {
        let intent = intent.resolve(controller.catalog())?;
        model = controller.dispatch(intent);
    }
    info!(applied, items = model.cart_item_count, "replay finished");

    out.render(presenters::present_replay(&model, &config.store, applied))
}
