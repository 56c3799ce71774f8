use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use storefront_types::Category;

pub fn handle(ctx: &ExecutionContext, category: &str, out: &HandlerContext) -> Result<()> {
    let controller = ctx.controller();
    let category = Category::from(category);
    out.render(presenters::present_catalog(controller.catalog(), &category))
}

pub fn categories(ctx: &ExecutionContext, out: &HandlerContext) -> Result<()> {
    let controller = ctx.controller();
    out.render(presenters::present_categories(controller.catalog()))
}
