use crate::cli::GlobalFlags;
use crate::cli::root_commands::EntityArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ogx metadata`.
pub async fn handle(
    args: &EntityArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let data = ctx.client.metadata(&args.entity_id).await?;
    output(&data, flags.format)
}
