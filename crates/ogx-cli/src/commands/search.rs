use ogx_core::EntitySearchRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ogx search`.
pub async fn handle(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = EntitySearchRequest::from_parts(
        args.id.as_deref(),
        args.kind.as_deref(),
        args.minor.as_deref(),
        args.name.as_deref(),
    );
    let data = ctx.client.search(&request).await?;
    output(&data, flags.format)
}
