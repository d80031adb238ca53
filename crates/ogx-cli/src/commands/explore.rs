use anyhow::bail;
use ogx_core::requests::require_entity_id;
use ogx_explore::{CancelToken, ExploreOptions, GraphExplorer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExploreArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ogx explore`. Ctrl-C cancels the traversal.
pub async fn handle(
    args: &ExploreArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_entity_id(&args.entity_id)?;

    let options = ExploreOptions {
        max_depth: args.max_depth.unwrap_or(ctx.config.explore.max_depth),
        ..ExploreOptions::default()
    };
    let explorer = GraphExplorer::with_options(ctx.client.clone(), options);

    let cancel = CancelToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted, cancelling exploration");
                cancel.cancel();
            }
        })
    };

    let result = explorer.explore(&args.entity_id, &cancel).await;
    interrupt.abort();

    output(&result, flags.format)?;
    if let Some(error) = &result.error {
        if result.is_cancelled() {
            bail!("exploration of {} was cancelled", args.entity_id);
        }
        bail!("exploration of {} failed: {error}", args.entity_id);
    }
    Ok(())
}
