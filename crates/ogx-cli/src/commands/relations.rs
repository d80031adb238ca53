use ogx_core::RelationFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RelationsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ogx relations`.
pub async fn handle(
    args: &RelationsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = RelationFilter {
        relation_id: args.relation_id.clone(),
        related_entity_id: args.related_entity_id.clone(),
        name: args.name.clone(),
        direction: args.direction,
        active_at: args.active_at.clone(),
        start_time: args.start_time.clone(),
        end_time: args.end_time.clone(),
    };
    let relations = ctx
        .client
        .relations(&args.entity_id, &filter.to_request())
        .await?;
    output(&relations, flags.format)
}
