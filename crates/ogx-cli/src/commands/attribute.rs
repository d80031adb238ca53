use anyhow::Context;
use ogx_core::AttributeQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AttributeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ogx attribute`.
pub async fn handle(
    args: &AttributeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = AttributeQuery {
        start_time: args.start_time.clone(),
        end_time: args.end_time.clone(),
        fields: args.fields.clone(),
    };

    if args.table {
        let table = ctx
            .client
            .attribute_table(&args.entity_id, &args.attribute, &query)
            .await?
            .with_context(|| {
                format!(
                    "attribute '{}' of {} has no values",
                    args.attribute, args.entity_id
                )
            })?;
        return output(&table, flags.format);
    }

    let data = ctx.client.attribute(&args.entity_id, &args.attribute, &query).await?;
    output(&data, flags.format)
}
