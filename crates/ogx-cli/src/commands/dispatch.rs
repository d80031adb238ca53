use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `main` runs `decode` before building the context so it works without a
/// usable config; routed here it simply ignores the context.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Metadata(args) => commands::metadata::handle(&args, ctx, flags).await,
        Commands::Relations(args) => commands::relations::handle(&args, ctx, flags).await,
        Commands::Attribute(args) => commands::attribute::handle(&args, ctx, flags).await,
        Commands::Explore(args) => commands::explore::handle(&args, ctx, flags).await,
        Commands::Decode(args) => commands::decode::handle(&args, flags),
    }
}

#[cfg(test)]
mod tests {
    use ogx_config::OgxConfig;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::DecodeArgs;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            show_calls: false,
        }
    }

    #[tokio::test]
    async fn decode_routes_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, r#"{"boolValue": true}"#).unwrap();
        let ctx = AppContext::init(OgxConfig::default()).unwrap();

        let command = Commands::Decode(DecodeArgs { file: Some(path) });
        dispatch(command, &ctx, &flags()).await.unwrap();

        assert!(ctx.client.calls().is_empty());
    }

    #[tokio::test]
    async fn decode_of_missing_file_is_an_error() {
        let ctx = AppContext::init(OgxConfig::default()).unwrap();
        let command = Commands::Decode(DecodeArgs {
            file: Some("/nonexistent/ogx/payload.json".into()),
        });

        let error = dispatch(command, &ctx, &flags()).await.unwrap_err();

        assert!(format!("{error:#}").contains("failed to read"));
    }
}
