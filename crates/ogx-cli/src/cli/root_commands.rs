use std::path::PathBuf;

use clap::{Args, Subcommand};
use ogx_core::Direction;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search entities by id, kind and/or name.
    Search(SearchArgs),
    /// Show the metadata of an entity.
    Metadata(EntityArgs),
    /// List the relations of an entity.
    Relations(RelationsArgs),
    /// Fetch the values of one attribute of an entity.
    Attribute(AttributeArgs),
    /// Discover the category/dataset tree below an entity.
    Explore(ExploreArgs),
    /// Decode a read API payload offline (file or stdin).
    Decode(DecodeArgs),
}

/// Arguments for `ogx search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub id: Option<String>,
    /// Major kind, e.g. `Category` or `Dataset`.
    #[arg(long)]
    pub kind: Option<String>,
    /// Minor kind; only sent together with `--kind`.
    #[arg(long)]
    pub minor: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

/// A command that only needs an entity id.
#[derive(Clone, Debug, Args)]
pub struct EntityArgs {
    pub entity_id: String,
}

/// Arguments for `ogx relations`.
#[derive(Clone, Debug, Args)]
pub struct RelationsArgs {
    pub entity_id: String,
    /// Look up a single relation; every other filter is ignored.
    #[arg(long = "id")]
    pub relation_id: Option<String>,
    #[arg(long)]
    pub related_entity_id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// OUTGOING or INCOMING.
    #[arg(long)]
    pub direction: Option<Direction>,
    /// Relations active at this instant; overrides the start/end window.
    #[arg(long)]
    pub active_at: Option<String>,
    #[arg(long)]
    pub start_time: Option<String>,
    #[arg(long)]
    pub end_time: Option<String>,
}

/// Arguments for `ogx attribute`.
#[derive(Clone, Debug, Args)]
pub struct AttributeArgs {
    pub entity_id: String,
    pub attribute: String,
    #[arg(long)]
    pub start_time: Option<String>,
    #[arg(long)]
    pub end_time: Option<String>,
    /// Restrict to these fields (repeatable).
    #[arg(long = "field")]
    pub fields: Vec<String>,
    /// Shape the values into columns and rows.
    #[arg(long)]
    pub table: bool,
}

/// Arguments for `ogx explore`.
#[derive(Clone, Debug, Args)]
pub struct ExploreArgs {
    pub entity_id: String,
    /// Overrides `explore.max_depth` from the config.
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for `ogx decode`.
#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// JSON file to decode; reads stdin when omitted.
    pub file: Option<PathBuf>,
}
