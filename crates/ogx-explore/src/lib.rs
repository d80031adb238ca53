//! # ogx-explore
//!
//! Discovers the tree of categories and datasets below a root entity by
//! following relations through the read API.
//!
//! Termination does not depend on the shape of the remote graph: a visited
//! set stops cycles, a depth bound stops long chains, and a [`CancelToken`]
//! lets the caller stop a stalled exploration.
//!
//! ```no_run
//! use ogx_client::{ClientOptions, ReadApiClient};
//! use ogx_explore::{CancelToken, GraphExplorer};
//!
//! # async fn run() -> Result<(), ogx_client::ClientError> {
//! let client = ReadApiClient::new(&ClientOptions::default())?;
//! let explorer = GraphExplorer::new(client);
//! let result = explorer.explore("gov_01", &CancelToken::new()).await;
//! for node in result.nodes() {
//!     println!("{}{}", "  ".repeat(node.depth), node.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod context;
pub mod explorer;
pub mod rules;
pub mod source;

pub use cancel::CancelToken;
pub use context::TraversalContext;
pub use explorer::{DEFAULT_MAX_DEPTH, ExploreOptions, GraphExplorer};
pub use rules::ChildRelationRules;
pub use source::GraphSource;
