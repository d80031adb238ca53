use anyhow::Context;
use ogx_client::ReadApiClient;
use ogx_config::OgxConfig;

/// Shared state for API-backed commands.
pub struct AppContext {
    pub config: OgxConfig,
    pub client: ReadApiClient,
}

impl AppContext {
    pub fn init(config: OgxConfig) -> anyhow::Result<Self> {
        let options = config
            .api
            .client_options()
            .context("invalid [api] configuration (set OGX_API__BASE_URL or api.base_url)")?;
        let client = ReadApiClient::new(&options).context("failed to build read API client")?;
        tracing::debug!(base_url = client.base_url(), "read API client ready");
        Ok(Self { config, client })
    }
}
