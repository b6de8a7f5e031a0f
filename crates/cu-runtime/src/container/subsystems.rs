//! # Subsystem Container
//!
//! Holds one instance of every data-layer service.
//!
//! ## Construction Order
//!
//! ```text
//! HttpTransport ──→ GatewayClient ──→ GatewayTransactionLoader ──→ MessageHydrator
//!              └──→ SequencerClient
//! ProcessCacheProvider (opened lazily, on first use)
//! ```

use std::sync::Arc;

use cu_02_gateway::GatewayClient;
use cu_03_sequencer::SequencerClient;
use cu_04_hydrator::{GatewayTransactionLoader, MessageHydrator};
use cu_05_process_cache::ProcessCacheProvider;
use shared_http::{HttpTransport, ReqwestTransport};
use tracing::{info, instrument};

use crate::container::config::CuConfig;
use crate::errors::RuntimeError;
use crate::loader::ProcessLoader;

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    pub gateway: Arc<GatewayClient>,
    pub sequencer: Arc<SequencerClient>,
    pub hydrator: Arc<MessageHydrator>,
    /// Shared cache handle, opened on first `get()`.
    pub cache: Arc<ProcessCacheProvider>,
    /// Configuration (immutable after initialization).
    pub config: CuConfig,
}

impl SubsystemContainer {
    /// Validate `config` and build every subsystem over a reqwest transport.
    pub fn new(config: CuConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        let transport = Arc::new(ReqwestTransport::new(&config.transport_config())?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build every subsystem over the given transport.
    #[instrument(name = "subsystem_init", skip_all)]
    pub fn with_transport(config: CuConfig, transport: Arc<dyn HttpTransport>) -> Self {
        info!(
            gateway = %config.gateway_url,
            sequencer = %config.sequencer_url,
            db_path = %config.db_path.display(),
            local = config.use_local_network,
            "Initializing compute-unit data layer"
        );

        let gateway = Arc::new(GatewayClient::new(
            config.gateway_config(),
            Arc::clone(&transport),
        ));
        let sequencer = Arc::new(SequencerClient::new(config.sequencer_config(), transport));
        let hydrator = Arc::new(MessageHydrator::new(
            config.hydrator_config(),
            Arc::new(GatewayTransactionLoader::new(gateway.clone())),
        ));
        let cache = Arc::new(ProcessCacheProvider::new(config.cache_config()));

        Self {
            gateway,
            sequencer,
            hydrator,
            cache,
            config,
        }
    }

    /// Open the cache (if needed) and assemble a [`ProcessLoader`].
    pub async fn process_loader(&self) -> Result<ProcessLoader, RuntimeError> {
        let cache = self.cache.get().await?;
        Ok(ProcessLoader::new(
            self.gateway.clone(),
            self.sequencer.clone(),
            Arc::clone(&self.hydrator),
            cache,
        ))
    }
}
