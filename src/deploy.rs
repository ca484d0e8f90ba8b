// src/deploy.rs

use crate::{artifact::Artifact, config::DeployConfig, error::DeployError};
use ethers::{
    prelude::{ContractFactory, Http, LocalWallet, Middleware, Provider, Signer, SignerMiddleware},
    types::Address,
};
use std::sync::Arc;
use tokio::time::{timeout, Duration};
use tracing::{info, instrument, warn};

pub type DeployClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Builds the HTTP provider + signing client for the configured
/// endpoint, pinning the wallet to the node's chain id.
pub async fn connect(config: &DeployConfig) -> Result<Arc<DeployClient>, DeployError> {
    let provider = Provider::<Http>::try_from(config.http_rpc_url.as_str())
        .map_err(|e| DeployError::Rpc(format!("invalid HTTP_RPC_URL: {e}")))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| DeployError::Rpc(format!("failed to fetch chain id: {e}")))?
        .as_u64();
    let wallet = config
        .private_key
        .parse::<LocalWallet>()
        .map_err(|e| DeployError::Config(format!("LOCAL_PRIVATE_KEY is not a valid key: {e}")))?
        .with_chain_id(chain_id);
    info!(chain_id, wallet = ?wallet.address(), "provider & client setup complete");
    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}

/// One-shot deployment: resolve the artifact, submit the creation
/// transaction, wait for its receipt. Exactly one attempt is made; a
/// `ConfirmationTimeout` or `Dropped` result does not mean the
/// transaction is gone from the network, only that this process never
/// saw it confirm. Reconcile against chain state before re-running.
#[instrument(skip_all, fields(artifact = %config.artifact_name))]
pub async fn run(config: &DeployConfig) -> Result<Address, DeployError> {
    let artifact = Artifact::load(&config.artifacts_dir, &config.artifact_name)?;
    let client = connect(config).await?;
    deploy_artifact(
        client,
        &artifact,
        Duration::from_secs(config.confirmation_timeout_secs),
    )
    .await
}

/// Submits the deployment transaction for `artifact` and waits up to
/// `confirmation_timeout` for the receipt.
pub async fn deploy_artifact(
    client: Arc<DeployClient>,
    artifact: &Artifact,
    confirmation_timeout: Duration,
) -> Result<Address, DeployError> {
    let factory = ContractFactory::new(
        artifact.abi.clone(),
        artifact.bytecode.clone(),
        client.clone(),
    );

    // Empty constructor arguments; the factory checks them against the ABI.
    let deployer = factory.deploy(()).map_err(|e| DeployError::InvalidArtifact {
        name: artifact.contract_name.clone(),
        reason: format!("failed to construct deployment call: {e}"),
    })?;
    let deploy_tx = deployer.tx.clone();

    info!("sending deployment transaction...");
    let pending_tx = client
        .send_transaction(deploy_tx, None)
        .await
        .map_err(|e| DeployError::Submission(e.to_string()))?;
    let tx_hash = pending_tx.tx_hash();
    info!(?tx_hash, "deployment transaction submitted, waiting for receipt...");

    let receipt = match timeout(confirmation_timeout, pending_tx).await {
        Ok(Ok(Some(receipt))) => receipt,
        Ok(Ok(None)) => {
            warn!(?tx_hash, "receipt not found, transaction dropped or replaced");
            return Err(DeployError::Dropped { tx_hash });
        }
        Ok(Err(e)) => return Err(DeployError::Rpc(format!("error waiting for receipt: {e}"))),
        Err(_) => {
            warn!(?tx_hash, "still unconfirmed after {}s", confirmation_timeout.as_secs());
            return Err(DeployError::ConfirmationTimeout {
                tx_hash,
                secs: confirmation_timeout.as_secs(),
            });
        }
    };

    if receipt.status != Some(1.into()) {
        return Err(DeployError::Reverted { tx_hash });
    }
    let address = receipt
        .contract_address
        .ok_or(DeployError::Dropped { tx_hash })?;

    info!(
        ?address,
        block = ?receipt.block_number,
        gas_used = ?receipt.gas_used,
        "deployment confirmed"
    );
    Ok(address)
}
