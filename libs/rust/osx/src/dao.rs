//! Sequencing of the multi-call OSx flows: create a DAO, prepare and apply a
//! plugin installation, submit proposals. Every step either succeeds or the
//! run aborts; partially completed on-chain effects are not rolled back.

use crate::{
    bindings::{
        Action, ApplyInstallationParams, DAOFactory, DAORegistry, DAOSettings, LensVotingPlugin,
        PluginRepo, PluginSettings, PluginSetupProcessor, PluginSetupRef,
        PrepareInstallationParams, DAO,
    },
    chain_data::{self, network_key},
    deployments::Deployment,
    encoding::{hash_helpers, permission_id, ROOT_PERMISSION},
    ipfs::{ipfs_uri, IpfsClient},
    metadata::{DaoMetadata, ProposalMetadata},
    receipts::find_event,
    voting::{LensVotingInstall, TokenVotingInstall, VoteOption},
};
use alloy::{
    primitives::{Address, Bytes, U256},
    providers::DynProvider,
    sol_types::SolCall,
};
use alloy_chains::NamedChain;
use anyhow::{Context, Result};
use tracing::{info, instrument};

/// Settings for a new DAO, before metadata is pinned.
#[derive(Clone, Debug)]
pub struct DaoSettings {
    pub metadata: DaoMetadata,
    pub subdomain: String,
    pub trusted_forwarder: Address,
    pub dao_uri: String,
}

/// Inputs for a new proposal on a majority-voting plugin.
#[derive(Clone, Debug)]
pub struct ProposalParams {
    pub metadata: ProposalMetadata,
    pub actions: Vec<Action>,
    pub allow_failure_map: U256,
    /// Unix seconds; 0 lets the contract pick "now".
    pub start_date: u64,
    /// Unix seconds; 0 lets the contract pick the minimum duration.
    pub end_date: u64,
    pub creator_vote: VoteOption,
    pub execute_on_pass: bool,
}

pub struct DaoClient {
    chain: NamedChain,
    provider: DynProvider,
    deployment: Deployment,
    ipfs: IpfsClient,
}

impl DaoClient {
    pub fn new(chain: NamedChain, provider: DynProvider, ipfs: IpfsClient) -> Result<Self> {
        let deployment = Deployment::from_chain(chain)
            .with_context(|| format!("No OSx deployment for network {}", chain))?;
        Ok(Self {
            chain,
            provider,
            deployment,
            ipfs,
        })
    }

    /// Client over the network and signer the environment selects.
    pub fn from_env() -> Result<Self> {
        let chain = chain_data::chain_from_env()?;
        let provider = chain_data::signing_provider(chain)?;
        let ipfs = IpfsClient::from_env()?;
        Self::new(chain, provider, ipfs)
    }

    pub fn chain(&self) -> NamedChain {
        self.chain
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Creates a DAO through the factory and returns its address, read from
    /// the registry's `DAORegistered` event in the receipt.
    #[instrument(skip(self, settings, install_items))]
    pub async fn create_dao(
        &self,
        settings: DaoSettings,
        install_items: Vec<PluginSettings>,
    ) -> Result<Address> {
        info!(subdomain = %settings.subdomain, "Building DAO");

        let metadata_cid = self.ipfs.upload_json(&settings.metadata).await?;
        let factory = DAOFactory::new(self.deployment.dao_factory, self.provider.clone());

        let dao_settings = DAOSettings {
            trustedForwarder: settings.trusted_forwarder,
            daoURI: settings.dao_uri,
            subdomain: settings.subdomain,
            metadata: Bytes::from(ipfs_uri(&metadata_cid).into_bytes()),
        };

        let receipt = factory
            .createDao(dao_settings, install_items)
            .send()
            .await
            .context("createDao transaction failed to send")?
            .get_receipt()
            .await
            .context("createDao transaction was not mined")?;

        let registered: DAORegistry::DAORegistered = find_event(&receipt)?;

        info!(
            dao = %registered.dao,
            subdomain = %registered.subdomain,
            tx = %receipt.transaction_hash,
            network = network_key(self.chain),
            "DAO registered"
        );
        Ok(registered.dao)
    }

    /// Resolves a repo's latest published version into a setup reference.
    pub async fn get_plugin_setup_ref(&self, repo_address: Address) -> Result<PluginSetupRef> {
        let repo = PluginRepo::new(repo_address, self.provider.clone());
        let release = repo
            .latestRelease()
            .call()
            .await
            .context("latestRelease call failed")?;
        let version = repo
            .getLatestVersion(release)
            .call()
            .await
            .context("getLatestVersion call failed")?;

        Ok(PluginSetupRef {
            versionTag: version.tag,
            pluginSetupRepo: repo_address,
        })
    }

    /// First phase of an installation. The returned params carry the helpers
    /// hash exactly as prepared; the setup processor rejects any mismatch
    /// when they are applied.
    #[instrument(skip(self, settings))]
    pub async fn prepare_installation(
        &self,
        dao: Address,
        settings: PluginSettings,
    ) -> Result<ApplyInstallationParams> {
        let psp = PluginSetupProcessor::new(
            self.deployment.plugin_setup_processor,
            self.provider.clone(),
        );

        let params = PrepareInstallationParams {
            pluginSetupRef: settings.pluginSetupRef,
            data: settings.data,
        };

        let receipt = psp
            .prepareInstallation(dao, params)
            .send()
            .await
            .context("prepareInstallation transaction failed to send")?
            .get_receipt()
            .await
            .context("prepareInstallation transaction was not mined")?;

        let prepared: PluginSetupProcessor::InstallationPrepared = find_event(&receipt)?;

        info!(plugin = %prepared.plugin, dao = %dao, "Installation prepared");

        Ok(ApplyInstallationParams {
            pluginSetupRef: PluginSetupRef {
                versionTag: prepared.versionTag,
                pluginSetupRepo: prepared.pluginSetupRepo,
            },
            plugin: prepared.plugin,
            permissions: prepared.preparedSetupData.permissions,
            helpersHash: hash_helpers(&prepared.preparedSetupData.helpers),
        })
    }

    /// Second phase, as an action for the DAO to execute.
    pub fn apply_installation_action(
        &self,
        dao: Address,
        params: ApplyInstallationParams,
    ) -> Action {
        let data = PluginSetupProcessor::applyInstallationCall { dao, params }.abi_encode();
        Action {
            to: self.deployment.plugin_setup_processor,
            value: U256::ZERO,
            data: data.into(),
        }
    }

    pub fn grant_action(&self, dao: Address, grantee: Address, permission: &str) -> Action {
        let data = DAO::grantCall {
            _where: dao,
            _who: grantee,
            _permissionId: permission_id(permission),
        }
        .abi_encode();
        Action {
            to: dao,
            value: U256::ZERO,
            data: data.into(),
        }
    }

    pub fn revoke_action(&self, dao: Address, grantee: Address, permission: &str) -> Action {
        let data = DAO::revokeCall {
            _where: dao,
            _who: grantee,
            _permissionId: permission_id(permission),
        }
        .abi_encode();
        Action {
            to: dao,
            value: U256::ZERO,
            data: data.into(),
        }
    }

    /// Prepares the installation and wraps the apply step in the required
    /// elevated-permission window: grant root to the setup processor, apply,
    /// revoke root.
    #[instrument(skip(self, settings))]
    pub async fn create_install_actions(
        &self,
        dao: Address,
        settings: PluginSettings,
    ) -> Result<Vec<Action>> {
        let psp = self.deployment.plugin_setup_processor;
        let prepared = self.prepare_installation(dao, settings).await?;
        let apply = self.apply_installation_action(dao, prepared);

        Ok(vec![
            self.grant_action(dao, psp, ROOT_PERMISSION),
            apply,
            self.revoke_action(dao, psp, ROOT_PERMISSION),
        ])
    }

    /// Install item for the admin plugin, targeting its latest published
    /// version.
    pub async fn admin_install_settings(&self, admin: Address) -> Result<PluginSettings> {
        info!(admin = %admin, "Preparing Admin plugin");
        let setup_ref = self.get_plugin_setup_ref(self.deployment.admin_repo).await?;
        Ok(PluginSettings {
            pluginSetupRef: setup_ref,
            data: crate::voting::encode_admin_install(admin),
        })
    }

    /// Install item for the token-voting plugin.
    pub async fn token_voting_install_settings(
        &self,
        install: &TokenVotingInstall,
    ) -> Result<PluginSettings> {
        let setup_ref = self
            .get_plugin_setup_ref(self.deployment.token_voting_repo)
            .await?;
        Ok(PluginSettings {
            pluginSetupRef: setup_ref,
            data: install.encode()?,
        })
    }

    /// Install item for the lens-voting plugin, against the repo this
    /// tooling published.
    pub async fn lens_voting_install_settings(
        &self,
        repo: Address,
        install: &LensVotingInstall,
    ) -> Result<PluginSettings> {
        let setup_ref = self.get_plugin_setup_ref(repo).await?;
        Ok(PluginSettings {
            pluginSetupRef: setup_ref,
            data: install.encode()?,
        })
    }

    /// Pins the proposal metadata and creates the proposal on a
    /// majority-voting plugin, returning the proposal id from the receipt.
    #[instrument(skip(self, params))]
    pub async fn create_proposal(&self, plugin: Address, params: ProposalParams) -> Result<U256> {
        let metadata_cid = self.ipfs.upload_json(&params.metadata).await?;
        let voting = LensVotingPlugin::new(plugin, self.provider.clone());

        let receipt = voting
            .createProposal(
                Bytes::from(ipfs_uri(&metadata_cid).into_bytes()),
                params.actions,
                params.allow_failure_map,
                params.start_date,
                params.end_date,
                params.creator_vote.to_contract(),
                params.execute_on_pass,
            )
            .send()
            .await
            .context("createProposal transaction failed to send")?
            .get_receipt()
            .await
            .context("createProposal transaction was not mined")?;

        let created: LensVotingPlugin::ProposalCreated = find_event(&receipt)?;

        info!(
            proposal_id = %created.proposalId,
            plugin = %plugin,
            tx = %receipt.transaction_hash,
            "Proposal created"
        );
        Ok(created.proposalId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::VersionTag;
    use alloy::providers::{Provider, ProviderBuilder};

    fn client() -> DaoClient {
        // No request ever goes out in these tests; the provider only has to
        // exist.
        let provider = ProviderBuilder::new()
            .connect_http("http://localhost:8545".parse().unwrap())
            .erased();
        DaoClient::new(
            NamedChain::Goerli,
            provider,
            IpfsClient::new_with_endpoint("http://localhost:0".into(), "token".into()),
        )
        .unwrap()
    }

    #[test]
    fn install_actions_are_grant_apply_revoke() {
        let client = client();
        let dao = Address::repeat_byte(0x11);
        let psp = client.deployment().plugin_setup_processor;

        let params = ApplyInstallationParams {
            pluginSetupRef: PluginSetupRef {
                versionTag: VersionTag {
                    release: 1,
                    build: 1,
                },
                pluginSetupRepo: Address::repeat_byte(0x22),
            },
            plugin: Address::repeat_byte(0x33),
            permissions: vec![],
            helpersHash: hash_helpers(&[]),
        };

        let grant = client.grant_action(dao, psp, ROOT_PERMISSION);
        let apply = client.apply_installation_action(dao, params);
        let revoke = client.revoke_action(dao, psp, ROOT_PERMISSION);

        // grant and revoke execute on the DAO itself, apply on the processor
        assert_eq!(grant.to, dao);
        assert_eq!(revoke.to, dao);
        assert_eq!(apply.to, psp);
        assert_eq!(grant.value, U256::ZERO);

        let decoded = DAO::grantCall::abi_decode(&grant.data).unwrap();
        assert_eq!(decoded._where, dao);
        assert_eq!(decoded._who, psp);
        assert_eq!(decoded._permissionId, permission_id(ROOT_PERMISSION));

        let decoded = PluginSetupProcessor::applyInstallationCall::abi_decode(&apply.data).unwrap();
        assert_eq!(decoded.dao, dao);
        assert_eq!(decoded.params.plugin, Address::repeat_byte(0x33));
    }

    #[test]
    fn grant_and_revoke_differ_only_in_selector() {
        let client = client();
        let dao = Address::repeat_byte(0x11);
        let psp = client.deployment().plugin_setup_processor;

        let grant = client.grant_action(dao, psp, ROOT_PERMISSION);
        let revoke = client.revoke_action(dao, psp, ROOT_PERMISSION);

        assert_ne!(grant.data[..4], revoke.data[..4]);
        assert_eq!(grant.data[4..], revoke.data[4..]);
    }
}
