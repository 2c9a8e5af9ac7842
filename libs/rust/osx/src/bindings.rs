//! `sol!` interfaces for the Aragon OSx framework contracts this tooling
//! calls. Only the functions, events and structs the deployment flows touch
//! are declared; the full contracts live in the audited OSx repository.

use alloy::sol;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct VersionTag {
        uint8 release;
        uint16 build;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct PluginSetupRef {
        VersionTag versionTag;
        address pluginSetupRepo;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct MultiTargetPermission {
        uint8 operation;
        address where_;
        address who;
        address condition;
        bytes32 permissionId;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct PreparedSetupData {
        address[] helpers;
        MultiTargetPermission[] permissions;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct DAOSettings {
        address trustedForwarder;
        string daoURI;
        string subdomain;
        bytes metadata;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct PluginSettings {
        PluginSetupRef pluginSetupRef;
        bytes data;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct PrepareInstallationParams {
        PluginSetupRef pluginSetupRef;
        bytes data;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct ApplyInstallationParams {
        PluginSetupRef pluginSetupRef;
        address plugin;
        MultiTargetPermission[] permissions;
        bytes32 helpersHash;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct Version {
        VersionTag tag;
        address pluginSetup;
        bytes buildMetadata;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct Action {
        address to;
        uint256 value;
        bytes data;
    }

    // MajorityVotingBase.VotingSettings, plus the token-voting setup inputs.
    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct VotingSettings {
        uint8 votingMode;
        uint64 supportThreshold;
        uint64 minParticipation;
        uint64 minDuration;
        uint256 minProposerVotingPower;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct TokenSettings {
        address addr;
        string name;
        string symbol;
    }

    #[allow(missing_docs)]
    #[derive(Debug, PartialEq, Eq)]
    struct MintSettings {
        address[] receivers;
        uint256[] amounts;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface DAOFactory {
        function createDao(DAOSettings daoSettings, PluginSettings[] pluginSettings) external returns (address createdDao);
    }

    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface DAORegistry {
        event DAORegistered(address indexed dao, address indexed creator, string subdomain);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface PluginRepoFactory {
        function createPluginRepoWithFirstVersion(string subdomain, address pluginSetup, address maintainer, bytes releaseMetadata, bytes buildMetadata) external returns (address pluginRepo);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface PluginRepoRegistry {
        event PluginRepoRegistered(string subdomain, address pluginRepo);
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface PluginRepo {
        function latestRelease() external view returns (uint8);
        function getLatestVersion(uint8 release) external view returns (Version latestVersion);
        function createVersion(uint8 release, address pluginSetup, bytes buildMetadata, bytes releaseMetadata) external;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface PluginSetupProcessor {
        event InstallationPrepared(
            address indexed sender,
            address indexed dao,
            bytes32 preparedSetupId,
            address indexed pluginSetupRepo,
            VersionTag versionTag,
            bytes data,
            address plugin,
            PreparedSetupData preparedSetupData
        );

        function prepareInstallation(address dao, PrepareInstallationParams params) external returns (address plugin, PreparedSetupData preparedSetupData);
        function applyInstallation(address dao, ApplyInstallationParams params) external;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface DAO {
        function grant(address _where, address _who, bytes32 _permissionId) external;
        function revoke(address _where, address _who, bytes32 _permissionId) external;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    interface LensVotingPlugin {
        event ProposalCreated(
            uint256 indexed proposalId,
            address indexed creator,
            uint64 startDate,
            uint64 endDate,
            bytes metadata,
            Action[] actions,
            uint256 allowFailureMap
        );

        function getVotingToken() external view returns (address votingToken);
        function createProposal(bytes metadata, Action[] actions, uint256 allowFailureMap, uint64 startDate, uint64 endDate, uint8 voteOption, bool tryEarlyExecution) external returns (uint256 proposalId);
    }
}
