use serde::{Deserialize, Serialize};

/// Chains the dashboard knows how to talk about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkId {
    Mainnet,
    TestnetRinkeby,
    Arbitrum,
}

impl NetworkId {
    pub fn chain_id(&self) -> u64 {
        match self {
            NetworkId::Mainnet => 1,
            NetworkId::TestnetRinkeby => 4,
            NetworkId::Arbitrum => 42161,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(NetworkId::Mainnet),
            4 => Some(NetworkId::TestnetRinkeby),
            42161 => Some(NetworkId::Arbitrum),
            _ => None,
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, NetworkId::TestnetRinkeby)
    }

    pub fn as_str(&self) -> &str {
        match self {
            NetworkId::Mainnet => "mainnet",
            NetworkId::TestnetRinkeby => "testnet-rinkeby",
            NetworkId::Arbitrum => "arbitrum",
        }
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.chain_id())
    }
}
