use clap::{Parser, Subcommand};
use fcaddr_types::Network;

mod commands;

/// Address command-line interface.
#[derive(Parser)]
#[command(name = "fcaddr")]
#[command(about = "Create, decode and validate checksummed addresses")]
#[command(version)]
struct Cli {
    /// Network to use when creating addresses.
    #[arg(long, global = true, default_value = "testnet")]
    network: NetworkArg,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum NetworkArg {
    Mainnet,
    Testnet,
}

impl std::fmt::Display for NetworkArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

impl std::str::FromStr for NetworkArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "fc" => Ok(Self::Mainnet),
            "testnet" | "test" | "tf" => Ok(Self::Testnet),
            _ => Err(format!("unknown network: {} (use mainnet or testnet)", s)),
        }
    }
}

impl NetworkArg {
    fn to_network(&self) -> Network {
        match self {
            Self::Mainnet => Network::Mainnet,
            Self::Testnet => Network::Testnet,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build an address from a 20-byte hex hash.
    New {
        /// Address hash as 40 hex characters.
        hash: String,
    },

    /// Hash a payload and build an address from the digest.
    Hash {
        /// Payload to hash (UTF-8 text).
        payload: String,
    },

    /// Decode an address string and show its components.
    Decode {
        address: String,
    },

    /// Decode the 22-byte binary form given as hex.
    FromBytes {
        /// Binary address as 44 hex characters.
        hex: String,
    },

    /// Check whether an address string is valid.
    Validate {
        address: String,
    },
}

/// Options shared across commands.
pub struct AppContext {
    pub network: Network,
    pub json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let ctx = AppContext {
        network: cli.network.to_network(),
        json: cli.json,
    };
    log::debug!("network: {}", cli.network);

    let result = match cli.command {
        Commands::New { hash } => commands::new_address(&ctx, &hash),
        Commands::Hash { payload } => commands::hash_address(&ctx, &payload),
        Commands::Decode { address } => commands::decode_address(&ctx, &address),
        Commands::FromBytes { hex } => commands::from_bytes(&ctx, &hex),
        Commands::Validate { address } => commands::validate(&ctx, &address),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
