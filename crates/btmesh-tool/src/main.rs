use std::path::PathBuf;

use clap::{Parser, Subcommand};

use btmesh_tool::report::{self, AppKeyReport, SubnetReport};
use btmesh_tool::{ToolConfig, ToolError};

#[derive(Parser)]
#[command(name = "btmesh", about = "Bluetooth Mesh key, beacon and address inspector")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive subnet keys and AIDs from the configured NetKey and AppKeys
    Keys,
    /// Build the secure network beacon for the configured subnet
    Beacon {
        /// Override the configured flags
        #[arg(long)]
        flags: Option<u8>,
        /// Override the configured IV index
        #[arg(long, value_parser = parse_u32)]
        iv_index: Option<u32>,
    },
    /// Print virtual addresses for configured and given label UUIDs
    Virtual {
        /// Additional label UUIDs
        #[arg(long = "uuid")]
        uuids: Vec<uuid::Uuid>,
        /// Find the label UUID for this virtual address instead
        #[arg(long, value_parser = parse_u32)]
        resolve: Option<u32>,
    },
    /// Classify a mesh address
    Classify {
        #[arg(value_parser = parse_u32)]
        address: u32,
    },
    /// Encode an access-layer opcode
    Opcode {
        #[arg(value_parser = parse_u32, required_unless_present = "decode")]
        opcode: Option<u32>,
        /// Decode a hex-encoded opcode instead
        #[arg(long, conflicts_with = "opcode")]
        decode: Option<String>,
    },
}

fn parse_u32(s: &str) -> Result<u32, String> {
    report::parse_number(s).map_err(|e| e.to_string())
}

fn run(command: Command, config: &ToolConfig) -> Result<(), ToolError> {
    match command {
        Command::Keys => {
            let network = config.require_network()?;
            println!("{}", SubnetReport::derive(&network.net_key()?));
            for entry in &config.app_keys {
                println!("{}", AppKeyReport::derive(entry)?);
            }
        }
        Command::Beacon { flags, iv_index } => {
            let beacon = report::build_beacon(config.require_network()?, flags, iv_index)?;
            println!("{}", report::describe_beacon(&beacon));
        }
        Command::Virtual { uuids, resolve } => {
            let mut labels = config.label_uuids()?;
            labels.extend(uuids);
            match resolve {
                Some(address) => {
                    let address = u16::try_from(address).map_err(|_| {
                        ToolError::Argument(format!("0x{address:X} is not a 16-bit address"))
                    })?;
                    match report::resolve_virtual_address(&labels, address) {
                        Some(label) => println!("0x{address:04X}  {label}"),
                        None => println!("0x{address:04X}  no matching label"),
                    }
                }
                None => {
                    for entry in report::virtual_addresses(&labels) {
                        println!("{entry}");
                    }
                }
            }
        }
        Command::Classify { address } => {
            println!("{}", report::classify(address));
        }
        Command::Opcode { opcode, decode } => {
            let report = match (opcode, decode) {
                (_, Some(hex)) => report::decode_opcode_report(&hex)?,
                (Some(opcode), None) => report::encode_opcode_report(opcode)?,
                (None, None) => return Err(ToolError::Argument("missing opcode".into())),
            };
            println!("{report}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ToolConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("failed to load config from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => ToolConfig::default(),
    };

    // Initialize logging
    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        btmesh_tool::logging::init_json(&config.logging.level);
    } else {
        btmesh_tool::logging::init(&config.logging.level);
    }

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("command failed: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
