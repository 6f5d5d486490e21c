use crate::shuttle::generate_ops;
use crate::shuttle::shuttle_config::ShuttleConfig;
use crate::shuttle::shuttle_error::ShuttleError;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ShuttleOperation {
    /// generate the extended network, transit schedule, and vehicle
    /// files for a shuttle service
    Generate {
        /// path to a .toml or .json file with shuttle generation parameters
        #[arg(long)]
        config_file: Option<String>,
        /// baseline network to extend, overrides the configured path
        #[arg(long)]
        input_network: Option<String>,
        /// where the output files land, overrides the configured path
        #[arg(long)]
        output_directory: Option<String>,
    },
}

impl ShuttleOperation {
    pub fn run(&self) -> Result<(), ShuttleError> {
        match self {
            ShuttleOperation::Generate {
                config_file,
                input_network,
                output_directory,
            } => {
                let mut config = match config_file {
                    None => ShuttleConfig::default(),
                    Some(f) => {
                        log::info!("reading shuttle configuration from {f}");
                        ShuttleConfig::try_from(f)?
                    }
                };
                if let Some(path) = input_network {
                    config.input_network = PathBuf::from(path);
                }
                if let Some(path) = output_directory {
                    config.output_directory = Some(PathBuf::from(path));
                }
                generate_ops::generate_scenario(&config)
            }
        }
    }
}
