//! Configuration module that handles all label settings

mod cli;
mod env;
mod label;

pub use cli::CliArgs;
pub use env::{load_env_vars, load_env_vars_from, EnvVars};
pub use label::LabelConfig;

/// Initialize configuration from all sources (CLI, environment)
pub fn init_config() -> LabelConfig {
    // Parse CLI args first
    let cli_args = CliArgs::parse();

    // Load environment variables
    let env_vars = load_env_vars();

    // Create LabelConfig by combining CLI args and environment variables
    LabelConfig::new(cli_args, env_vars)
}
