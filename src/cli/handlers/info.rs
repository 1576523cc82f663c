//! Information display handlers (config)

use anyhow::Result;

use crate::cli::output::*;
use crate::AppConfig;

pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
