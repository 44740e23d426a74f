//! CLI-side configuration: resolves `--config` into a `ToolConfig`.

use tracing::debug;

use arcmon_api::ToolConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub fn tool_config(global: &GlobalOpts) -> Result<ToolConfig, CliError> {
    let config = arcmon_config::load_config(global.config.as_deref())?;
    let tools = config.to_tool_config();
    debug!(
        arcconf = %tools.arcconf,
        lspci = %tools.lspci,
        timeout_secs = tools.timeout.as_secs(),
        "resolved tool configuration"
    );
    Ok(tools)
}
