use std::env;
use std::path::PathBuf;

use anyhow::Result;

use mdxforge::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_path = env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;

    if exe_dir.join(CFG_FILE_NAME).exists() {
        return Some(exe_dir.join(CFG_FILE_NAME));
    }

    let cur_dir = env::current_dir().ok()?;
    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    let cfg_dir = dirs::config_dir()?;
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

/// Resolves the configuration from an explicit path, the exe dir, the
/// current dir or the user config dir. Built-in defaults apply when no
/// config file exists anywhere.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Ok(Config::default()),
        Some(path) => path,
    };

    let config = read_config(&config_path)?;
    Ok(config)
}
