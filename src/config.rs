use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Paths {
    pub content_dir: PathBuf,
}

#[derive(Deserialize, Default)]
pub struct Defaults {
    pub author: Option<String>,
    pub index_base_name: Option<String>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Option<Defaults>,
    pub log: Option<Log>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: Paths { content_dir: PathBuf::from("content") },
            defaults: None,
            log: None,
        }
    }
}

impl Config {
    pub fn default_author(&self) -> Option<String> {
        self.defaults.as_ref().and_then(|d| d.author.clone())
    }

    pub fn index_base_name(&self) -> String {
        self.defaults
            .as_ref()
            .and_then(|d| d.index_base_name.clone())
            .unwrap_or_else(|| "index".to_string())
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        content_dir: parse_path(cfg.paths.content_dir),
    };

    Ok(cfg)
}
