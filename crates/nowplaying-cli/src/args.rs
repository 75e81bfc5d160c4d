use crate::types::{ColorMode, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nowplaying")]
#[command(about = "Show what a media server is currently playing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Servers to query, as host or host:port (default: hosts from the config file)")]
    pub hosts: Vec<String>,

    #[arg(long, help = "Config file (default: $NOWPLAYING_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub port: Option<u16>,

    #[arg(long, env = "NOWPLAYING_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, help = "Per-request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Report width (default: terminal width)")]
    pub columns: Option<usize>,

    #[arg(long)]
    pub color: Option<ColorMode>,

    #[arg(long, help = "Character that joins titles to the user column")]
    pub leader: Option<char>,

    #[arg(short, long, help = "Say so when nothing is playing")]
    pub verbose: bool,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
