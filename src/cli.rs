use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "location-stub-server")]
#[command(about = "Standalone stub server for the location REST API")]
pub struct Cli {
    /// Directory holding `data.properties` and the `json/` response bodies
    #[arg(long, default_value = "fixtures")]
    pub fixtures: PathBuf,

    /// Port to bind the stub server to (a free port is picked if omitted)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
