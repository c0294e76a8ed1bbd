// CLI module for vl-convert-service

use clap::Parser;

/// vl-convert-service - Vega-Lite/Vega chart conversion over HTTP
#[derive(Parser, Debug)]
#[command(name = "vl-convert-service", version, about, long_about = None)]
pub struct Args {
    /// Port to listen on (overrides the configured port)
    pub port: Option<u16>,
}
