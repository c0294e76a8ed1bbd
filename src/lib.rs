// vl-convert-service - HTTP front end for Vega-Lite/Vega chart conversion

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod server;
pub mod utils;
