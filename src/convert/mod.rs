//! Seam between the HTTP layer and the `vl-convert-rs` renderer.
//!
//! `ConvertService` owns the underlying [`VlConverter`] behind an async mutex
//! (its methods take `&mut self`), so conversions are serialized; there is no
//! other shared mutable state in the process. Every renderer failure, spec
//! parse failure, and parameter parse failure collapses here into
//! [`ServiceError::Conversion`], which the HTTP layer reports as a 400.

mod fonts;

pub use fonts::register_font_directory;

use crate::config::ConverterConfig;
use crate::error::{Result, ServiceError};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;
use tokio::sync::Mutex;
use vl_convert_rs::converter::{VgOpts, VlConverter, VlOpts};
use vl_convert_rs::module_loader::import::VlVersion;

/// Version of the underlying vl-convert renderer, reported by the
/// `/api/version` endpoint. Resolved from the lockfile at build time.
pub const VERSION: &str = env!("VL_CONVERT_RS_VERSION");

/// Optional parameters for the Vega-Lite conversion operations.
#[derive(Debug, Clone, Default)]
pub struct VegaLiteParams {
    /// Vega-Lite specification language version, e.g. `5.8`.
    pub vl_version: Option<String>,
    /// Named theme to merge into the chart config.
    pub theme: Option<String>,
}

/// Handle to the chart renderer shared across request handlers.
pub struct ConvertService {
    converter: Mutex<VlConverter>,
    allowed_base_urls: Vec<String>,
}

impl ConvertService {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            converter: Mutex::new(VlConverter::new()),
            allowed_base_urls: config.allowed_base_urls.clone(),
        }
    }

    pub async fn vegalite_to_svg(&self, spec: &str, params: &VegaLiteParams) -> Result<String> {
        let spec = parse_spec(spec)?;
        let opts = self.vl_opts(params)?;
        self.converter
            .lock()
            .await
            .vegalite_to_svg(spec, opts)
            .await
            .map_err(conversion_error)
    }

    pub async fn vegalite_to_png(
        &self,
        spec: &str,
        params: &VegaLiteParams,
        scale: f32,
    ) -> Result<Vec<u8>> {
        let spec = parse_spec(spec)?;
        let opts = self.vl_opts(params)?;
        self.converter
            .lock()
            .await
            .vegalite_to_png(spec, opts, Some(scale), None)
            .await
            .map_err(conversion_error)
    }

    pub async fn vegalite_to_pdf(
        &self,
        spec: &str,
        params: &VegaLiteParams,
        scale: f32,
    ) -> Result<Vec<u8>> {
        let spec = parse_spec(spec)?;
        let opts = self.vl_opts(params)?;
        self.converter
            .lock()
            .await
            .vegalite_to_pdf(spec, opts, Some(scale))
            .await
            .map_err(conversion_error)
    }

    /// Compile a Vega-Lite specification down to the Vega grammar.
    pub async fn vegalite_to_vega(&self, spec: &str, params: &VegaLiteParams) -> Result<Value> {
        let spec = parse_spec(spec)?;
        let opts = self.vl_opts(params)?;
        self.converter
            .lock()
            .await
            .vegalite_to_vega(spec, opts)
            .await
            .map_err(conversion_error)
    }

    pub async fn vega_to_svg(&self, spec: &str) -> Result<String> {
        let spec = parse_spec(spec)?;
        let opts = self.vg_opts();
        self.converter
            .lock()
            .await
            .vega_to_svg(spec, opts)
            .await
            .map_err(conversion_error)
    }

    pub async fn vega_to_png(&self, spec: &str, scale: f32) -> Result<Vec<u8>> {
        let spec = parse_spec(spec)?;
        let opts = self.vg_opts();
        self.converter
            .lock()
            .await
            .vega_to_png(spec, opts, Some(scale), None)
            .await
            .map_err(conversion_error)
    }

    pub async fn vega_to_pdf(&self, spec: &str, scale: f32) -> Result<Vec<u8>> {
        let spec = parse_spec(spec)?;
        let opts = self.vg_opts();
        self.converter
            .lock()
            .await
            .vega_to_pdf(spec, opts, Some(scale))
            .await
            .map_err(conversion_error)
    }

    fn vl_opts(&self, params: &VegaLiteParams) -> Result<VlOpts> {
        let vl_version = match params.vl_version.as_deref() {
            Some(version) => VlVersion::from_str(version).map_err(conversion_error)?,
            None => VlVersion::default(),
        };
        Ok(VlOpts {
            vl_version,
            theme: params.theme.clone(),
            allowed_base_urls: Some(self.allowed_base_urls.clone()),
            ..Default::default()
        })
    }

    fn vg_opts(&self) -> VgOpts {
        VgOpts {
            allowed_base_urls: Some(self.allowed_base_urls.clone()),
            ..Default::default()
        }
    }
}

/// Parse an output scale factor from its raw query-string value.
/// Absent and empty values fall back to 1.0.
pub fn parse_scale(raw: Option<&str>) -> Result<f32> {
    match raw {
        None | Some("") => Ok(1.0),
        Some(value) => value
            .parse::<f32>()
            .map_err(|_| ServiceError::Conversion(format!("invalid scale value: {value}"))),
    }
}

fn parse_spec(spec: &str) -> Result<Value> {
    serde_json::from_str(spec).map_err(conversion_error)
}

fn conversion_error<E: Display>(err: E) -> ServiceError {
    ServiceError::Conversion(err.to_string())
}
