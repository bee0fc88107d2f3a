use anyhow::{Context, Result};
use clap::Parser;
use std::{env, str::FromStr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";
const DEFAULT_QR_SIZE: u32 = 200;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub qr_size: u32,
    pub max_upload_bytes: usize,
    pub static_dir: Option<String>,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Photo booth upload and QR code API")]
pub struct Args {
    /// Host to bind to (overrides PHOTO_BOOTH_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PHOTO_BOOTH_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Public base URL embedded in download links (overrides PHOTO_BOOTH_PUBLIC_URL)
    #[arg(long)]
    pub public_url: Option<String>,

    /// Side length of generated QR images in pixels (overrides PHOTO_BOOTH_QR_SIZE)
    #[arg(long)]
    pub qr_size: Option<u32>,

    /// Maximum accepted request body size (overrides PHOTO_BOOTH_MAX_UPLOAD_BYTES)
    #[arg(long)]
    pub max_upload_bytes: Option<usize>,

    /// Directory of static frontend files (overrides PHOTO_BOOTH_STATIC_DIR)
    #[arg(long)]
    pub static_dir: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Merge parsed CLI args over environment variables and defaults.
    pub fn from_args(args: Args) -> Result<Self> {
        let host = match args.host {
            Some(host) => host,
            None => env::var("PHOTO_BOOTH_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
        };
        let port = match args.port {
            Some(port) => port,
            None => env_or("PHOTO_BOOTH_PORT", DEFAULT_PORT)?,
        };
        let public_url = match args.public_url {
            Some(url) => url,
            None => env::var("PHOTO_BOOTH_PUBLIC_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_URL.into()),
        };
        let qr_size = match args.qr_size {
            Some(size) => size,
            None => env_or("PHOTO_BOOTH_QR_SIZE", DEFAULT_QR_SIZE)?,
        };
        let max_upload_bytes = match args.max_upload_bytes {
            Some(limit) => limit,
            None => env_or("PHOTO_BOOTH_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        };
        let static_dir = args
            .static_dir
            .or_else(|| env::var("PHOTO_BOOTH_STATIC_DIR").ok())
            .filter(|dir| !dir.is_empty());

        Ok(Self {
            host,
            port,
            public_url,
            qr_size,
            max_upload_bytes,
            static_dir,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read and parse `key`, falling back to `default` when it is unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", key, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_take_precedence() {
        let args = Args::try_parse_from([
            "photo-booth",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--public-url",
            "https://booth.example.com/",
            "--qr-size",
            "320",
            "--max-upload-bytes",
            "1024",
            "--static-dir",
            "./static",
        ])
        .unwrap();

        let cfg = AppConfig::from_args(args).unwrap();
        assert_eq!(cfg.addr(), "127.0.0.1:9090");
        assert_eq!(cfg.public_url, "https://booth.example.com/");
        assert_eq!(cfg.qr_size, 320);
        assert_eq!(cfg.max_upload_bytes, 1024);
        assert_eq!(cfg.static_dir.as_deref(), Some("./static"));
    }

    #[test]
    fn rejects_non_numeric_port_flag() {
        assert!(Args::try_parse_from(["photo-booth", "--port", "http"]).is_err());
    }

    #[test]
    fn empty_static_dir_is_ignored() {
        let args = Args {
            host: Some("::".into()),
            port: Some(1),
            public_url: Some(DEFAULT_PUBLIC_URL.into()),
            qr_size: Some(DEFAULT_QR_SIZE),
            max_upload_bytes: Some(DEFAULT_MAX_UPLOAD_BYTES),
            static_dir: Some(String::new()),
        };

        let cfg = AppConfig::from_args(args).unwrap();
        assert!(cfg.static_dir.is_none());
    }
}
