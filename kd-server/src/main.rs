mod backup;
mod config;
mod crd;
mod errors;
mod params;
mod restore;
mod schedule;
mod storage_location;
mod util;

use std::time::Duration;

use clap::Parser;
use kd_core::errors::*;
use kd_core::k8s::{
    CrdResolver,
    DynamicRestAdapter,
};
use kd_core::logging::{
    self,
    LogFormat,
};
use kd_core::prelude::*;
use rocket::config::TlsConfig;
use tracing::*;

use crate::config::ServerConfig;

#[derive(Clone, Debug, Parser)]
struct Options {
    #[arg(short, long)]
    config_file: Option<String>,

    // overrides the port in the config file
    #[arg(long)]
    server_port: Option<u16>,

    #[arg(short, long, default_value = DEFAULT_LOG_FILTER)]
    verbosity: String,

    #[arg(long, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[arg(long, requires = "key_path")]
    cert_path: Option<String>,

    #[arg(long, requires = "cert_path")]
    key_path: Option<String>,
}

/// Per-process state shared by every request handler.  Handlers build a fresh resolver and
/// adapter per request; no schema is cached between requests.
#[derive(Clone)]
pub struct AppContext {
    client: kube::Client,
    config: ServerConfig,
}

impl AppContext {
    pub fn new(client: kube::Client, config: ServerConfig) -> AppContext {
        AppContext { client, config }
    }

    pub fn resolver(&self) -> CrdResolver {
        CrdResolver::new(self.client.clone())
    }

    pub fn adapter(&self) -> DynamicRestAdapter {
        DynamicRestAdapter::new(self.client.clone())
    }
}

#[rocket::get("/healthz")]
fn healthz() -> &'static str {
    "ok"
}

fn routes() -> Vec<rocket::Route> {
    rocket::routes![
        healthz,
        backup::list_all,
        backup::list,
        backup::detail,
        backup::create,
        backup::delete,
        restore::list_all,
        restore::list,
        restore::detail,
        restore::create,
        restore::delete,
        schedule::list_all,
        schedule::list,
        schedule::detail,
        schedule::create,
        schedule::delete,
        storage_location::list,
        crd::list_all,
        crd::list,
        crd::detail,
    ]
}

fn load_config(opts: &Options) -> anyhow::Result<ServerConfig> {
    let mut config = match &opts.config_file {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = opts.server_port {
        config.port = port;
    }
    Ok(config)
}

#[instrument(ret, err)]
async fn run(opts: Options) -> EmptyResult {
    let config = load_config(&opts)?;

    let mut kube_config = kube::Config::infer().await?;
    kube_config.connect_timeout = Some(Duration::from_secs(config.request_timeout_seconds));
    kube_config.read_timeout = Some(Duration::from_secs(config.request_timeout_seconds));
    let client = kube::Client::try_from(kube_config)?;

    let tls = match (&opts.cert_path, &opts.key_path) {
        (Some(cert_path), Some(key_path)) => Some(TlsConfig::from_paths(cert_path, key_path)),
        _ => None,
    };

    let rkt_config = rocket::Config {
        address: config.bind_address,
        port: config.port,
        tls,
        ..Default::default()
    };
    info!("serving on {}:{}", config.bind_address, config.port);

    let server = rocket::custom(&rkt_config)
        .mount("/", routes())
        .manage(AppContext::new(client, config));
    server.launch().await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();
    logging::setup(&opts.verbosity, opts.log_format);
    if let Err(err) = run(opts).await {
        skerr!(err, "kdash server failed");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
