mod crd_test;
mod errors_test;

use assertables::*;
use httpmock::prelude::*;
use kd_testutils::*;
use rstest::*;
use serde_json::{
    Value,
    json,
};
use tracing_test::traced_test;

use super::*;
use crate::config::CrdNames;
use crate::errors::ApiError;
use crate::params::ListParams;

fn test_ctx(client: kube::Client) -> AppContext {
    AppContext::new(client, ServerConfig::default())
}

fn params(filter_by: Option<&str>, sort_by: Option<&str>, items_per_page: Option<i64>, page: Option<i64>) -> ListParams {
    ListParams {
        filter_by: filter_by.map(String::from),
        sort_by: sort_by.map(String::from),
        items_per_page,
        page,
    }
}

#[rstest]
fn test_healthz() {
    assert_eq!(healthz(), "ok");
}

#[rstest]
fn test_load_config_port_override() {
    let opts = Options::parse_from(["kd-server", "--server-port", "8443"]);
    let config = load_config(&opts).unwrap();
    assert_eq!(config.port, 8443);
    assert_eq!(config.default_items_per_page, DEFAULT_ITEMS_PER_PAGE);
}

#[rstest]
fn test_options_need_both_tls_paths() {
    assert_err!(Options::try_parse_from(["kd-server", "--cert-path", "/tls/cert.pem"]));

    let opts = Options::try_parse_from(["kd-server", "--cert-path", "/c", "--key-path", "/k", "--log-format", "json"]).unwrap();
    assert_eq!(opts.log_format, LogFormat::Json);
    assert_eq!(opts.verbosity, DEFAULT_LOG_FILTER);
}

#[rstest]
fn test_routes_mounted() {
    let paths: Vec<String> = routes().iter().map(|r| r.uri.to_string()).collect();
    assert!(paths.contains(&"/healthz".to_string()));
    assert_len_eq_x!(paths, 20);
}
