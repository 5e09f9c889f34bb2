//! Per-scenario setup.
//!
//! Every scenario gets a fresh transport and a freshly resolved base URL;
//! nothing is shared across tests. By default the scenario targets its own
//! in-process [`StubLeadsService`]; when the `LEADS_API_*` environment
//! variables resolve to a complete configuration, the same scenarios run
//! against that deployment instead.

use std::sync::Once;

use url::Url;

use leadprobe_application::{ConfigSource, InMemoryConfigSource, LeadsApi, resolve_base_url};
use leadprobe_domain::settings;
use leadprobe_infrastructure::{EnvConfigSource, ReqwestHttpClient};

use crate::stub::StubLeadsService;

/// Everything a scenario needs, built fresh per test.
pub struct Scenario {
    /// Stub service backing this scenario; `None` when targeting a live
    /// deployment through the environment settings.
    pub service: Option<StubLeadsService>,
    /// Typed client bound to the scenario's base URL.
    pub api: LeadsApi<ReqwestHttpClient>,
}

/// Builds a scenario: resolve configuration, bind a fresh client.
///
/// Configuration always goes through the four named settings (`protocol`,
/// `host`, `portIIS`, `basePath`), so the resolver is exercised on every
/// path.
///
/// The in-process stub is used only when none of the `LEADS_API_*`
/// settings is present; a partially configured live target is a fatal
/// configuration error, not a reason to fall back.
///
/// # Panics
///
/// Panics if the stub cannot start, the settings do not resolve, or the
/// transport cannot be built; a scenario without a working setup has
/// nothing meaningful to assert.
pub async fn scenario() -> Scenario {
    init_tracing();

    if let Some(base_url) = live_target(&EnvConfigSource::new()) {
        tracing::info!(%base_url, "scenario targets configured deployment");
        let api = LeadsApi::new(transport(), base_url);
        return Scenario { service: None, api };
    }

    let service = StubLeadsService::start().await;
    tracing::info!(address = %service.address(), "scenario targets in-process stub");
    let addr = service.address();
    let source = InMemoryConfigSource::new()
        .with("protocol", "http")
        .with("host", addr.ip().to_string())
        .with("portIIS", addr.port().to_string())
        .with("basePath", "/");
    let base_url = resolve_base_url(&source).expect("stub settings resolve");
    let api = LeadsApi::new(transport(), base_url);
    Scenario {
        service: Some(service),
        api,
    }
}

/// Returns the live base URL when the source configures a deployment.
///
/// `None` means no setting is present at all and the scenario should run
/// against the stub. Once any setting is present the deployment is taken
/// as intended, so an incomplete or invalid set of settings panics with
/// the resolver's error naming the offending setting.
fn live_target(source: &dyn ConfigSource) -> Option<Url> {
    let any_present = [
        settings::PROTOCOL,
        settings::HOST,
        settings::PORT_IIS,
        settings::BASE_PATH,
    ]
    .iter()
    .any(|name| source.get(name).is_some());
    if !any_present {
        return None;
    }
    match resolve_base_url(source) {
        Ok(base_url) => Some(base_url),
        Err(err) => panic!("deployment settings do not resolve: {err}"),
    }
}

fn transport() -> ReqwestHttpClient {
    ReqwestHttpClient::new().expect("transport builds")
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
