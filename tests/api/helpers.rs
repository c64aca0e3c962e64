use lead_capture::{
    configuration::{get_configuration, Settings},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use wiremock::MockServer;

pub const REDIRECT_URL: &str = "https://landing.example.com/course/enroll";

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name, default_filter_level, std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub upstream_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Bodies the proxy sent upstream, in arrival order.
    pub async fn upstream_bodies(&self) -> Vec<serde_json::Value> {
        self.upstream_server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("Upstream body is not JSON"))
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Same as `spawn_app`, with `redirectUrl` merged into successful replies.
pub async fn spawn_app_with_redirect_decoration() -> TestApp {
    spawn_app_with(|c| c.landing.decorate_success_redirect = true).await
}

/// Points the proxy at a local port nobody listens on.
pub async fn spawn_app_with_unreachable_upstream() -> TestApp {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to random port")
        .local_addr()
        .unwrap()
        .port();
    spawn_app_with(|c| c.upstream.base_url = format!("http://127.0.0.1:{}", port)).await
}

async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    // The first time `initalize` is invoked the code in TRACING is executed
    // All other invocations will instead skip execution
    Lazy::force(&TRACING);

    let upstream_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        // use a random OS port
        c.application.port = 0;
        c.upstream.base_url = upstream_server.uri();
        c.landing.redirect_url = REDIRECT_URL.to_string();
        c.landing.decorate_success_redirect = false;
        customize(&mut c);
        c
    };

    // Launch the app
    let application = Application::build(configuration)
        .await
        .expect("Failed to create app");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        upstream_server,
    }
}
