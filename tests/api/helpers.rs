use once_cell::sync::Lazy;
use subscription_gateway::{
    configuration::get_config,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

pub struct TestApp {
    pub address: String,
    pub gateway_url: String,
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Use of a sink allow for logs to be dumped by default when running tests.
    // If you do need them use:
    // # `TEST_LOG=1 cargo test subscribe_returns_200 | bunyan`
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

impl TestApp {
    pub async fn health(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/health", &self.address))
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn post_subscriptions(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/subscriptions", &self.address))
            .json(body)
            .send()
            .await
            .expect("failed to execute request.")
    }
}

// spawn_app launches application in the background.
pub async fn spawn_app() -> TestApp {
    // the first time initialise is called the code in tracing is invoked otherwise we skip.
    Lazy::force(&TRACING);

    let config = {
        let mut c = get_config().expect("failed to read configuration");
        c.application.port = 0;
        c
    };
    let gateway_url = config.gateway.base_url.clone();

    let application = Application::build(config)
        .await
        .expect("failed to build application");

    let address = format!("http://127.0.0.1:{}", application.port());

    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        gateway_url,
    }
}

/// A request body that passes every validation rule.
pub fn valid_subscription_body() -> serde_json::Value {
    serde_json::json!({
        "order_id": "order-1001",
        "amount": 0,
        "email": "ursula_le_guin@gmail.com",
        "customer_name": "Ursula Le Guin",
        "subscription_id": "sub_le_guin_1",
        "subscription_amount": 1299,
        "description": "Monthly newsletter plan",
        "subscription_order_id": "sub-order-1001",
        "period": { "unit": "m", "interval": 1, "moment": 28 },
        "start_date": "2026-11-01",
        "end_date": "2027-10-31",
        "status": 1,
        "comment": "first year"
    })
}
