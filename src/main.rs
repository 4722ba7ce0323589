use subscription_gateway::configuration::get_config;
use subscription_gateway::startup::Application;
use subscription_gateway::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "subscription_gateway".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_config().expect("failed to read configuration");
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
