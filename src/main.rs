use anyhow::Context;
use mailform::{configuration::get_configuration, startup::Application, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber("mailform".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;
    let application = Application::build(configuration)
        .await
        .context("Failed to build application")?;
    tracing::info!(
        "Contact form backend running on http://127.0.0.1:{}",
        application.port()
    );
    application.run_until_stopped().await?;

    Ok(())
}
