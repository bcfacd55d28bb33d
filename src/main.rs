use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;

use mulberry::domain::AudioFormat;
use mulberry::infrastructure::SpeechBackendFactory;
use mulberry::infrastructure::observability::init_tracing;
use mulberry::presentation::{
    AppState, Environment, GatewayOptions, ScaffoldConfig, Settings, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&settings.logging.level, settings.logging.enable_json);

    let scaffold = ScaffoldConfig::default();
    let client_config = settings.google.client_config(settings.outbound.policy());
    let backends = SpeechBackendFactory::create(scaffold.provider(), &client_config)
        .context("Failed to build speech backends")?;

    let options = GatewayOptions {
        locales: settings.transcription.locale_pair(),
        audio_format: AudioFormat {
            encoding: settings
                .transcription
                .audio_encoding()
                .map_err(anyhow::Error::msg)?,
            sample_rate_hertz: settings.transcription.sample_rate_hertz,
        },
        strict_languages: settings.languages.strict,
    };

    let state = AppState::new(
        backends.recognizer,
        backends.translator,
        backends.synthesizer,
        options,
    );

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    tracing::info!(
        %addr,
        environment = %environment,
        scaffold = scaffold.enabled,
        strict_languages = settings.languages.strict,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
