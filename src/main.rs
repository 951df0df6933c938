use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use hearken::application::services::{EmbeddingService, FormatBridge};
use hearken::infrastructure::audio::{FfmpegTranscoder, WavDecoder};
use hearken::infrastructure::auth::TokenProviderFactory;
use hearken::infrastructure::inference::VertexInferenceClient;
use hearken::infrastructure::observability::{TracingConfig, init_tracing};
use hearken::infrastructure::sink::ResultSinkFactory;
use hearken::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(TracingConfig::default(), &settings.logging.level);
    tracing::info!(%environment, "Configuration loaded");

    let transcoder = Arc::new(FfmpegTranscoder::new(
        &settings.audio.ffmpeg_path,
        settings.audio.transcode_sample_rate,
    ));
    match transcoder.check_binary().await {
        Ok(version) => tracing::info!(version = %version, "ffmpeg available"),
        Err(e) => tracing::warn!(error = %e, "ffmpeg unavailable, only WAV uploads will succeed"),
    }

    let format_bridge = FormatBridge::new(
        transcoder,
        settings.audio.scratch_dir.as_ref().map(PathBuf::from),
    );

    let token_provider = TokenProviderFactory::create(&settings.credentials)?;

    let inference_client = Arc::new(VertexInferenceClient::new(
        settings.inference.endpoint_url.clone(),
        Arc::clone(&token_provider),
        settings.inference.timeout_secs.map(Duration::from_secs),
    )?);

    let result_sink = ResultSinkFactory::create(&settings.sink, Arc::clone(&token_provider))?;
    if result_sink.is_none() {
        tracing::info!("Result sink disabled");
    }

    let embedding_service = Arc::new(EmbeddingService::new(
        format_bridge,
        Arc::new(WavDecoder),
        inference_client,
        result_sink,
        settings.inference.required_samples,
    )
    .with_sink_timeout(Duration::from_secs(settings.sink.timeout_secs)));

    let router = create_router(
        AppState::new(embedding_service),
        settings.server.max_body_bytes,
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
