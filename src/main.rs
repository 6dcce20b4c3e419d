use anyhow::{Context, Result};
use std::io::Write;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::{debug, info};
use utilization_bar::config::{load_chart_bindings, AppConfig};
use utilization_bar::events::Event;
use utilization_bar::Dashboard;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "utilization_bar=info".into());

    // stdout carries the rendered bars, logs go to stderr
    if std::env::var("UB_LOG_FORMAT").is_ok_and(|v| v == "json") {
        tracing_subscriber::fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Utilization Bar v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Configuration loaded: charts_path={}, bar_width={}, boundary_policy={}",
        config.charts_path, config.bar_width, config.boundary_policy
    );

    let bindings = load_chart_bindings(&config.charts_path)?;

    let mut dashboard = Dashboard::new(config);

    let events = BroadcastStream::new(dashboard.event_hub.subscribe());
    let logger = tokio::spawn(async move {
        let mut events = events.filter_map(Result::ok);
        while let Some(event) = events.next().await {
            match &event {
                Event::ChartUpdated { chart, percentage_used, severity } => {
                    info!(%chart, percentage_used, ?severity, "{}", event.event_type());
                }
                Event::AnimationSettled { chart } => {
                    debug!(%chart, "{}", event.event_type());
                }
            }
        }
    });

    dashboard.add_charts(bindings);
    dashboard.settle().await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dashboard.render_to(&mut out).context("Failed to write charts to stdout")?;
    out.flush()?;
    drop(out);

    // Dropping the dashboard closes the event channel and ends the logger.
    drop(dashboard);
    logger.await.context("Event logger task failed")?;

    info!("Utilization Bar finished");
    Ok(())
}
