use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies to this crate and
/// actix. `LOG_JSON=true` switches to one JSON object per line.
pub fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(&config.log_level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.log_json {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().with_target(true).compact())
            .init();
    }
}

fn default_directives(level: &str) -> String {
    format!("chapa_checkout={level},actix_web={level},reqwest=warn")
}
