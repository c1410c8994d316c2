use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global console subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise `LOG_LEVEL` (default `info`)
/// applies to this crate and its workspace crates, with noisy dependencies
/// held at `warn`. `LOG_FORMAT=json` switches to JSON lines.
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{name}={lvl},todoapp_auth={lvl},todoapp_db={lvl},tower_http={lvl},axum::rejection=trace,hyper=warn,sqlx=warn",
            name = env!("CARGO_CRATE_NAME"),
            lvl = log_level
        ))
    });

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let console_layer = if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(console_layer).init();
}
