use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// JSON logs on stderr; stdout carries command output.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("kubecheck=info,kubecheck_core=info,kubecheck_checks=info")
        }))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();
}
