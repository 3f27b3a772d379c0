use std::path::Path;
use std::sync::Arc;

use skylet_core::BankContext;
use skylet_storage_fs::FileKeyValueStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain_events::TracingDomainEventSink;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output stays clean on stdout
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_context(data_file: &Path) -> BankContext {
    tracing::debug!("Data file in use: {}", data_file.display());
    let storage = Arc::new(FileKeyValueStore::new(data_file));
    BankContext::new(storage, Arc::new(TracingDomainEventSink))
}
