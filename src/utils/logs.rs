pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // keep ANSI color codes out of log collectors that store raw lines.
        .with_ansi(false)
        // the log collector stamps ingestion time.
        .without_time()
        .json()
        .init();
}
