use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. `--verbose` turns on the
/// per-document skip and removal traces emitted by the remover.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "manifest_prune=debug,warn"
    } else {
        "manifest_prune=info,warn"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // stdout 留給輸出的 manifest，重新導向到檔案時不輸出顏色碼
    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
