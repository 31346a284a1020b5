use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset. Dependencies only report warnings.
const DEFAULT_DIRECTIVE: &str = "warn,mortgage_check=info";
/// Same as the default, plus per-request accept/reject decisions.
const VERBOSE_DIRECTIVE: &str = "warn,mortgage_check=debug";

/// Installs the subscriber for the `mortgage-check` binary.
///
/// Events are written to stderr since stdout carries the evaluated CSV or
/// the rate listing. `RUST_LOG` takes precedence over `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let directive = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
