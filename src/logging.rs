use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the `env_logger` backend once.
///
/// Logs go to stderr so they never interleave with command output on stdout.
/// The default level is `warn`; `RUST_LOG` overrides it.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp_secs()
            .format_module_path(false)
            .target(env_logger::Target::Stderr)
            .init();
    });
}
