use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provide one.
///
/// GPU backends are chatty at `info`; keep them at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax
/// (e.g. `"debug"`, `"primitives_studio=debug,wgpu=warn"`).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

/// Picks the effective filter: explicit config, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Blank strings count as unset.
pub fn resolve_filter(configured: Option<&str>, env: Option<&str>) -> String {
    configured
        .filter(|f| !f.trim().is_empty())
        .or(env.filter(|f| !f.trim().is_empty()))
        .unwrap_or(DEFAULT_FILTER)
        .to_owned()
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.env_filter.as_deref(), env.as_deref());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .init();

        log::debug!("logging initialized (filter: {filter})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_wins_over_env() {
        assert_eq!(resolve_filter(Some("debug"), Some("warn")), "debug");
    }

    #[test]
    fn env_used_when_config_missing() {
        assert_eq!(resolve_filter(None, Some("warn")), "warn");
        assert_eq!(resolve_filter(Some("  "), Some("warn")), "warn");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some("")), DEFAULT_FILTER);
    }

    #[test]
    fn with_filter_sets_only_the_filter() {
        let cfg = LoggingConfig::with_filter("trace");
        assert_eq!(cfg.env_filter.as_deref(), Some("trace"));
        assert_eq!(cfg.write_style, env_logger::WriteStyle::Auto);
    }
}
