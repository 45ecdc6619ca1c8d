//! primitives-studio: opens one rasterization exercise in a window.

mod scenes;

use clap::{Parser, ValueEnum};

use primitives_engine::device::GpuInit;
use primitives_engine::logging::{init_logging, LoggingConfig};
use primitives_engine::window::{Runtime, RuntimeConfig};

use scenes::Exercise;

#[derive(Parser, Debug)]
#[command(name = "primitives-studio", version, about = "Rasterization and rendering exercises")]
struct Cli {
    /// Exercise to open
    #[arg(value_enum, default_value_t = Exercise::Perspective)]
    exercise: Exercise,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Log filter, `RUST_LOG` syntax (overrides the environment)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// List the exercises and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn logging(&self) -> LoggingConfig {
        match &self.log {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }

    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::default()
            .title(format!("primitives · {}", self.exercise.title()))
            .size(self.width as f64, self.height as f64)
    }
}

fn print_exercises() {
    for ex in Exercise::value_variants() {
        println!("  {:<16} {}", ex.cli_name(), ex.description());
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        print_exercises();
        return;
    }

    init_logging(cli.logging());
    log::info!("opening {} ({}x{})", cli.exercise.cli_name(), cli.width, cli.height);

    let app = scenes::build(cli.exercise);
    if let Err(err) = Runtime::run(cli.runtime_config(), GpuInit::default(), app) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["primitives-studio"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => panic!("{args:?}: {err}"),
        }
    }

    #[test]
    fn defaults_open_perspective_at_800x600() {
        let cli = parse(&[]);
        assert_eq!(cli.exercise, Exercise::Perspective);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert!(cli.log.is_none());
        assert!(!cli.list);
    }

    #[test]
    fn exercise_and_size() {
        let cli = parse(&["flower-static", "--width", "1024", "--height", "768"]);
        assert_eq!(cli.exercise, Exercise::FlowerStatic);
        assert_eq!((cli.width, cli.height), (1024, 768));

        let config = cli.runtime_config();
        assert_eq!(config.initial_size.width, 1024.0);
        assert_eq!(config.initial_size.height, 768.0);
        assert!(config.title.contains("Flower"));
        assert!(config.exit_on_escape);
    }

    #[test]
    fn log_filter_overrides_environment() {
        let cli = parse(&["circle", "--log", "debug"]);
        assert_eq!(cli.logging().env_filter.as_deref(), Some("debug"));
        assert_eq!(parse(&["circle"]).logging().env_filter, None);
    }

    #[test]
    fn unknown_exercise_is_rejected() {
        assert!(Cli::try_parse_from(["primitives-studio", "teapot"]).is_err());
        assert!(Cli::try_parse_from(["primitives-studio", "--width", "wide"]).is_err());
    }

    #[test]
    fn list_flag() {
        assert!(parse(&["--list"]).list);
    }
}
