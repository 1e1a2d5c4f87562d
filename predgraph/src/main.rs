use anyhow::Context;
use clap::{CommandFactory, Parser};
use predgraph_core::RunConfig;
use predgraph_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "predgraph",
    version,
    about = "Chart predicted gender and age probabilities from an events.json log"
)]
struct Cli {
    /// Full name of the events.json file to read
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Directory to write gender.html and age.html into
    #[arg(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,

    /// Log output format (defaults to pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    /// `None` when no source file was given, empty included.
    fn run_config(&self) -> Option<RunConfig> {
        let file = self.file.as_deref().filter(|f| !f.is_empty())?;
        Some(RunConfig::new(file).with_out_dir(&self.out_dir))
    }
}

fn main() {
    let cli = Cli::parse();

    let Some(cfg) = cli.run_config() else {
        eprintln!("{}", Cli::command().render_help());
        return;
    };

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(&cfg) {
        eprintln!("predgraph error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cfg: &RunConfig) -> anyhow::Result<()> {
    predgraph_core::run(cfg)
        .with_context(|| format!("failed to chart predictions from {}", cfg.source.display()))?;
    tracing::info!("done");
    Ok(())
}
