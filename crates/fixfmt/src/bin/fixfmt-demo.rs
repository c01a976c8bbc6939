use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fixfmt::{FixedDecimal, FixedDecimalFormat, FormatConfig, Sink, logging};

#[derive(Debug, Parser)]
#[command(
    name = "fixfmt-demo",
    about = "Format decimals for a locale through the fixfmt C ABI",
    version
)]
struct Cli {
    /// TOML or JSON config file.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override the configured locale.
    #[arg(long, short)]
    locale: Option<String>,

    /// Override the configured data bundle.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Decimals to format, e.g. `1000007` or `-12.50`.
    #[arg(required = true)]
    values: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => match FormatConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                return ExitCode::from(2);
            }
        },
        None => FormatConfig::default(),
    };
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    logging::init(&config.log_filter);

    match run(&config, &cli.values) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "formatting failed");
            eprintln!("{err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

fn run(config: &FormatConfig, values: &[String]) -> fixfmt::Result<()> {
    let locale = config.open_locale()?;
    let provider = config.open_provider()?;
    let fdf = FixedDecimalFormat::new(&locale, &provider, config.to_options())?;
    tracing::debug!(locale = %config.locale, "formatter ready");

    let mut buf = vec![0u8; config.sink_capacity];
    let mut sink = Sink::new(&mut buf);
    for text in values {
        let value = FixedDecimal::parse(text)?;
        fdf.format(&value, &mut sink)?;
        println!("{}", String::from_utf8_lossy(sink.as_bytes()));
    }
    Ok(())
}
