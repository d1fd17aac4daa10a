use clap::Parser;
use spanwrap_cli::commands::Commands;

/// Wrap the words of HTML fragments in inline elements
#[derive(Debug, Parser)]
#[command(name = "spanwrap", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    if let Err(e) = cli.command.execute(cli.quiet) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
