use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use if_file_exists::{logging, CheckResult, Directory, FileChecker, FileQuery, SiteConfig, StaticSite};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

type CheckFn = fn(&FileChecker<StaticSite>, &FileQuery, &mut dyn Write) -> CheckResult;

#[derive(Parser)]
#[command(name = "if-file-exists")]
#[command(about = "Render a snippet describing a file if that file exists", long_about = None)]
struct Cli {
    /// Site layout as JSON (defaults to the current directory as site root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look in the upload directory, or in --dir relative to the site root
    File(CheckArgs),
    /// Look under the plugins directory
    Plugin(CheckArgs),
    /// Look in the active theme, then its parent theme
    Theme(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// File name to check
    name: String,

    /// Text to render when the file exists (percent-tags like %file_name% are replaced)
    #[arg(short, long, default_value = "")]
    format: String,

    /// Text to render when the file does not exist
    #[arg(long, default_value = "")]
    fallback: String,

    /// Directory to search, relative to the site (or plugins/theme) root
    #[arg(short, long, conflicts_with = "full_path")]
    dir: Option<String>,

    /// NAME already includes its directory
    #[arg(long)]
    full_path: bool,

    /// Return the result without printing it
    #[arg(long)]
    no_echo: bool,
}

impl CheckArgs {
    fn to_query(&self) -> FileQuery {
        let dir = if self.full_path {
            Directory::FullPathEmbedded
        } else {
            self.dir.clone().map(Directory::explicit).unwrap_or_default()
        };

        FileQuery::new(self.name.clone())
            .format(self.format.clone())
            .fallback(self.fallback.clone())
            .dir(dir)
            .echo(!self.no_echo)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { Level::DEBUG } else { Level::WARN });

    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load site config from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    debug!(root = %config.abspath.display(), site_url = %config.site_url, "site configured");

    let checker = FileChecker::new(StaticSite::new(config));
    let (args, check): (&CheckArgs, CheckFn) = match &cli.command {
        Commands::File(args) => (args, FileChecker::check_file),
        Commands::Plugin(args) => (args, FileChecker::check_plugin_file),
        Commands::Theme(args) => (args, FileChecker::check_theme_file),
    };

    let query = args.to_query();
    // Exit status reports existence even when a format is rendered
    let found = check(&checker, &query.clone().format(""), &mut io::sink())
        .as_bool()
        .unwrap_or(false);

    if query.format.is_some() {
        let mut stdout = io::stdout().lock();
        let rendered = check(&checker, &query, &mut stdout);
        if query.echo && rendered.as_text().is_some_and(|text| !text.is_empty()) {
            writeln!(stdout).context("Failed to write to stdout")?;
        }
    }

    Ok(if found { ExitCode::SUCCESS } else { ExitCode::from(1) })
}
