//! Stackblog CLI
//!
//! Terminal browser for the blog:
//! - List posts
//! - Read a single post
//! - Browse interactively (select, back)
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stackblog::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use stackblog::render::{screen, text};
use stackblog::{BlogSession, StackFactory, ViewState};

#[derive(Parser)]
#[command(name = "stackblog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read a Contentstack-backed blog from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the post grid
    List,

    /// Show one post
    Read {
        /// Post uid
        uid: String,
    },

    /// Browse interactively: a number opens a post, `b` goes back, `q` quits
    Browse,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load_default(),
    };
    init_logging(&loaded.config.logging);

    tracing::info!("Stackblog v{}", env!("CARGO_PKG_VERSION"));
    loaded.log();
    let config = loaded.config;

    let mut session = BlogSession::new(
        config.contentstack.factory(),
        config.contentstack.credentials(),
    )
    .with_category(config.contentstack.content_type.clone());
    session.start().await;

    match cli.command {
        Commands::List => show(&config, session.state()),
        Commands::Read { uid } => {
            if matches!(session.state(), ViewState::List(_)) {
                if session.select(&uid).selected_post().is_none() {
                    anyhow::bail!("no post with uid {}", uid);
                }
            }
            show(&config, session.state());
        }
        Commands::Browse => browse(&config, &mut session)?,
        // Written out before any config was loaded
        Commands::Config { .. } => {}
    }

    if session.state().is_terminal() {
        std::process::exit(1);
    }

    Ok(())
}

/// Interactive loop over stdin
fn browse(config: &Config, session: &mut BlogSession<StackFactory>) -> anyhow::Result<()> {
    show(config, session.state());
    if session.state().is_terminal() {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "q" | "quit" => break,
            "b" | "back" => {
                session.back();
            }
            "" => continue,
            input => match input.parse::<usize>() {
                Ok(position) => {
                    session.select_position(position);
                }
                Err(_) => {
                    writeln!(stdout, "Enter a post number, b (back) or q (quit)")?;
                    continue;
                }
            },
        }

        show(config, session.state());
    }

    Ok(())
}

fn show(config: &Config, state: &ViewState) {
    print!("{}", text::render_page(&config.site, &screen(state)));
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Logs go to stderr so rendered pages stay clean on stdout
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("stackblog={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init(),
    }
}
