pub(crate) mod collect;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod fetch;
pub(crate) mod hn_api;

const BUG_REPORT_URL: &str = "https://github.com/hn-cli/hn/issues";

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "hn", version, about = "Show the current Hacker News top stories", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(short = 'n', long, global = true, default_value = "10")]
    #[arg(help = "The number of top stories to show")]
    count: usize,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// Show the top stories
    Top,
}

async fn show_top_stories(count: usize) -> anyhow::Result<()> {
    let client = crate::hn_api::HnClient::new(&crate::config::config().api_base_url)?;

    let ids = client.get_top_stories().await?;
    tracing::info!(num_ids = ids.len(), "Fetched the top story list");

    let stories = crate::collect::collect_top(&client, &ids, count).await?;

    use std::io::Write;
    let mut stdout = std::io::stdout().lock();
    for (i, story) in stories.iter().enumerate() {
        writeln!(stdout, "{}. {}", i + 1, story.title)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    use clap::Parser;
    let args = Args::parse();

    // Stdout carries the story lines, so all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(args =? args, "Starting hn");

    let result = match args.command {
        None | Some(Command::Top) => show_top_stories(args.count).await,
    };

    if let Err(e) = result {
        eprintln!("Something went wrong. Please report the following error to {BUG_REPORT_URL}\n");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
