use {
    anyhow::Result,
    clap::{Args, Parser, Subcommand},
    log::{error, LevelFilter},
};

#[derive(Parser)]
#[command(
    name = "publish-release",
    about = "Create and publish GitHub draft releases",
    version
)]
struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Reuse or create the draft release and publish it for the current version")]
    Publish(publish_release::commands::publish_release::CommandArgs),
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    match cli.command {
        Commands::Publish(args) => {
            publish_release::commands::publish_release::run(args).await?;
        }
    }

    Ok(())
}
