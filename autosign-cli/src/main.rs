//! CLI entry point for autosign

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing::info;

use autosign_core::config::{LoggingConfig, NotifyConfig, WinmoesConfig, Y3ltConfig};
use autosign_core::logging::init_logging;
use autosign_core::Error;
use autosign_notify::{NoopNotifier, Notifier, PushServiceClient};
use autosign_runner::{WinmoesRunner, Y3ltRunner, REPORT_TITLE};

#[derive(Parser)]
#[command(name = "autosign")]
#[command(about = "Daily check-in automation for rewards sites")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the multi-account winmoes.com check-in
    Winmoes,
    /// Run the single-account 3ylt.xyz check-in
    Y3lt,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _guard = init_logging(&LoggingConfig::from_env());

    // Check-in failures are reported, not signalled: the exit code stays 0
    // on every path so an external scheduler never retries a daily action.
    match cli.command {
        Commands::Winmoes => run_winmoes().await,
        Commands::Y3lt => run_y3lt().await,
    }

    Ok(())
}

async fn run_winmoes() {
    let config = match WinmoesConfig::from_env() {
        Ok(config) => config,
        Err(Error::ConfigMissing(_)) => {
            println!("未检测到环境变量 WINMOES_ACCOUNT 或 WINMOES_PASSWORD");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let notifier = build_notifier(&NotifyConfig::from_env());
    info!("winmoes flow starting with {} account(s)", config.accounts.len());

    let report = WinmoesRunner::new().run(&config, notifier.as_ref()).await;

    println!("{}", style(REPORT_TITLE).bold());
    println!("{}", report.render());
}

async fn run_y3lt() {
    let config = match Y3ltConfig::from_env() {
        Ok(config) => config,
        Err(Error::ConfigMissing(_)) => {
            println!("未检测到环境变量 Y3LT_SIGNIN_USERNAME 或 Y3LT_SIGNIN_PASSWORD");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    match Y3ltRunner::new().run(&config).await {
        Some(result) => println!("{} {result}", style("签到成功:").bold()),
        None => println!("{}", style("签到未完成，详情见日志").dim()),
    }
}

fn build_notifier(config: &NotifyConfig) -> Box<dyn Notifier> {
    match &config.push_url {
        Some(url) => Box::new(PushServiceClient::new(url.clone())),
        None => Box::new(NoopNotifier),
    }
}
