//! RCA Dashboard - 主入口
//!
//! 负责：
//! - 加载配置并初始化日志系统
//! - 构造解析流程
//! - 分发子命令并渲染输出

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use rca_dashboard::models::AppConfig;
use rca_dashboard::monitoring::init_logging;
use rca_dashboard::presentation::{render_log_list, render_resolution};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "rca-dashboard")]
#[command(about = "Automated RCA Dashboard (Demo)", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the exception logs available for analysis
    List,

    /// Analyze one log: details, code snippet and root cause
    Show {
        /// Log index from `list`
        #[arg(default_value = "0")]
        index: usize,

        /// Expand the full stack trace
        #[arg(long)]
        stack_trace: bool,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging);

    info!("RCA Dashboard v{} - starting", env!("CARGO_PKG_VERSION"));

    let command = cli.command.unwrap_or(Commands::Show {
        index: 0,
        stack_trace: false,
        json: false,
    });

    match command {
        Commands::List => {
            let pipeline = rca_dashboard::build_pipeline(&config)?;
            let options = pipeline.list_logs(&config.display.time_format);
            print!("{}", render_log_list(&options));
        }
        Commands::Show {
            index,
            stack_trace,
            json,
        } => {
            let pipeline = rca_dashboard::build_pipeline(&config)?;
            let result = pipeline.resolve(index)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
            } else {
                let expand = stack_trace || config.display.show_stack_trace;
                print!("{}", render_resolution(&result, &config.display, expand)?);
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
