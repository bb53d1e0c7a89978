use std::path::PathBuf;
use std::process::ExitCode;

use agentmail_cli::agentmail::AgentMail;
use agentmail_cli::config::Config;
use agentmail_cli::format;
use agentmail_cli::logging;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Check AgentMail inbox")]
struct Args {
    /// Show only unread messages
    #[arg(long)]
    unread: bool,
    /// Get a specific message by ID
    #[arg(long)]
    message_id: Option<String>,
    /// Max messages to show
    #[arg(long, default_value_t = 10)]
    limit: u32,
    /// Credentials file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let config = match Config::load_from_file(args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let client = AgentMail::new(config.api_key());
    let report = if let Some(message_id) = &args.message_id {
        client
            .get_message(config.inbox_id(), message_id)
            .await
            .map(|message| format::format_message(&message))
    } else {
        client
            .list_messages(config.inbox_id(), args.limit)
            .await
            .map(|page| format::render_listing(&page.data, args.unread))
    };

    match report {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("❌ Error: {err}");
            ExitCode::FAILURE
        }
    }
}
