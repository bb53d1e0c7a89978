use std::path::PathBuf;
use std::process::ExitCode;

use agentmail_cli::address;
use agentmail_cli::agentmail::{AgentMail, SendRequest};
use agentmail_cli::config::Config;
use agentmail_cli::logging;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Send email via AgentMail")]
struct Args {
    /// Recipient email address(es), comma-separated
    #[arg(long)]
    to: String,
    /// Email subject
    #[arg(long)]
    subject: String,
    /// Email body (plain text)
    #[arg(long)]
    body: String,
    /// CC recipient(s), comma-separated
    #[arg(long)]
    cc: Option<String>,
    /// BCC recipient(s), comma-separated
    #[arg(long)]
    bcc: Option<String>,
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
    let request = SendRequest {
        to: address::split_list(&args.to),
        cc: address::split_optional(args.cc.as_deref()),
        bcc: address::split_optional(args.bcc.as_deref()),
        subject: args.subject.clone(),
        text: args.body,
    };

    match client.send_message(config.inbox_id(), &request).await {
        Ok(sent) => {
            println!("✅ Email sent successfully!");
            println!("   To: {}", args.to);
            println!("   Subject: {}", args.subject);
            if let Some(message_id) = sent.message_id {
                println!("   Message ID: {message_id}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("❌ Failed to send email: {err}");
            ExitCode::FAILURE
        }
    }
}
