// CLI interface
pub mod commands;

use crate::error::Result;
use crate::format::Grouping;
use crate::models::ClockTime;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pia-alerts")]
#[command(about = "Campaign countdowns and expiration alerts for Pass It Along", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Thousands grouping for counts and amounts (western, indian)
    #[arg(long, global = true, env = "PIA_GROUPING")]
    pub grouping: Option<Grouping>,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the duration between a start and an end date/time
    Countdown {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Start time of day (HH:MM)
        #[arg(long, default_value = "00:00")]
        start_time: ClockTime,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// End time of day (HH:MM)
        #[arg(long, default_value = "00:00")]
        end_time: ClockTime,

        /// Output in JSON format for scripting
        #[arg(long)]
        json: bool,
    },

    /// Render a template with live values
    Preview {
        /// Template text containing placeholders such as {hours}
        template: String,

        /// Campaign record (JSON) to take values from
        #[arg(long)]
        campaign: Option<PathBuf>,

        /// Hours until expiry (overrides the campaign schedule)
        #[arg(long)]
        hours: Option<i64>,

        /// Pre-formatted raised amount (overrides the campaign total)
        #[arg(long)]
        raised: Option<String>,

        /// Number of invitees
        #[arg(long)]
        invitees: Option<u64>,

        /// Number of donors
        #[arg(long)]
        donors: Option<u64>,
    },

    /// Build the alert payload for a campaign
    Alert {
        /// Campaign record (JSON)
        #[arg(long)]
        campaign: PathBuf,

        /// Short alert text (default boilerplate if omitted)
        #[arg(long)]
        alert_text: Option<String>,

        /// Alert message body (default boilerplate if omitted)
        #[arg(long)]
        body_text: Option<String>,

        /// Store the alert without sending it
        #[arg(long)]
        no_send: bool,
    },

    /// Show time remaining until a campaign ends
    Status {
        /// Campaign record (JSON)
        #[arg(long)]
        campaign: PathBuf,

        /// Output in JSON format for scripting
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Create a sample config file
    Init,
    /// Show the config file location and status
    Path,
}

#[derive(Debug, Clone, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

pub fn execute(args: Cli) -> Result<()> {
    let grouping = args.grouping;

    match args.command {
        Commands::Countdown {
            start_date,
            start_time,
            end_date,
            end_time,
            json,
        } => commands::countdown::execute(start_date, start_time, end_date, end_time, json),
        Commands::Preview {
            template,
            campaign,
            hours,
            raised,
            invitees,
            donors,
        } => commands::preview::execute(
            template,
            commands::preview::Overrides {
                campaign,
                hours,
                raised,
                invitees,
                donors,
                grouping,
            },
        ),
        Commands::Alert {
            campaign,
            alert_text,
            body_text,
            no_send,
        } => commands::alert::execute(campaign, alert_text, body_text, no_send, grouping),
        Commands::Status { campaign, json } => commands::status::execute(campaign, json),
        Commands::Config { command } => commands::config::execute(command),
        Commands::Completions { shell } => {
            commands::completions::execute(shell);
            Ok(())
        }
    }
}
