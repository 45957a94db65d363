use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use medialoan_core::{SchedulerConfig, TierCapFallback};

mod debug;
mod schedule;

/// Medialoan CLI - runs and inspects weekly press-fleet loan schedules
#[derive(Parser)]
#[command(name = "medialoan")]
#[command(about = "Weekly media-loan scheduling tool", long_about = None)]
struct Cli {
    /// Path to the scheduler database
    #[arg(short, long, default_value = "medialoan.db")]
    database: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the schedule for one office and week
    Schedule {
        /// Office to schedule (e.g. "Los Angeles")
        #[arg(short, long)]
        office: String,
        /// Monday of the target week (YYYY-MM-DD)
        #[arg(short, long)]
        week_start: String,
        #[command(flatten)]
        options: ScheduleOptions,
        /// Emit the schedule as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Dump intermediate pipeline stages
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Args)]
struct ScheduleOptions {
    /// Minimum weekly availability for a VIN to enter candidates
    #[arg(long, default_value_t = 5)]
    min_available_days: u32,
    /// Length of each loan window in days
    #[arg(long, default_value_t = 7)]
    loan_length_days: u32,
    /// Per-partner weekly assignment cap
    #[arg(long, default_value_t = 1)]
    max_per_partner_per_week: u32,
    /// Fallback cooldown days when no rule supplies one
    #[arg(long, default_value_t = 60)]
    default_cooldown_days: u32,
    /// Annual cap for Pending/unranked partners
    #[arg(long, default_value_t = 0)]
    unranked_cap: u32,
    /// Admit partners lacking an eligibility row at default rank C
    #[arg(long)]
    admit_without_eligibility: bool,
    /// Skip the tier-cap admission check
    #[arg(long)]
    no_tier_caps: bool,
    /// Skip the cooldown admission check
    #[arg(long)]
    no_cooldown: bool,
    /// Skip the capacity admission check
    #[arg(long)]
    no_capacity: bool,
}

impl ScheduleOptions {
    fn to_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            min_available_days: self.min_available_days,
            loan_length_days: self.loan_length_days,
            max_per_partner_per_week: self.max_per_partner_per_week,
            default_cooldown_days: self.default_cooldown_days,
            tier_cap_fallback: TierCapFallback {
                unranked: self.unranked_cap,
                ..TierCapFallback::default()
            },
            enable_tier_caps: !self.no_tier_caps,
            enable_cooldown: !self.no_cooldown,
            enable_capacity: !self.no_capacity,
            admit_without_eligibility: self.admit_without_eligibility,
        }
    }
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Availability grid for one office and week
    Availability {
        #[arg(short, long)]
        office: String,
        #[arg(short, long)]
        week_start: String,
    },
    /// Cooldown flags as of a week start
    Cooldown {
        #[arg(short, long)]
        week_start: String,
    },
    /// Rolling publication stats as of a date
    Publication {
        #[arg(short, long)]
        as_of: String,
    },
    /// Stage-1 candidates for one office and week
    Candidates {
        #[arg(short, long)]
        office: String,
        #[arg(short, long)]
        week_start: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            office,
            week_start,
            options,
            json,
        } => {
            schedule::run(
                &cli.database,
                &office,
                &week_start,
                &options.to_config(),
                json,
            )
            .await?;
        }
        Commands::Debug { command } => match command {
            DebugCommands::Availability { office, week_start } => {
                debug::availability(&cli.database, &office, &week_start).await?;
            }
            DebugCommands::Cooldown { week_start } => {
                debug::cooldown(&cli.database, &week_start).await?;
            }
            DebugCommands::Publication { as_of } => {
                debug::publication(&cli.database, &as_of).await?;
            }
            DebugCommands::Candidates { office, week_start } => {
                debug::candidates(&cli.database, &office, &week_start).await?;
            }
        },
    }

    Ok(())
}
