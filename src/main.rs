use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use fintrack::audit::AuditLogger;
use fintrack::cli::{
    handle_audit_command, handle_investment_command, handle_report_command, handle_tax_command,
    handle_transaction_command, InvestmentCommands, ReportCommands, TransactionCommands,
};
use fintrack::config::{Backend, FintrackPaths, Settings};
use fintrack::storage::{open_store, Storage};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "fintrack records income, expenses and investments, summarizes them \
                  by period and category, projects the balance forward from recurring \
                  transactions, and estimates payroll deductions."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Investment management commands
    #[command(subcommand, alias = "inv")]
    Investment(InvestmentCommands),

    /// Estimate pension and income tax on a monthly gross salary
    Tax {
        /// Gross salary (e.g., "5000" or "5.000,00")
        gross: String,
    },

    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent creates and deletes from the audit log
    Audit {
        /// Only entries for this entity (transaction or investment)
        #[arg(short, long)]
        entity: Option<String>,

        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fintrack::logging::init(cli.verbose);

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            if settings.backend == Backend::File {
                Storage::open(paths.clone())?.save_all()?;
            }
            println!("Initialization complete!");
        }
        Commands::Config => {
            let audit = AuditLogger::new(paths.audit_log());
            println!("fintrack configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Backend:             {}", settings.backend);
            if settings.backend == Backend::Api {
                println!("  API base URL:        {}", settings.api.base_url);
                println!("  API timeout:         {}s", settings.api.timeout_secs);
            }
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Projection months:   {}", settings.projection_months);
            println!("  Default granularity: {}", settings.default_granularity);
            println!("  Audit entries:       {}", audit.entry_count()?);
        }
        Commands::Tax { gross } => handle_tax_command(&settings, &gross)?,
        Commands::Transaction(cmd) => {
            let store = open_store(&paths, &settings)?;
            let audit = AuditLogger::new(paths.audit_log());
            handle_transaction_command(store.as_ref(), &audit, &settings, today, cmd)?;
        }
        Commands::Investment(cmd) => {
            let store = open_store(&paths, &settings)?;
            let audit = AuditLogger::new(paths.audit_log());
            handle_investment_command(store.as_ref(), &audit, &settings, today, cmd)?;
        }
        Commands::Report(cmd) => {
            let store = open_store(&paths, &settings)?;
            handle_report_command(store.as_ref(), &settings, today, cmd)?;
        }
        Commands::Audit { entity, limit } => {
            let audit = AuditLogger::new(paths.audit_log());
            handle_audit_command(&audit, &settings, entity, limit)?;
        }
    }

    Ok(())
}
