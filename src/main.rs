use anyhow::Result;
use clap::{Parser, Subcommand};

use bank_ledger::cli::{
    handle_account_command, handle_fixed_deposit_command, handle_transaction_command,
    PasswordSource,
};
use bank_ledger::config::{paths::BankPaths, settings::Settings};
use bank_ledger::services::BankService;
use bank_ledger::storage::{DiskStore, Ledger};

#[derive(Parser)]
#[command(
    name = "bank",
    author = "Kaylee Beyene",
    version,
    about = "Command-line bank account ledger",
    long_about = "A small retail bank ledger for the terminal. Open password-protected \
                  accounts, deposit, withdraw and transfer money, and lock savings \
                  in fixed deposits. All data is kept in one text file."
)]
struct Cli {
    /// Account password (prompted for when omitted)
    #[arg(long, global = true, env = "BANK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(bank_ledger::cli::AccountCommands),

    /// Deposits, withdrawals and transfers
    #[command(subcommand, alias = "transaction")]
    Txn(bank_ledger::cli::TransactionCommands),

    /// Fixed deposit commands
    #[command(subcommand, name = "fd")]
    FixedDeposit(bank_ledger::cli::FixedDepositCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BankPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = DiskStore::new(paths.data_dir());
    let read_only = matches!(cli.command, Some(Commands::Config) | None);
    let mut ledger = match Ledger::load(&store, &settings.data_file) {
        Ok(ledger) => ledger,
        // Nothing gets saved on these paths, so the unreadable file stays untouched
        Err(e) if read_only => {
            eprintln!(
                "Warning: could not read {}: {}",
                store.file_path(&settings.data_file).display(),
                e
            );
            Ledger::new()
        }
        Err(e) => return Err(e.into()),
    };
    if ledger.skipped_on_load() > 0 {
        eprintln!(
            "Warning: {} corrupt account record(s) in {} were skipped",
            ledger.skipped_on_load(),
            store.file_path(&settings.data_file).display()
        );
    }

    let passwords = PasswordSource::new(cli.password);
    let mut service = BankService::new(&mut ledger, &store, &settings.data_file);

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&mut service, &settings, &passwords, cmd)?;
        }
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&mut service, &settings, &passwords, cmd)?;
        }
        Some(Commands::FixedDeposit(cmd)) => {
            handle_fixed_deposit_command(&mut service, &settings, &passwords, cmd)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Bank Ledger Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data file:        {}", settings.data_file);
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!();
            println!("Accounts:           {}", service.ledger().len());
            println!("Next account number: {}", service.ledger().next_account_number());
        }
        None => {
            println!("Bank Ledger - command-line bank accounts");
            println!();
            println!("Run 'bank --help' for usage information.");
        }
    }

    Ok(())
}
