use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use ledger_core::VERSION;

/// Ledger - a small personal finance ledger backed by a JSON file
#[derive(Parser)]
#[command(name = "ledger")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file
    #[arg(short, long, global = true, env = "LEDGER_PATH")]
    pub ledger: Option<String>,

    /// Start the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at a ledger
    Init(InitArgs),

    /// Append an entry
    Add(EntryArgs),

    /// Replace the entry at a position
    Edit(EditArgs),

    /// Find entries by category, date and amount
    Search(SearchArgs),

    /// List every entry with its position
    List(ListArgs),

    /// Show income, expense and net balance
    Balance(BalanceArgs),

    /// Run the interactive menu
    Menu,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Ledger file the config should point at
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// The four fields of an entry
#[derive(Args)]
pub struct EntryArgs {
    /// Entry date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Category (Income, Expense, or any label)
    #[arg(long)]
    pub category: String,

    /// Amount
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Description
    #[arg(long, default_value = "")]
    pub description: String,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry position (0-based, see `ledger list`)
    #[arg(value_name = "INDEX", allow_hyphen_values = true)]
    pub index: String,

    #[command(flatten)]
    pub entry: EntryArgs,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Exact category
    #[arg(long)]
    pub category: Option<String>,

    /// Exact date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Exact amount
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
