//! Command-line front end: argument parsing and command dispatch.

pub mod output;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, ConfigManager};
use crate::core::{Clock, ExpenseBook};
use crate::domain::{parse_iso_date, ExpenseCategory, ExpenseDraft, ExpenseId, PeriodSelection};
use crate::errors::Result;
use crate::storage::JsonExpenseStore;
use crate::utils::paths;

pub use output::{render_expense_list, render_report, RenderOptions};

/// Record expenses and compare spending across periods.
#[derive(Parser, Debug)]
#[command(name = "expense_core_cli", version, about, long_about = None)]
pub struct Cli {
    /// Expense file to read and write. Overrides the configured location.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Directory holding configuration and data. Defaults to `$EXPENSE_CORE_HOME` or `~/.expense_core`.
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Print without ANSI colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new expense.
    Add(ExpenseArgs),
    /// Replace the fields of an existing expense.
    Edit(EditArgs),
    /// Delete an expense by id.
    Remove {
        id: String,
    },
    /// List the expenses in a period, latest first.
    List(PeriodArgs),
    /// Show totals and per-category comparison for a period.
    Summary(PeriodArgs),
    /// Show or change stored preferences.
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Print build information.
    About,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the stored preferences.
    Show,
    /// Change one preference: locale, currency, default_period or data_file.
    Set { key: String, value: String },
}

#[derive(Args, Debug)]
pub struct ExpenseArgs {
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub amount: f64,
    /// Calendar date as YYYY-MM-DD.
    #[arg(long)]
    pub date: String,
    /// One of Food, Transportation, Entertainment, Utilities, Other.
    #[arg(long, value_parser = parse_category)]
    pub category: ExpenseCategory,
}

impl ExpenseArgs {
    fn into_draft(self) -> Result<ExpenseDraft> {
        ExpenseDraft::parse(self.description, self.amount, &self.date, self.category)
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: ExpenseArgs,
}

#[derive(Args, Debug, Default)]
pub struct PeriodArgs {
    /// Period tag: all, thisWeek, thisMonth, thisYear, 7days, 14days, 30days,
    /// 60days, 90days, lastMonth, lastYear or custom.
    #[arg(long)]
    pub period: Option<String>,
    /// Custom period start (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Custom period end (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    /// Reference date used instead of the current date.
    #[arg(long)]
    pub today: Option<String>,
}

impl PeriodArgs {
    /// Builds the selection; explicit bounds without a tag imply `custom`.
    pub fn selection(&self, default_tag: &str) -> PeriodSelection {
        let tag = match (&self.period, &self.from, &self.to) {
            (Some(tag), _, _) => tag.as_str(),
            (None, None, None) => default_tag,
            (None, _, _) => "custom",
        };
        PeriodSelection::from_state(tag, self.from.as_deref(), self.to.as_deref())
    }

    fn reference(&self, clock: &dyn Clock) -> Result<chrono::NaiveDate> {
        match &self.today {
            Some(raw) => parse_iso_date(raw),
            None => Ok(clock.today()),
        }
    }
}

fn parse_category(raw: &str) -> std::result::Result<ExpenseCategory, String> {
    raw.parse().map_err(|err: crate::errors::ExpenseError| err.to_string())
}

/// Executes `cli` and returns the text to print on stdout.
pub fn run(cli: Cli, clock: &dyn Clock) -> Result<String> {
    let home = cli.home.clone().unwrap_or_else(paths::app_data_dir);
    let manager = ConfigManager::with_base_dir(&home);
    let mut config = manager.load()?;
    let data_path = resolve_data_path(cli.data.as_deref(), &config, &home);
    tracing::debug!(path = %data_path.display(), "using expense file");

    let options = RenderOptions {
        color: !cli.no_color,
        currency: config.currency_format(),
    };
    let open_book = || ExpenseBook::open(Box::new(JsonExpenseStore::new(&data_path)));

    match cli.command {
        Command::Add(args) => {
            let draft = args.into_draft()?;
            let id = open_book()?.add(draft)?;
            Ok(format!("Expense recorded: {id}\n"))
        }
        Command::Edit(args) => {
            let id = ExpenseId::from(args.id);
            let draft = args.fields.into_draft()?;
            open_book()?.update(&id, draft)?;
            Ok(format!("Expense updated: {id}\n"))
        }
        Command::Remove { id } => {
            let removed = open_book()?.remove(&ExpenseId::from(id))?;
            Ok(format!(
                "Expense removed: {} ({})\n",
                removed.description, removed.id
            ))
        }
        Command::List(args) => {
            let selection = args.selection(&config.default_period);
            let reference = args.reference(clock)?;
            let book = open_book()?;
            let expenses = book.list(&selection, reference);
            Ok(render_expense_list(&expenses, &selection, &options))
        }
        Command::Summary(args) => {
            let selection = args.selection(&config.default_period);
            let reference = args.reference(clock)?;
            let report = open_book()?.report(&selection, reference);
            Ok(render_report(&report, &options))
        }
        Command::Config { action } => {
            if let Some(ConfigAction::Set { key, value }) = action {
                config.set(&key, &value)?;
                manager.save(&config)?;
                tracing::info!(key = key.as_str(), "preference updated");
            }
            let data_path = resolve_data_path(cli.data.as_deref(), &config, &home);
            Ok(describe_config(&config, &data_path, manager.path()))
        }
        Command::About => Ok(format!("{}\n", crate::build_info())),
    }
}

/// `--data` wins over the configured file, which wins over `<home>/expenses.json`.
fn resolve_data_path(flag: Option<&Path>, config: &Config, home: &Path) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(|| paths::expenses_file_in(home))
}

fn describe_config(config: &Config, data_path: &Path, config_path: &Path) -> String {
    format!(
        "Config file: {}\nLocale: {}\nCurrency: {}\nDefault period: {} ({})\nData file: {}\n",
        config_path.display(),
        config.locale,
        config.currency,
        config.default_selection(),
        config.default_period,
        data_path.display()
    )
}
