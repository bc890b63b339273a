//! Console front end that loads a ledger snapshot and renders the dashboard
//! cards, the account listing, the transaction table and the calendar.

use std::{fs, sync::OnceLock};

use clap::Parser;
use numfmt::{Formatter, Precision};
use time::{Date, OffsetDateTime};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use ledgerboard::{
    Account, AccountIndex, AccountRef, DashboardSelection, JoinedTransaction, PeriodStats,
    SortField, SortOrder, TableSelection, TimeRange, Transaction, accounts_by_name, month_of,
    parse_ledger,
};

/// Render the dashboard, account listing and transaction table for a ledger
/// snapshot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the ledger snapshot JSON.
    #[arg(long)]
    file: String,

    /// The dashboard time range: 7d, 30d or all.
    #[arg(long, default_value = "all")]
    range: TimeRange,

    /// Case-insensitive search term for the transaction table.
    #[arg(long, default_value = "")]
    search: String,

    /// The column to sort the transaction table by.
    #[arg(long, default_value = "date")]
    sort: SortField,

    /// The direction to sort the transaction table in: asc or desc.
    #[arg(long, default_value = "desc")]
    order: SortOrder,

    /// Include the calendar grid for the current month.
    #[arg(long)]
    calendar: bool,
}

fn main() {
    setup_logging();

    let args = Args::parse();

    let json = fs::read_to_string(&args.file).expect("Could not read the snapshot file");
    let now = OffsetDateTime::now_utc();
    let ledger = parse_ledger(&json, now).expect("Could not parse the snapshot file");

    tracing::info!(
        "loaded {} transactions across {} accounts",
        ledger.transactions.len(),
        ledger.accounts.len()
    );

    let mut dashboard = DashboardSelection::default();
    dashboard.select_range(args.range);
    print_cards(&dashboard.stats(&ledger.transactions, now), args.range);

    print_accounts(&ledger.accounts);

    let index = AccountIndex::new(&ledger.accounts);
    let rows = index.resolve_all(&ledger.transactions);
    let mut table = TableSelection::default();
    table.set_search(&args.search);
    table.sort_field = args.sort;
    table.sort_order = args.order;
    print_table(&table.apply(&rows));

    if args.calendar {
        print_calendar(now.date(), &ledger.transactions);
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(EnvFilter::from_default_env()))
        .init();
}

fn print_cards(stats: &PeriodStats, range: TimeRange) {
    println!("Dashboard Overview ({})", range.label());

    let recent_activity = match stats.most_recent_date {
        Some(date) => date.date().to_string(),
        None => "None".to_owned(),
    };
    let activity_change = if stats.transaction_count > 0 {
        "Active"
    } else {
        "No activity"
    };

    println!(
        "  {:<20} {:>12}  {:+.2}%",
        "Total Transactions", stats.transaction_count, stats.count_change_percent
    );
    println!(
        "  {:<20} {:>12}  {:+.2}%",
        "Total Amount",
        format_currency(stats.total_amount),
        stats.percent_change
    );
    println!(
        "  {:<20} {:>12}  {:+.2}%",
        "Average Transaction",
        format_currency(stats.average_amount),
        stats.average_change_percent
    );
    println!(
        "  {:<20} {:>12}  {}",
        "Recent Activity", recent_activity, activity_change
    );
}

fn print_accounts(accounts: &[Account]) {
    println!("\nAccounts");

    for account in accounts_by_name(accounts) {
        println!(
            "  {:<24} created {}",
            account.name,
            account.created_at.date()
        );
    }
}

fn print_table(rows: &[&JoinedTransaction]) {
    println!("\nTransactions");
    println!(
        "  {:<24} {:<28} {:>12}  {:<16} {:<16} {}",
        "Title", "Description", "Amount", "From Account", "To Account", "Date"
    );

    for row in rows {
        println!(
            "  {:<24} {:<28} {:>12}  {:<16} {:<16} {}",
            row.title,
            row.description.as_deref().unwrap_or_default(),
            format_currency(row.amount),
            display_name(&row.from_account),
            display_name(&row.to_account),
            row.transaction_date.date(),
        );
    }
}

fn print_calendar(today: Date, transactions: &[Transaction]) {
    let month = month_of(today, transactions);

    println!("\n{} {}", month.month, month.year);
    println!("  S  M  T  W  T  F  S");

    let mut column = 0;
    print!(" ");
    for _ in 0..month.leading_blanks {
        print!("   ");
        column += 1;
    }
    for day in &month.days {
        let marker = if day.transactions.is_empty() { ' ' } else { '*' };
        print!("{:>2}{marker}", day.date.day());
        column += 1;
        if column == 7 {
            println!();
            print!(" ");
            column = 0;
        }
    }
    if column != 0 {
        println!();
    }

    println!("\nTransactions for {today}");
    for transaction in month.transactions_on(today) {
        println!(
            "  {:<24} {}",
            transaction.title,
            format_currency(transaction.amount)
        );
    }
}

fn display_name(account: &AccountRef) -> &str {
    if account.is_unknown() {
        "(unknown account)"
    } else {
        account.name()
    }
}

/// Format an amount in minor currency units as dollars and cents.
///
/// The display edge is the only place amounts leave minor units.
fn format_currency(minor_units: i64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let number = minor_units as f64 / 100.0;

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
