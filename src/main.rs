//! # slackpack CLI
//!
//! Command-line interface for the slackpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use slackpack::SlackpackError;
use slackpack::cli::Args;
use slackpack::collector::MessageCollector;
use slackpack::core::{apply_filters, sort_chronologically, write_csv};
use slackpack::ensure_input;
use slackpack::error::InputKind;
use slackpack::mentions::MentionRewriter;
use slackpack::users::UserDirectory;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SlackpackError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let options = args.to_options()?;

    // Make sure inputs exist before touching anything
    ensure_input(&args.export_dir, InputKind::Directory)?;
    ensure_input(&args.users, InputKind::File)?;

    let report = !args.quiet;
    macro_rules! say {
        ($($arg:tt)*) => {
            if report {
                println!($($arg)*);
            }
        };
    }

    say!("📦 slackpack v{}", env!("CARGO_PKG_VERSION"));
    say!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    say!("📂 Export:  {}", args.export_dir.display());
    say!("👥 Users:   {}", args.users.display());
    say!("💾 Output:  {}", args.output.display());
    if let Some(ref after) = args.after {
        say!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        say!("📅 Before:  {}", before);
    }
    if let Some(ref from) = args.from {
        say!("👤 From:    {}", from);
    }
    say!();

    // Step 1: Users
    let users = UserDirectory::load(&args.users, &options.slack)?;
    say!("👥 Loaded {} users", users.len());
    if args.verbose {
        for (_, name) in users.display_names() {
            println!("\t{}", name);
        }
    }

    // Step 2: Collect
    say!("⏳ Reading per-day documents...");
    let collect_start = Instant::now();
    let rewriter = MentionRewriter::new();
    let mut collector = MessageCollector::new(&users, &rewriter, &options.slack);
    let messages = collector.collect_dir(&args.export_dir)?;
    let mut stats = collector.stats();
    say!(
        "   Found {} messages in {} files ({} entries skipped, {:.2}s)",
        stats.messages_collected,
        stats.files_read,
        stats.entries_skipped,
        collect_start.elapsed().as_secs_f64()
    );

    // Step 3: Filter
    let mut messages = if options.filter.is_active() {
        say!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &options.filter);
        stats.messages_filtered = stats.messages_collected - filtered.len();
        say!(
            "   {} messages after filtering ({:.1}% removed)",
            filtered.len(),
            stats.filtered_ratio()
        );
        filtered
    } else {
        messages
    };

    // Step 4: Sort
    sort_chronologically(&mut messages);

    // Step 5: Write
    say!("💾 Writing CSV...");
    let write_start = Instant::now();
    stats.rows_written = write_csv(&messages, &args.output, &options.output)?;
    say!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    say!();
    say!("✅ Done! Output saved to {}", args.output.display());
    say!();
    say!("📊 Summary:");
    say!("   Files:     {}", stats.files_read);
    say!("   Entries:   {}", stats.entries_seen);
    say!("   Rows:      {}", stats.rows_written);
    say!();
    say!("⚡ Performance:");
    say!("   Total time:  {:.2}s", total_time.as_secs_f64());
    say!("   Throughput:  {:.0} rows/sec", stats.throughput(total_time));

    Ok(())
}
