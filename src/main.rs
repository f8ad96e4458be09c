//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use chatstats::ChatstatsError;
use chatstats::cli::{Args, BasicArgs, Command, DeepArgs, find_samples};
use chatstats::config::{ChartConfig, ReportConfig, WordCloudConfig};
use chatstats::core::output::{ChartData, write_table};
use chatstats::core::{Metrics, StatisticsReport, aggregate, basic_summary, percentage, top_n};
use chatstats::format::write_charts;
use chatstats::parser::TranscriptParser;

const NO_MESSAGES: &str = "No messages found or incorrect file format.";

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<(), ChatstatsError> {
    match args.command {
        Some(Command::Basic(basic)) => run_basic(&basic),
        Some(Command::Deep(deep)) => run_deep(&deep),
        Some(Command::ListSamples) => {
            list_samples();
            Ok(())
        }
        Some(Command::Version) => {
            show_version();
            Ok(())
        }
        None => {
            print_usage();
            Ok(())
        }
    }
}

/// Parses and aggregates `path`, or returns `None` when nothing parsed.
fn analyze(path: &Path) -> Result<Option<Metrics>, ChatstatsError> {
    let parse_start = Instant::now();
    let outcome = TranscriptParser::new().parse(path)?;
    let metrics = aggregate(&outcome.messages);

    if metrics.is_empty() {
        println!("{}", NO_MESSAGES);
        return Ok(None);
    }

    println!(
        "   Found {} messages from {} members ({:.2}s)",
        metrics.total_messages(),
        metrics.member_count(),
        parse_start.elapsed().as_secs_f64()
    );
    if outcome.skipped > 0 {
        println!("   Skipped {} unrecognized blocks", outcome.skipped);
    }

    Ok(Some(metrics))
}

fn run_basic(args: &BasicArgs) -> Result<(), ChatstatsError> {
    println!("📦 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("📂 Input:   {}", args.file.display());
    println!();

    let Some(metrics) = analyze(&args.file)? else {
        return Ok(());
    };

    println!();
    print!("{}", basic_summary(&metrics));

    if args.plot {
        let charts =
            ChartData::from_metrics(&metrics, &ChartConfig::basic(), &WordCloudConfig::default());
        let path = Path::new("message_count.csv");
        write_table(&charts.message_count, path)?;
        println!();
        println!("📊 Chart data saved as '{}'", path.display());
    }

    Ok(())
}

fn run_deep(args: &DeepArgs) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();

    println!("📦 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.file.display());
    println!("💾 Output:  {}", args.output.display());
    if args.no_plots {
        println!("📄 Charts:  skipped (--no-plots)");
    } else {
        println!("📄 Charts:  {}", args.format);
    }
    println!();
    println!("⏳ Analyzing chat...");

    let Some(metrics) = analyze(&args.file)? else {
        return Ok(());
    };

    fs::create_dir_all(&args.output)?;

    let report_path = args.output.join("statistics_report.txt");
    let report_config = ReportConfig::default();
    StatisticsReport::new(&metrics, &report_config).write_to(&report_path)?;
    println!("📝 Statistics report saved to: {}", report_path.display());

    if !args.no_plots {
        println!("📊 Writing chart data...");
        let charts =
            ChartData::from_metrics(&metrics, &ChartConfig::default(), &WordCloudConfig::default());
        let written = write_charts(&charts, &args.output, args.format.into())?;
        println!(
            "   {} {} files saved to: {}/",
            written.len(),
            args.format,
            args.output.display()
        );
    }

    println!();
    println!(
        "✅ Analysis complete! ({:.2}s)",
        total_start.elapsed().as_secs_f64()
    );

    println!();
    println!("📊 Most active members:");
    let total = metrics.total_messages();
    for (i, (sender, count)) in top_n(metrics.message_count(), 5).into_iter().enumerate() {
        println!(
            "   {}. {}: {} messages ({:.1}%)",
            i + 1,
            sender,
            count,
            percentage(count, total)
        );
    }

    Ok(())
}

fn list_samples() {
    println!("Available sample chat files:");

    for sample in find_samples(Path::new(".")) {
        if sample == Path::new("sample_chat.txt") {
            println!("- sample_chat.txt (Example chat for testing)");
        } else {
            println!("- {}", sample.display());
        }
    }

    println!();
    println!("To use a sample file, run:");
    println!("  chatstats basic --file sample_chat.txt");
    println!("  or");
    println!("  chatstats deep --file sample_chat.txt");
}

fn show_version() {
    println!("chatstats v{}", env!("CARGO_PKG_VERSION"));

    let features: Vec<&str> = [
        ("csv-output", cfg!(feature = "csv-output")),
        ("json-output", cfg!(feature = "json-output")),
        ("cli", cfg!(feature = "cli")),
        ("gen-test", cfg!(feature = "gen-test")),
    ]
    .into_iter()
    .filter_map(|(name, enabled)| enabled.then_some(name))
    .collect();

    println!("Features: {}", features.join(", "));
}

fn print_usage() {
    println!("chatstats - WhatsApp chat statistics");
    println!("====================================");
    println!();
    println!("Use one of the following commands:");
    println!("  chatstats basic         - Run basic message count analysis");
    println!("  chatstats deep          - Run comprehensive analysis and export chart data");
    println!("  chatstats list-samples  - List available sample chat files");
    println!("  chatstats version       - Show version information");
    println!();
    println!("For more options, use: chatstats --help");
}
