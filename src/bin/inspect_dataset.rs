use anyhow::{Context, Result, bail};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use market_movements::{
    DATA_SOURCE, RegulatoryDataset,
    config::{DASHBOARD, INSTITUTIONAL_PATTERNS},
    data::source_for,
    models::{CategoryRecord, Direction},
    utils::format_reliability,
};

/// Prints the regulatory dataset the dashboard would load, as plain tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL or file path of the dataset document
    #[arg(long, default_value = DATA_SOURCE.native_path)]
    source: String,

    /// Category key to print (defaults to the dashboard's initial category)
    #[arg(long)]
    category: Option<String>,

    /// Only list the category keys and titles
    #[arg(long)]
    list: bool,

    /// Include the CPI sector breakdown
    #[arg(long)]
    cpi: bool,

    /// Include the institutional patterns reference table
    #[arg(long)]
    institutional: bool,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Impacts")]
    impacts: usize,
    #[tabled(rename = "CPI")]
    cpi: &'static str,
}

#[derive(Tabled)]
struct ImpactRow {
    #[tabled(rename = "Index/ETF")]
    index: String,
    #[tabled(rename = "Movement")]
    movement: String,
    #[tabled(rename = "Direction")]
    direction: Direction,
    #[tabled(rename = "Timing")]
    timing: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

#[derive(Tabled)]
struct SectorRow {
    #[tabled(rename = "Sector")]
    name: String,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Drivers")]
    drivers: String,
}

#[derive(Tabled)]
struct PatternRow {
    #[tabled(rename = "Investor")]
    class: String,
    #[tabled(rename = "Signal")]
    signal: &'static str,
    #[tabled(rename = "Timing")]
    timing: &'static str,
    #[tabled(rename = "Volume Threshold")]
    volume_threshold: &'static str,
    #[tabled(rename = "Reliability")]
    reliability: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let source = source_for(&args.source);
    log::info!("Loading dataset from {}", source.describe());

    let dataset = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load dataset from {}", args.source))?;

    if args.list {
        println!("{}", category_table(&dataset));
        return Ok(());
    }

    let key = args
        .category
        .as_deref()
        .unwrap_or(DASHBOARD.default_category);
    let Some(record) = dataset.get(key) else {
        let known: Vec<&str> = dataset.keys().collect();
        bail!("Unknown category `{}` (known: {})", key, known.join(", "));
    };

    println!("{} [{}]", record.title, key);
    println!("{}", impact_table(record));

    if args.cpi {
        match &record.cpi_impacts {
            Some(cpi) => {
                let rows = cpi.primary_sectors.iter().map(|s| SectorRow {
                    name: s.name.clone(),
                    range: s.range.to_string(),
                    drivers: s.drivers.join("; "),
                });
                println!("CPI Impact Analysis");
                println!("{}", Table::new(rows).with(Style::rounded()));
                println!(
                    "Net contribution: {} ({}), duration: {}",
                    cpi.net_contribution,
                    cpi.contribution_tier(),
                    cpi.duration
                );
            }
            None => println!("No CPI data for `{}`", key),
        }
    }

    if args.institutional {
        let rows = INSTITUTIONAL_PATTERNS.iter().map(|p| PatternRow {
            class: p.class.to_string(),
            signal: p.signal_type,
            timing: p.timing,
            volume_threshold: p.volume_threshold,
            reliability: format!(
                "{} ({})",
                format_reliability(p.reliability),
                p.tier()
            ),
        });
        println!("Institutional Trading Patterns");
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    let anomalies = dataset.inverted_ranges();
    if !anomalies.is_empty() {
        log::warn!("{} inverted range(s) in the document", anomalies.len());
    }

    Ok(())
}

fn category_table(dataset: &RegulatoryDataset) -> Table {
    let rows = dataset.iter().map(|(key, record)| CategoryRow {
        key: key.to_string(),
        title: record.title.clone(),
        impacts: record.impacts.len(),
        cpi: if record.cpi_impacts.is_some() { "yes" } else { "-" },
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

fn impact_table(record: &CategoryRecord) -> Table {
    let rows = record.impacts.iter().map(|i| ImpactRow {
        index: i.index.clone(),
        movement: i.movement.to_string(),
        direction: i.direction,
        timing: i.timing.clone(),
        volume: i.volume.clone(),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}
