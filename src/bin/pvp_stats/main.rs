//! PvP loadout stats CLI - inspects exported leaderboards and talent usage.
//!
//! Usage:
//!   pvp-stats specs                                        # List specs and available files
//!   pvp-stats summary -c Druid -s Balance -b 3v3           # Entry counts and rating spread
//!   pvp-stats usage -c Druid -s Balance --pvp 5515         # Talent usage under filters
//!   pvp-stats usage -c Druid -s Balance --rating 2100:     # Only 2100+ players
//!
//! Set RUST_LOG=debug to see what gets loaded.

mod args;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pvp_loadouts::catalog;
use pvp_loadouts::codec::{Leaderboard, RegionTimestamps};
use pvp_loadouts::color::usage_color;
use pvp_loadouts::config::StatsConfig;
use pvp_loadouts::filter::{ExplorerFilters, FilteredLoadouts};
use pvp_loadouts::loader;
use pvp_loadouts::loadout::{RatedLoadout, Region};
use pvp_loadouts::ratings::{self, HistogramBucket};
use pvp_loadouts::tree::{NodeId, TalentId, TalentNode, TalentTree};
use pvp_loadouts::usage::{NodeUsage, PvpTalentUsage, TopPlayer, node_usage, pvp_talent_usage, top_players};

const TOP_PLAYERS: usize = 5;

#[derive(Parser)]
#[command(name = "pvp-stats")]
#[command(about = "PvP leaderboard talent statistics")]
struct Cli {
    /// Config file (defaults to ~/.config/pvp-loadouts/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the data directory from the config
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SpecArgs {
    /// Class name, e.g. "Death Knight"
    #[arg(short, long)]
    class: String,

    /// Spec name, e.g. "Unholy"
    #[arg(short, long)]
    spec: String,

    /// Bracket directory (defaults to the first configured bracket)
    #[arg(short, long)]
    bracket: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every class/spec with its tree file and leaderboard files
    Specs,

    /// Entry counts, timestamps and rating quantiles of a leaderboard
    Summary {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Talent and PvP talent usage of the filtered leaderboard
    Usage {
        #[command(flatten)]
        spec: SpecArgs,

        #[command(flatten)]
        filters: args::FilterArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => StatsConfig::load_from(path)?,
        None => StatsConfig::load(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Specs => list_specs(&config),
        Commands::Summary { spec } => summary(&config, &spec),
        Commands::Usage { spec, filters } => usage(&config, &spec, &filters),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load(config: &StatsConfig, spec: &SpecArgs) -> Result<(TalentTree, String, Leaderboard), Box<dyn std::error::Error>> {
    if !catalog::is_known(&spec.class, &spec.spec) {
        return Err(format!("unknown class/spec: {} {}", spec.class, spec.spec).into());
    }
    let bracket = match &spec.bracket {
        Some(b) => b.clone(),
        None => config
            .brackets
            .first()
            .cloned()
            .ok_or("no bracket given and none configured")?,
    };
    let tree = loader::load_tree(&config.tree_path(&spec.class, &spec.spec))?;
    let leaderboard = loader::load_leaderboard(config, &bracket, &tree)?;
    Ok((tree, bracket, leaderboard))
}

// ── specs ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SpecListing {
    class: &'static str,
    spec: &'static str,
    slug: String,
    tree: bool,
    /// `region/bracket` pairs with a leaderboard file.
    leaderboards: Vec<String>,
}

fn list_specs(config: &StatsConfig) -> Result<(), Box<dyn std::error::Error>> {
    let trees = loader::discover_trees(config);
    let boards = loader::discover_leaderboards(config);

    let listing: Vec<SpecListing> = catalog::all_specs()
        .map(|(class, spec)| {
            let slug = catalog::slug(class, spec);
            SpecListing {
                class,
                spec,
                tree: trees.contains(&config.tree_path(class, spec)),
                leaderboards: boards
                    .iter()
                    .filter(|b| b.slug == slug)
                    .map(|b| format!("{}/{}", b.region, b.bracket))
                    .collect(),
                slug,
            }
        })
        .collect();
    print_json(&listing)
}

// ── summary ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary {
    class: String,
    spec: String,
    bracket: String,
    entries: usize,
    us: usize,
    eu: usize,
    timestamps: RegionTimestamps,
    /// 0th, 25th, 50th, 75th and 100th rating percentile.
    rating_quantiles: Vec<f64>,
    rating_filter_bounds: Option<(u32, u32)>,
    rating_marks: Option<[u32; 5]>,
}

fn summary(config: &StatsConfig, spec: &SpecArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (tree, bracket, leaderboard) = load(config, spec)?;
    let all_ratings = leaderboard.ratings();
    let bounds = ratings::filter_bounds(&all_ratings, config.rating_step);

    print_json(&Summary {
        class: tree.class_name.clone(),
        spec: tree.spec_name.clone(),
        bracket,
        entries: leaderboard.len(),
        us: leaderboard.region_count(Region::Us),
        eu: leaderboard.region_count(Region::Eu),
        timestamps: leaderboard.timestamps,
        // Ratings are sorted high to low, so percentile p is quantile 1 - p.
        rating_quantiles: [0.0, 0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|p| ratings::quantile(&all_ratings, 1.0 - p))
            .collect(),
        rating_filter_bounds: bounds,
        rating_marks: bounds.map(|(min, max)| ratings::marks(min, max)),
    })
}

// ── usage ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ColoredNodeUsage {
    #[serde(flatten)]
    usage: NodeUsage,
    color: String,
}

#[derive(Serialize)]
struct ColoredPvpUsage {
    #[serde(flatten)]
    usage: PvpTalentUsage,
    color: String,
}

#[derive(Serialize)]
struct UsageReport<'a> {
    filters: ExplorerFilters,
    entries: usize,
    in_rating_range: usize,
    filtered: usize,
    /// Share of the rating-range entries kept by the talent filters.
    share: f64,
    range_label: Option<String>,
    top_players: Vec<TopPlayer<'a>>,
    rating_histogram: Vec<HistogramBucket>,
    class_nodes: BTreeMap<NodeId, ColoredNodeUsage>,
    spec_nodes: BTreeMap<NodeId, ColoredNodeUsage>,
    pvp_talents: BTreeMap<TalentId, ColoredPvpUsage>,
}

fn colored_nodes(nodes: &[TalentNode], loadouts: &[&RatedLoadout]) -> BTreeMap<NodeId, ColoredNodeUsage> {
    node_usage(nodes, loadouts)
        .into_iter()
        .map(|(id, usage)| {
            let color = usage_color(usage.percent).to_css(1.0);
            (id, ColoredNodeUsage { usage, color })
        })
        .collect()
}

fn usage(config: &StatsConfig, spec: &SpecArgs, flags: &args::FilterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (tree, _, leaderboard) = load(config, spec)?;
    let explorer = flags.explorer_filters(&tree)?;

    let FilteredLoadouts { in_rating_range, loadouts: filtered } = explorer.apply(&leaderboard.entries);
    tracing::debug!(
        "{} filters kept {} of {} entries",
        explorer.talent_filters().len(),
        filtered.len(),
        in_rating_range
    );

    let range_label = match (explorer.rating, leaderboard.entries.last(), leaderboard.entries.first()) {
        (Some((min, max)), Some(lowest), Some(highest)) => {
            Some(ratings::range_label(min, max, lowest.rating, highest.rating))
        }
        _ => None,
    };

    let (min, max) = explorer.rating.unwrap_or((0, u32::MAX));
    let filtered_ratings: Vec<u32> = filtered.iter().map(|l| l.rating).collect();
    let rating_histogram = ratings::histogram(&leaderboard.ratings(), &filtered_ratings, config.rating_step, min, max);

    let pvp_talents = pvp_talent_usage(&tree.pvp_talents, &filtered)
        .into_iter()
        .map(|(id, usage)| {
            let color = usage_color(usage.percent).to_css(1.0);
            (id, ColoredPvpUsage { usage, color })
        })
        .collect();

    print_json(&UsageReport {
        entries: leaderboard.len(),
        in_rating_range,
        filtered: filtered.len(),
        share: ratings::filtered_share(filtered.len(), in_rating_range),
        range_label,
        top_players: top_players(&filtered, TOP_PLAYERS),
        rating_histogram,
        class_nodes: colored_nodes(&tree.class_nodes, &filtered),
        spec_nodes: colored_nodes(&tree.spec_nodes, &filtered),
        pvp_talents,
        filters: explorer,
    })
}
