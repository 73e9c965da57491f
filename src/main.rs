//! YouBuidl CLI
//!
//! Terminal front end for the dashboard view-model:
//! - Show the leaderboard
//! - Show the connected builder's profile
//! - Show market stats
//! - Try the display formatters
//! - Generate a config file

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use youbuidl::config::{generate_default_config, Config};
use youbuidl::format::{format_balance, format_number, truncate_address};
use youbuidl::leaderboard::{present_leaderboard, LeaderRow};
use youbuidl::market::market_stats;
use youbuidl::model::{Category, TimeRange};
use youbuidl::profile::{present_profile, ProfileInputs, ProfileScreen, ProfileView, TabContent};
use youbuidl::providers::{
    Balance, DataSource, JsonDataSource, LeaderboardQuery, MockDataSource, NameService,
    SimulatedWallet, StaticNameService, WalletProvider,
};
use youbuidl::view::{
    LeaderboardEvent, LeaderboardState, ModalKind, ProfileEvent, ProfileState, ProfileTab,
    ShellEvent, ShellState, ViewMode, ViewState,
};

#[derive(Parser)]
#[command(name = "youbuidl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Public-goods builder dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON data file (overrides the config)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the builder leaderboard
    Leaderboard {
        /// Category (builders, projects, grants, domains)
        #[arg(long, default_value = "builders")]
        category: String,
        /// Time range (1d, 7d, 30d, 90d, all)
        #[arg(long, default_value = "all")]
        range: String,
        /// Layout (table, grid)
        #[arg(long, default_value = "table")]
        view: String,
    },

    /// Show the profile page for the configured wallet
    Profile {
        /// Connect the simulated wallet
        #[arg(long)]
        connected: bool,
        /// Leave the connection pending
        #[arg(long, conflicts_with = "connected")]
        connecting: bool,
        /// Tab (overview, contributions, projects, badges)
        #[arg(long, default_value = "overview")]
        tab: String,
        /// Replace the bio through the profile editor
        #[arg(long)]
        bio: Option<String>,
        /// Generate a fresh avatar seed
        #[arg(long)]
        new_avatar: bool,
    },

    /// Show market stats
    Stats,

    /// Apply a display formatter to a value
    Format {
        #[command(subcommand)]
        kind: FormatCommand,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum FormatCommand {
    /// Compact number (1.5K, 22.58B)
    Number { value: f64 },
    /// Shortened wallet address
    Address { value: String },
    /// Four-decimal balance
    Balance { value: Option<String> },
}

/// Flat leaderboard row for CSV output
#[derive(Serialize)]
struct LeaderRecord<'a> {
    rank: i64,
    name: &'a str,
    points: i64,
    impact_score: f64,
    growth: &'a str,
    contributions: u32,
    level: &'a str,
    specialties: String,
}

impl<'a> From<&'a LeaderRow> for LeaderRecord<'a> {
    fn from(row: &'a LeaderRow) -> Self {
        Self {
            rank: row.rank,
            name: &row.display_name,
            points: row.points,
            impact_score: row.impact_score,
            growth: &row.growth_label,
            contributions: row.contributions,
            level: &row.level_label,
            specialties: row.all_specialties.join(";"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, outcome) = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, None)
        }
        None => {
            let outcome = Config::load_default();
            (outcome.config.clone(), Some(outcome))
        }
    };

    youbuidl::logging::init(&config.logging);
    tracing::info!("YouBuidl v{}", env!("CARGO_PKG_VERSION"));
    if let Some(outcome) = &outcome {
        outcome.report();
    }

    match cli.command {
        Commands::Leaderboard {
            ref category,
            ref range,
            ref view,
        } => {
            let state = LeaderboardState::default().apply_all([
                LeaderboardEvent::SelectCategory(Category::parse(category)),
                LeaderboardEvent::SelectTimeRange(TimeRange::parse(range)),
                LeaderboardEvent::SetViewMode(ViewMode::parse(view)),
            ]);

            let source = open_data_source(&cli, &config).await?;
            let leaders = source
                .leaders(&LeaderboardQuery {
                    category: state.category,
                    time_range: state.time_range,
                })
                .await
                .context("loading leaderboard")?;

            let rows = present_leaderboard(&leaders, &state);
            let shell = ShellState::for_viewport(
                config.display.viewport_width,
                config.display.mobile_breakpoint,
            );

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
                "csv" => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    for row in &rows {
                        writer.serialize(LeaderRecord::from(row))?;
                    }
                    writer.flush()?;
                }
                _ => {
                    println!(
                        "{} leaderboard ({})",
                        state.category.label(),
                        state.time_range.label()
                    );
                    println!();
                    if rows.is_empty() {
                        println!("No entries in this category yet.");
                    } else if state.view_mode == ViewMode::Grid {
                        print_grid(&rows);
                    } else {
                        print_table(&rows, shell.is_mobile);
                    }
                }
            }
        }

        Commands::Profile {
            connected,
            connecting,
            ref tab,
            ref bio,
            new_avatar,
        } => {
            let wallet_config = &config.wallet;
            let wallet = SimulatedWallet::new(
                wallet_config.address.clone(),
                Some(Balance::new(
                    wallet_config.balance.clone(),
                    wallet_config.symbol.clone(),
                )),
            );

            if connected {
                wallet.toggle();
            } else if connecting {
                wallet.begin_connect();
            }

            let status = wallet.status().await;
            let shell = ShellState::for_viewport(
                config.display.viewport_width,
                config.display.mobile_breakpoint,
            )
            .apply(ShellEvent::WalletStatusChanged {
                connected: status.is_connected(),
            });

            let mut names = StaticNameService::new();
            if let Some(name) = &wallet_config.ens_name {
                names = names.with_name(wallet_config.address.clone(), name.clone(), None);
            }

            let (profile, record) = match status.address() {
                Some(address) => {
                    let source = open_data_source(&cli, &config).await?;
                    let profile = source.profile(address).await.context("loading profile")?;
                    let record = names.lookup(address).await.context("resolving name")?;
                    (Some(profile), record)
                }
                None => (None, Default::default()),
            };

            let mut events = vec![ProfileEvent::SelectTab(ProfileTab::parse(tab))];
            if let Some(bio) = bio {
                events.extend([
                    ProfileEvent::OpenModal(ModalKind::Profile),
                    ProfileEvent::EditBio(bio.clone()),
                    ProfileEvent::SaveModal,
                ]);
            }
            if new_avatar {
                events.push(ProfileEvent::RegenerateAvatar {
                    seed: uuid::Uuid::new_v4().to_string(),
                });
            }

            let initial = profile
                .as_ref()
                .map(|p| ProfileState::with_bio(p.bio.clone()))
                .unwrap_or_default();
            let state = initial.apply_all(events);

            let screen = present_profile(&ProfileInputs {
                wallet: &status,
                profile: profile.as_ref(),
                names: &record,
                state: &state,
                avatar_template: &config.avatar.generator_url,
                now: Utc::now(),
            });

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&screen)?),
                "csv" => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["label", "value"])?;
                    if let ProfileScreen::Ready(view) = &screen {
                        for stat in &view.stats {
                            writer.write_record([stat.label, stat.value.as_str()])?;
                        }
                    }
                    writer.flush()?;
                }
                _ => {
                    println!("[{}]", shell.wallet_label(&wallet_config.address));
                    println!();
                    print_profile(&screen);
                }
            }
        }

        Commands::Stats => {
            let stats = market_stats();
            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
                "csv" => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["label", "value"])?;
                    for stat in &stats {
                        writer.write_record([stat.label.clone(), stat.display_value()])?;
                    }
                    writer.flush()?;
                }
                _ => {
                    for stat in &stats {
                        println!("{:<24} {}", stat.label, stat.display_value());
                    }
                }
            }
        }

        Commands::Format { kind } => {
            let formatted = match kind {
                FormatCommand::Number { value } => format_number(value),
                FormatCommand::Address { value } => truncate_address(&value),
                FormatCommand::Balance { value } => format_balance(value.as_deref()),
            };
            println!("{}", formatted);
        }

        Commands::Config { output } => {
            let config = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &config)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(())
}

/// JSON file from `--data` or the config, else the built-in samples
async fn open_data_source(cli: &Cli, config: &Config) -> anyhow::Result<Box<dyn DataSource>> {
    let path = cli
        .data
        .clone()
        .or_else(|| config.data.file.as_ref().map(PathBuf::from));

    match path {
        Some(path) => {
            let source = JsonDataSource::open(&path)
                .await
                .with_context(|| format!("opening data file {}", path.display()))?;
            Ok(Box::new(source))
        }
        None => Ok(Box::new(MockDataSource::new())),
    }
}

fn print_table(rows: &[LeaderRow], compact: bool) {
    if compact {
        println!("{:<6} {:<24} {:>12}", "Rank", "Builder", "Points");
        println!("{}", "-".repeat(44));
        for row in rows {
            println!(
                "{:<6} {:<24} {:>12}",
                row.rank_label(),
                row.display_name,
                row.points_label
            );
        }
        return;
    }

    println!(
        "{:<6} {:<24} {:<28} {:>12} {:>8} {:>8} {:<8} {}",
        "Rank", "Builder", "Specialties", "Points", "Impact", "Growth", "Level", "Badges"
    );
    println!("{}", "-".repeat(110));

    for row in rows {
        let mut specialties = row.specialties.shown.join(", ");
        if let Some(overflow) = &row.specialties.overflow {
            specialties.push_str(&format!(" {}", overflow));
        }
        let badges: Vec<&str> = row.badges.iter().map(|b| b.icon).collect();

        println!(
            "{:<6} {:<24} {:<28} {:>12} {:>8} {:>8} {:<8} {}",
            row.rank_label(),
            row.display_name,
            specialties,
            row.points_label,
            row.impact_score,
            format!("{}{}", row.trend.arrow(), row.growth_label),
            row.level_label,
            badges.join(" ")
        );
    }
}

fn print_grid(rows: &[LeaderRow]) {
    for row in rows {
        println!("{} {}  ({})", row.rank_label(), row.display_name, row.level_label);
        println!("  {}", row.impact_label());
        println!("  {}", row.all_specialties.join(", "));
        println!(
            "  Weekly commits: {}  Proposals: {}  Reviews: {}",
            row.activity.weekly_commits,
            row.activity.proposals_created,
            row.activity.proposals_reviewed
        );
        println!(
            "  {} ({:.0}% to next level)",
            row.points_label,
            row.progress * 100.0
        );
        println!();
    }
}

fn print_profile(screen: &ProfileScreen) {
    let view: &ProfileView = match screen {
        ProfileScreen::ConnectPrompt { title, message } => {
            println!("{}", title);
            println!("{}", message);
            println!();
            println!("Connect with:");
            println!("  youbuidl profile --connected");
            return;
        }
        ProfileScreen::Loading => {
            println!("Loading profile...");
            return;
        }
        ProfileScreen::Ready(view) => view,
    };

    println!("{} ({})", view.display_name, view.short_address);
    println!("Balance: {}", view.balance_label);
    println!("Avatar:  {}", view.avatar);
    if !view.header_badges.is_empty() {
        let names: Vec<&str> = view.header_badges.iter().map(|b| b.name.as_str()).collect();
        println!("Badges:  {}", names.join(", "));
    }
    println!();
    println!("{}", view.bio);
    println!();

    for stat in &view.stats {
        println!("  {:<16} {}", stat.label, stat.value);
    }
    println!();
    println!("== {} ==", view.tab.label());

    match &view.content {
        TabContent::Overview { projects, activity } => {
            for project in projects {
                println!("  {} [{}] {}", project.name, project.status, project.updated_label);
            }
            for item in activity {
                println!("  {} ({})", item.text, item.when);
            }
        }
        TabContent::Contributions { activity } => {
            for item in activity {
                println!("  {} ({})", item.text, item.when);
            }
        }
        TabContent::Projects { projects } => {
            for project in projects {
                println!("  {} [{}]", project.name, project.status);
                println!("    {}", project.description);
            }
        }
        TabContent::Badges { badges } => {
            for badge in badges {
                println!("  {} ({}) {}", badge.name, badge.tier, badge.unlocked_label);
                println!("    {}", badge.description);
            }
        }
    }
}
