//! CraftSense CLI
//!
//! Terminal rendering of the admin dashboard:
//! - Overview stat cards and chart data
//! - Workshop table
//! - Raw dataset as JSON
//! - Workshop form submission

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use craftsense::config::{generate_default_config, Config};
use craftsense::dashboard::{Dashboard, Tab, COLUMNS, TITLE};
use craftsense::data::MockGenerator;
use craftsense::form::{FormField, FormSession, LoggingSink, NotificationKind, WorkshopForm};

#[derive(Parser)]
#[command(name = "craftsense")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin dashboard for an artisan marketplace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed for reproducible mock data
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show stat cards and chart data
    Overview,

    /// List current workshops
    Workshops,

    /// Print the generated dataset as JSON
    Generate,

    /// Submit a workshop through the form
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        summary: String,
        #[arg(long)]
        instructor: String,
        /// Paid workshop
        #[arg(long)]
        paid: bool,
        /// Price in dollars (only kept for paid workshops)
        #[arg(long, default_value = "0")]
        price: u32,
        #[arg(long)]
        live_link: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if cli.seed.is_some() {
        config.mock.seed = cli.seed;
    }

    craftsense::logging::init(&config.logging);

    match cli.command {
        Commands::Overview => {
            let dashboard = load_dashboard(&config);
            print_overview(&dashboard);
        }

        Commands::Workshops => {
            let mut dashboard = load_dashboard(&config);
            dashboard.select(Tab::Workshops);
            print_workshops(&dashboard);
        }

        Commands::Generate => {
            let dashboard = load_dashboard(&config);
            println!("{}", serde_json::to_string_pretty(dashboard.data().as_ref())?);
        }

        Commands::Submit {
            title,
            category,
            summary,
            instructor,
            paid,
            price,
            live_link,
            video_url,
        } => {
            let (mut session, mut toasts) = FormSession::new(
                WorkshopForm::new(),
                Arc::new(LoggingSink),
                config.form.submit_delay(),
            );

            session
                .edit(|form| {
                    form.set_field(FormField::Title, title);
                    form.set_field(FormField::Category, category);
                    form.set_field(FormField::Summary, summary);
                    form.set_field(FormField::Instructor, instructor);
                    form.set_field(FormField::LiveSessionLink, live_link.unwrap_or_default());
                    form.set_field(FormField::VideoUrl, video_url.unwrap_or_default());
                    form.set_paid(paid);
                    form.set_price(price);
                })
                .await;

            session.submit().await?;

            while let Some(toast) = toasts.recv().await {
                match toast.kind {
                    NotificationKind::Loading => println!("… {}", toast.message),
                    NotificationKind::Success => {
                        println!("✓ {}", toast.message);
                        break;
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn load_dashboard(config: &Config) -> Dashboard {
    let data = MockGenerator::with_seed(config.mock.seed).generate(&config.mock, chrono::Utc::now());
    Dashboard::new(Arc::new(data))
}

fn print_overview(dashboard: &Dashboard) {
    println!("{}", TITLE);
    println!();

    for card in dashboard.stat_cards() {
        let trend = card.visible_trend().map(|t| t.label()).unwrap_or_default();
        println!(
            "{} {:<24} {:>12}  {}",
            card.icon.glyph(),
            card.label,
            card.target.display(),
            trend
        );
    }

    let revenue = dashboard.revenue_chart();
    println!();
    println!("{}", revenue.title);
    println!("{}", "-".repeat(20));
    for point in &revenue.points {
        println!("{:<6} | {:>10.0}", point.label, point.value);
    }

    let regions = dashboard.regional_chart();
    println!();
    println!("{}", regions.title);
    println!("{}", "-".repeat(20));
    for slice in &regions.slices {
        println!("{}", slice.label());
    }

    let products = dashboard.product_chart();
    println!();
    println!("{}", products.title);
    println!("{:<24} | {:>8} | {:>10}", "Product", "Sales", "Revenue");
    println!("{}", "-".repeat(48));
    for group in &products.groups {
        println!(
            "{:<24} | {:>8.0} | {:>10.0}",
            group.label, group.values[0], group.values[1]
        );
    }
}

fn print_workshops(dashboard: &Dashboard) {
    println!("Current Workshops");
    println!();
    println!(
        "{:<32} | {:<18} | {:<16} | {:>11} | {:>6} | {}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5]
    );
    println!("{}", "-".repeat(102));

    for row in dashboard.workshop_rows() {
        println!(
            "{:<32} | {:<18} | {:<16} | {:>11} | {:>6} | {}",
            row.title,
            row.instructor,
            row.category,
            row.enrollments,
            row.rating,
            row.status.label()
        );
        println!(
            "{:<32} | {:<18} | {:<16} | {:>11} |",
            row.completion, "", "", row.reviews
        );
    }
}
