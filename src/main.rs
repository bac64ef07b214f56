mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use irriplan::config::Config;
use irriplan::datasources::{load_plan_request, load_reference_et0, load_weather};
use irriplan::logic::evapotranspiration::estimate_et0;
use irriplan::render::{render_alerts, render_plan, render_recommendation, render_tables};
use irriplan::PlanGenerator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let output = cli.output.unwrap_or(config.defaults.output);
    let generator = PlanGenerator::new(config.tables()?);

    let rendered = match cli.command {
        Commands::Plan {
            request,
            weather,
            reference_et0,
            days,
        } => {
            let mut plan_request = load_plan_request(&request)
                .with_context(|| format!("reading plan request {}", request.display()))?;
            if let Some(days) = days {
                plan_request.horizon_days = days;
            }
            let snapshot = load_weather(&weather)
                .with_context(|| format!("reading weather {}", weather.display()))?;
            let reference = reference_et0
                .as_deref()
                .map(load_reference_et0)
                .transpose()
                .context("reading reference ET0")?;

            let plan = generator.generate(&plan_request, &snapshot, reference.as_ref())?;
            render_plan(&plan, output)?
        }
        Commands::Recommend {
            crop,
            area,
            weather,
            et0,
        } => {
            let snapshot = load_weather(&weather)
                .with_context(|| format!("reading weather {}", weather.display()))?;
            let today = snapshot.current();
            let et0 = et0.unwrap_or_else(|| {
                estimate_et0(
                    today.temp_c,
                    today.humidity_pct,
                    today.wind_speed_ms,
                    today.uv_index,
                )
            });

            let result = generator.recommend(&crop, area, &today, et0)?;
            render_recommendation(&result, output)?
        }
        Commands::Heat { weather, days } => {
            let snapshot = load_weather(&weather)
                .with_context(|| format!("reading weather {}", weather.display()))?;
            let alerts = generator
                .heat_alerts(&snapshot, days.unwrap_or(config.defaults.horizon_days))?;
            render_alerts(&alerts, output)?
        }
        Commands::Crops => render_tables(generator.tables(), output)?,
    };

    print!("{}", rendered);
    Ok(())
}
