use std::io::Read;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use netconfig_intel::model::{Config, OutputFormat};
use netconfig_intel::present::{export_text, ResponseView};
use netconfig_intel::render::{build_scene, render_svg};
use netconfig_intel::service::{analyze_response, compute_positions};

fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Raw answer text: from a file argument, or stdin
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let parsed = analyze_response(&raw);
    let positions = compute_positions(&parsed.topology.nodes, parsed.topology.layout);
    let scene = build_scene(&parsed.topology, &positions, &parsed.devices);

    match config.format {
        OutputFormat::Text => {
            let view = ResponseView::new(&parsed, Some(scene));
            tracing::info!(
                config_type = %view.header,
                steps = view.steps.len(),
                "Analysis ready"
            );
            println!("{}", export_text(&parsed, Utc::now()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        OutputFormat::Svg => {
            println!("{}", render_svg(&scene));
        }
    }

    Ok(())
}
