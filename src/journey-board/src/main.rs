//! JourneyBoard — renders the embedded product-journey catalog as diagram
//! data (nodes and edges) for an external renderer, or as a per-step detail
//! panel, on stdout as JSON. Logs go to stderr.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{anyhow, bail};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use journey_core::{AppConfig, Catalog};
use journey_events::event_hint;
use journey_layout::LayoutEngine;

#[derive(Parser, Debug)]
#[command(name = "journey-board")]
#[command(about = "Static journey diagram: phase columns, role lanes, step chain")]
#[command(version)]
struct Cli {
    /// Comma-separated role ids to show (default: all roles)
    #[arg(long, value_delimiter = ',', env = "JOURNEY_BOARD__ROLES")]
    roles: Option<Vec<String>>,

    /// Print the detail panel for a single step instead of the diagram
    #[arg(long)]
    step: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

/// Detail-panel payload for one step: what the UI shows on click.
#[derive(Debug, Serialize)]
struct StepDetail<'a> {
    step: &'a journey_core::types::Step,
    phase: &'a str,
    role: &'a str,
    events: &'static str,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journey_board=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let catalog = Arc::new(Catalog::selected_mvp()?);

    if let Some(step_id) = &cli.step {
        let detail = describe_step(&catalog, step_id)?;
        print_json(&detail, cli.pretty)?;
        return Ok(());
    }

    let active = active_roles(&catalog, cli.roles)?;
    let engine = LayoutEngine::new(catalog, config.layout);
    let diagram = engine.compute(&active)?;

    info!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "Diagram ready"
    );

    print_json(&diagram, cli.pretty)
}

/// Resolves the CLI role filter against the catalog, defaulting to all roles.
fn active_roles(catalog: &Catalog, roles: Option<Vec<String>>) -> anyhow::Result<HashSet<String>> {
    match roles {
        Some(ids) => {
            for id in &ids {
                if catalog.role(id).is_none() {
                    bail!("Unknown role: {}", id);
                }
            }
            Ok(ids.into_iter().collect())
        }
        None => Ok(catalog.roles().iter().map(|r| r.id.clone()).collect()),
    }
}

fn describe_step<'a>(catalog: &'a Catalog, step_id: &str) -> anyhow::Result<StepDetail<'a>> {
    let step = catalog
        .step(step_id)
        .ok_or_else(|| anyhow!("Unknown step: {}", step_id))?;
    let phase = catalog
        .phase(&step.phase)
        .ok_or_else(|| anyhow!("Step {} references unknown phase", step_id))?;
    let role = catalog
        .role(&step.role)
        .ok_or_else(|| anyhow!("Step {} references unknown role", step_id))?;

    Ok(StepDetail {
        step,
        phase: &phase.name,
        role: &role.name,
        events: event_hint(step),
    })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_roles_defaults_to_all() {
        let catalog = Catalog::selected_mvp().unwrap();
        let active = active_roles(&catalog, None).unwrap();
        assert_eq!(active.len(), 4);
        assert!(active.contains("OPS"));
    }

    #[test]
    fn test_active_roles_rejects_unknown_id() {
        let catalog = Catalog::selected_mvp().unwrap();
        let err = active_roles(&catalog, Some(vec!["AP".to_string(), "XX".to_string()]));
        assert!(err.is_err());
    }

    #[test]
    fn test_describe_step_includes_event_hint() {
        let catalog = Catalog::selected_mvp().unwrap();
        let detail = describe_step(&catalog, "s17").unwrap();
        assert_eq!(detail.phase, "Offer");
        assert_eq!(detail.role, "AuPair");
        assert_eq!(detail.events, "offer.accepted → match.committed");
    }

    #[test]
    fn test_describe_unknown_step_fails() {
        let catalog = Catalog::selected_mvp().unwrap();
        assert!(describe_step(&catalog, "s99").is_err());
    }
}
