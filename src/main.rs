//! Route Cut Editor (Kommandozeile).
//!
//! Führt genau einen Schnitt auf einer Trasse eines FeatureSets aus und
//! schreibt das aktualisierte FeatureSet.

use anyhow::{bail, Context};
use clap::Parser;
use route_cut_editor::{
    write_feature_set, AppController, AppIntent, AppState, EditOutcome, EditorOptions, Point,
    RouteId,
};

/// Schneidet ein Teilstück aus einer Trasse heraus.
#[derive(Debug, Parser)]
#[command(name = "route-cut", version, about)]
struct Cli {
    /// FeatureSet-JSON mit den Trassen
    #[arg(long)]
    input: String,
    /// OID der zu bearbeitenden Trasse
    #[arg(long)]
    route: u64,
    /// Index des Parts (Segment-Kandidat) innerhalb der Trasse
    #[arg(long)]
    segment: usize,
    /// Erster Schnittpunkt als `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: Point,
    /// Zweiter Schnittpunkt als `x,y`
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: Point,
    /// Zieldatei; ohne Angabe wird auf stdout geschrieben
    #[arg(long)]
    output: Option<String>,
    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("'{value}' ist kein Punkt der Form x,y"))?;
    let parse = |part: &str| -> Result<f64, String> {
        let value = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("'{part}' ist keine Zahl: {e}"))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("'{part}' ist keine endliche Koordinate"))
        }
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Route Cut Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    let intents = [
        AppIntent::LoadRoutesRequested {
            path: cli.input.clone(),
        },
        AppIntent::RouteClicked {
            route_id: RouteId(cli.route),
        },
        AppIntent::SegmentPicked { index: cli.segment },
        AppIntent::MapClicked {
            world_pos: cli.from,
        },
        AppIntent::MapClicked { world_pos: cli.to },
    ];
    for intent in intents {
        controller
            .handle_intent(&mut state, intent.clone())
            .with_context(|| format!("{intent:?} fehlgeschlagen"))?;
    }

    match &state.last_outcome {
        Some(EditOutcome::Committed(_)) => {}
        _ => bail!("Schnitt nicht ausgeführt: {}", state.status_text()),
    }

    match cli.output {
        Some(path) => controller.handle_intent(
            &mut state,
            AppIntent::SaveRoutesRequested { path: Some(path) },
        )?,
        None => println!("{}", write_feature_set(state.layer.routes())?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_with_negative_coordinates() {
        assert_eq!(
            parse_point("-122.41, 37.80").unwrap(),
            Point::new(-122.41, 37.80)
        );
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(parse_point("NaN,0").is_err());
        assert!(parse_point("1,inf").is_err());
        assert!(parse_point("-infinity, 2").is_err());
    }

    #[test]
    fn cli_accepts_negative_points() {
        let cli = Cli::try_parse_from([
            "route-cut",
            "--input",
            "routes.json",
            "--route",
            "1",
            "--segment",
            "0",
            "--from",
            "-122.4118,37.8039",
            "--to",
            "-122.4117,37.8039",
        ])
        .unwrap();

        assert_eq!(cli.route, 1);
        assert_eq!(cli.from, Point::new(-122.4118, 37.8039));
        assert!(cli.output.is_none());
    }
}
