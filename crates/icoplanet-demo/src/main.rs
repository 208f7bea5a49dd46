//! Demo binary that generates an icosphere planet and reports on the mesh.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p icoplanet-demo -- --subdivisions 5 --strategy fbm`.
//! Add `--watch` to regenerate whenever the config file is edited.

use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use icoplanet_config::{CliArgs, Config};
use icoplanet_mesh::{MeshBuffers, PLANET_VERTEX_LAYOUT};
use icoplanet_planet::{MeshStats, Planet};
use tracing::{error, info, warn};

const WATCH_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let Some(config_dir) = args.config.clone().or_else(Config::default_dir) else {
        eprintln!("No config directory available; pass --config <DIR>");
        return ExitCode::FAILURE;
    };

    // Load or create config, then apply CLI overrides
    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    if let Err(e) = config.apply_cli_overrides(&args) {
        eprintln!("Invalid arguments: {e}");
        return ExitCode::FAILURE;
    }

    let log_dir = config_dir.join("logs");
    icoplanet_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut planet = Planet::new();
    match planet.regenerate(&config.planet) {
        Ok(mesh) => report(&mesh),
        Err(e) => {
            error!(error = %e, "planet generation failed");
            if !args.watch {
                return ExitCode::FAILURE;
            }
        }
    }

    if args.watch {
        watch(&config_dir, file_config, &args, &mut planet);
    }

    ExitCode::SUCCESS
}

/// Poll `config.ron` and regenerate when it changes. CLI overrides keep
/// precedence over edited values.
fn watch(config_dir: &Path, mut file_config: Config, args: &CliArgs, planet: &mut Planet) -> ! {
    info!(dir = %config_dir.display(), "watching config for changes");
    loop {
        thread::sleep(WATCH_INTERVAL);

        let changed = match file_config.reload(config_dir) {
            Ok(Some(changed)) => changed,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "config reload failed");
                continue;
            }
        };
        file_config = changed;

        let mut config = file_config.clone();
        if let Err(e) = config.apply_cli_overrides(args) {
            warn!(error = %e, "ignoring CLI overrides");
            config = file_config.clone();
        }

        if let Ok(mesh) = planet.regenerate(&config.planet) {
            report(&mesh);
        }
    }
}

fn report(mesh: &MeshBuffers) {
    let stats = MeshStats::of(mesh);
    let inward = mesh
        .positions
        .chunks_exact(3)
        .zip(mesh.normals.chunks_exact(3))
        .filter(|(tri, n)| n[0].dot(tri[0] + tri[1] + tri[2]) <= 0.0)
        .count();
    let upload_bytes = mesh.vertex_count() as u64 * PLANET_VERTEX_LAYOUT.array_stride;

    info!("Planet mesh: {stats}");
    info!(
        upload_bytes,
        indices = mesh.indices.len(),
        "vertex buffer ready"
    );
    if inward > 0 {
        warn!(inward, "triangles facing the planet center");
    }
}
