use log::{error, info};
use ribdraw_rs::config::Config;
use ribdraw_rs::drawing::dxf::DxfSink;
use ribdraw_rs::rib::RibGeometry;
use ribdraw_rs::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = "data/config/config.json";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    match run(Path::new(&config_path)) {
        Ok(0) => {
            info!("process successfully completed");
            ExitCode::SUCCESS
        }
        Ok(failed) => {
            error!("{} rib(s) could not be drawn", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Draws every rib in the configured table and returns the number of ribs which failed
fn run(config_path: &Path) -> Result<usize> {
    let config = Config::load(config_path)?;
    let mut ribs = config.read_rib_specs()?;
    ribs.read_unique_airfoils(&config.airfoil_dir, config.generate_missing_naca)?;
    std::fs::create_dir_all(&config.output_dir)?;

    let reports = ribs.draw_each(|name| {
        let path = config.output_dir.join(format!("{name}.dxf"));
        Ok(DxfSink::create(path).with_text_height(config.text_height))
    });

    if config.write_geometry_json {
        for geometry in reports.iter().filter_map(|r| r.outcome.as_ref().ok()) {
            write_geometry(geometry, &config.output_dir.join(format!("{}.json", geometry.name)))?;
        }
    }

    Ok(reports.iter().filter(|r| !r.is_ok()).count())
}

fn write_geometry(geometry: &RibGeometry, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), geometry)?;
    Ok(())
}
