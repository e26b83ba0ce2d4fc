//! Run configuration and the rib table it points to.

use crate::errors::{Result, RibError};
use crate::rib::{
    AirfoilSelection, BeamHole, RearSpar, Rib, RibCollection, Stringer, StringerDims,
    StringerSite,
};
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Number of header rows at the top of a rib table
const HEADER_ROWS: usize = 2;

/// Columns every rib row must have before the optional stringer positions
const FIXED_COLUMNS: usize = 14;

fn default_text_height() -> f64 {
    5.0
}

/// Settings shared by every rib in a run. Paths are resolved against the directory holding the
/// configuration file.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub rib_file: PathBuf,
    pub airfoil_dir: PathBuf,
    pub output_dir: PathBuf,
    pub plank_thickness: f64,
    pub ribcap_thickness: f64,
    pub stringer: StringerDims,

    /// Height of the rib name label
    #[serde(default = "default_text_height")]
    pub text_height: f64,

    /// Also write the derived geometry of each rib as JSON next to its drawing
    #[serde(default)]
    pub write_geometry_json: bool,

    /// Generate NACA 4-digit sections named in the rib table when their coordinate file is
    /// missing. Off unless asked for, so a missing file is reported.
    #[serde(default)]
    pub generate_missing_naca: bool,
}

impl Config {
    pub fn from_json(text: &str, base_dir: &Path) -> Result<Config> {
        let mut config: Config = serde_json::from_str(text)?;
        config.rib_file = base_dir.join(&config.rib_file);
        config.airfoil_dir = base_dir.join(&config.airfoil_dir);
        config.output_dir = base_dir.join(&config.output_dir);
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let config = Config::from_json(&text, base_dir)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reads and parses the rib table named by this configuration
    pub fn read_rib_specs(&self) -> Result<RibCollection> {
        let text = std::fs::read_to_string(&self.rib_file)?;
        let ribs = parse_rib_table(&text, self)?;
        info!("read {} ribs from {}", ribs.len(), self.rib_file.display());
        Ok(RibCollection::new(ribs))
    }
}

struct Row<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    fn number(&self, index: usize, column: &str) -> Result<f64> {
        let field = self.fields[index];
        field.parse::<f64>().map_err(|_| {
            RibError::format(self.line, format!("{column} '{field}' is not a number"))
        })
    }

    fn positive(&self, index: usize, column: &str) -> Result<f64> {
        let value = self.number(index, column)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(RibError::format(
                self.line,
                format!("{column} must be positive, got {value}"),
            ))
        }
    }

    fn airfoil(&self) -> Result<AirfoilSelection> {
        let first = self.fields[1];
        let second = self.fields[2];
        if first.is_empty() {
            return Err(RibError::format(self.line, "airfoil0 is empty"));
        }
        if second.is_empty() {
            return Ok(AirfoilSelection::Single(first.to_string()));
        }

        Ok(AirfoilSelection::Mixed {
            first: first.to_string(),
            second: second.to_string(),
            ratio: self.number(3, "mix_ratio")?,
        })
    }

    fn stringers(&self, dims: StringerDims) -> Result<Vec<Stringer>> {
        self.fields[FIXED_COLUMNS..]
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.is_empty())
            .map(|(i, _)| {
                let position = self.number(FIXED_COLUMNS + i, "stringer_position")?;
                Ok(Stringer::new(dims, StringerSite::from_signed(position)))
            })
            .collect()
    }

    fn to_rib(&self, config: &Config) -> Result<Rib> {
        Ok(Rib {
            name: self.fields[0].to_string(),
            airfoil: self.airfoil()?,
            chord: self.positive(4, "chord")?,
            aoa: self.number(5, "aoa")?,
            plank_thickness: config.plank_thickness,
            ribcap_thickness: config.ribcap_thickness,
            upper_plank_end_x: self.number(11, "upper_plank_end_x")?,
            lower_plank_end_x: self.number(12, "lower_plank_end_x")?,
            stringers: self.stringers(config.stringer)?,
            beam_hole: BeamHole {
                x: self.number(6, "beam_hole_x")?,
                diameter: self.positive(7, "beam_diameter")?,
            },
            rearspar: RearSpar::new(
                self.positive(10, "rearspar.diameter")?,
                self.number(8, "rearspar.dist")?,
                self.number(9, "rearspar.angle")?,
            ),
            bracing_hole_pos: self.number(13, "bracing_hole_pos")?,
        })
    }
}

/// Parses a comma separated rib table. The first two rows are headers. Each following row holds
/// `name, airfoil0, airfoil1, mix_ratio, chord, aoa, beam_hole_x, beam_diameter, rearspar.dist,
/// rearspar.angle, rearspar.diameter, upper_plank_end_x, lower_plank_end_x, bracing_hole_pos`
/// and then any number of signed stringer positions. Blank rows and empty stringer cells are
/// skipped. Fields are split on every comma; quoted fields are not supported.
pub fn parse_rib_table(text: &str, config: &Config) -> Result<Vec<Rib>> {
    let mut ribs = Vec::new();
    for (i, line) in text.lines().enumerate().skip(HEADER_ROWS) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }

        let row = Row {
            line: i + 1,
            fields,
        };
        if row.fields.len() < FIXED_COLUMNS {
            return Err(RibError::format(
                row.line,
                format!(
                    "expected at least {FIXED_COLUMNS} columns, found {}",
                    row.fields.len()
                ),
            ));
        }

        let rib = row.to_rib(config)?;
        debug!("line {}: rib {} on {:?}", row.line, rib.name, rib.airfoil);
        ribs.push(rib);
    }
    Ok(ribs)
}
