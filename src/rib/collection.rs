use super::{Rib, RibGeometry};
use crate::airfoil::generate::{AirfoilGenerator, Naca4Digit};
use crate::airfoil::Airfoil;
use crate::drawing::DrawingSink;
use crate::errors::{Result, RibError};
use itertools::Itertools;
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Airfoils by name, as referenced from rib tables
pub type AirfoilCatalog = BTreeMap<String, Airfoil>;

/// Tolerance used when an airfoil has to be generated from its designation
const GENERATED_TOL: f64 = 1e-5;

/// The outcome of drawing one rib
#[derive(Debug)]
pub struct RibReport {
    pub name: String,
    pub outcome: Result<RibGeometry>,
}

impl RibReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// An ordered set of ribs together with the airfoils they are cut from
#[derive(Debug, Default)]
pub struct RibCollection {
    ribs: Vec<Rib>,
    airfoils: AirfoilCatalog,
}

impl RibCollection {
    pub fn new(ribs: Vec<Rib>) -> RibCollection {
        RibCollection {
            ribs,
            airfoils: AirfoilCatalog::new(),
        }
    }

    pub fn ribs(&self) -> &[Rib] {
        &self.ribs
    }

    pub fn airfoils(&self) -> &AirfoilCatalog {
        &self.airfoils
    }

    #[cfg(test)]
    fn insert_airfoil(&mut self, name: impl Into<String>, airfoil: Airfoil) {
        self.airfoils.insert(name.into(), airfoil);
    }

    /// Every airfoil name referenced by the ribs, once each, in order of first use
    pub fn airfoil_names(&self) -> Vec<String> {
        self.ribs
            .iter()
            .flat_map(|r| r.airfoil.names())
            .unique()
            .map(String::from)
            .collect()
    }

    /// Loads each referenced airfoil from `<dir>/<name>.dat`. A missing file is a lookup error
    /// unless `generate_missing` is set, in which case a name reading as a NACA 4-digit
    /// designation is generated instead.
    pub fn read_unique_airfoils(&mut self, dir: &Path, generate_missing: bool) -> Result<()> {
        for name in self.airfoil_names() {
            let airfoil = load_airfoil(dir, &name, generate_missing)?;
            info!("loaded airfoil {} with {} points", name, airfoil.len());
            self.airfoils.insert(name, airfoil);
        }
        Ok(())
    }

    fn draw_one<S, F>(&self, rib: &Rib, create: &F) -> RibReport
    where
        S: DrawingSink,
        F: Fn(&str) -> Result<S>,
    {
        info!("drawing rib {}", rib.name);
        let outcome = rib.draft(&self.airfoils).and_then(|drafted| {
            let mut sink = create(&rib.name)?;
            drafted.save(&mut sink)
        });
        if let Err(e) = &outcome {
            error!("rib {} failed: {}", rib.name, e);
        }

        RibReport {
            name: rib.name.clone(),
            outcome,
        }
    }

    /// Draws every rib into its own sink made by `create` from the rib name. A failing rib is
    /// logged and reported without stopping the others.
    #[cfg(not(feature = "parallel"))]
    pub fn draw_each<S, F>(&self, create: F) -> Vec<RibReport>
    where
        S: DrawingSink,
        F: Fn(&str) -> Result<S>,
    {
        let reports = self
            .ribs
            .iter()
            .map(|rib| self.draw_one(rib, &create))
            .collect_vec();
        summarize(&reports);
        reports
    }

    /// Draws every rib into its own sink made by `create` from the rib name. A failing rib is
    /// logged and reported without stopping the others.
    #[cfg(feature = "parallel")]
    pub fn draw_each<S, F>(&self, create: F) -> Vec<RibReport>
    where
        S: DrawingSink,
        F: Fn(&str) -> Result<S> + Sync,
    {
        let reports: Vec<RibReport> = self
            .ribs
            .par_iter()
            .map(|rib| self.draw_one(rib, &create))
            .collect();
        summarize(&reports);
        reports
    }
}

fn summarize(reports: &[RibReport]) {
    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    info!(
        "drew {} of {} ribs",
        reports.len() - failed,
        reports.len()
    );
}

fn load_airfoil(dir: &Path, name: &str, generate_missing: bool) -> Result<Airfoil> {
    let path = dir.join(format!("{name}.dat"));
    if path.is_file() {
        return Airfoil::load(&path);
    }
    if !generate_missing {
        error!("no airfoil file at {}", path.display());
        return Err(RibError::lookup(name));
    }

    match Naca4Digit::from_designation(name) {
        Some(naca) => {
            warn!(
                "no file at {}, generating {} from its designation",
                path.display(),
                name
            );
            Ok(naca.generate(Some(GENERATED_TOL)))
        }
        None => Err(RibError::lookup(name)),
    }
}
