use dxf::entities::EntityType;
use dxf::Drawing;
use ribdraw_rs::airfoil::generate::{AirfoilGenerator, Naca4Digit};
use ribdraw_rs::airfoil::Surface;
use ribdraw_rs::config::Config;
use ribdraw_rs::drawing::dxf::DxfSink;
use ribdraw_rs::drawing::{Primitive, RecordingSink};
use ribdraw_rs::RibError;
use std::fmt::Write as _;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const RIB_TABLE: &str = "\
name,airfoil0,airfoil1,mix_ratio,chord,aoa,beam_hole_x,beam_diameter,rearspar,,,plank_end,,bracing,stringers
,,,,,,,,dist,angle,diameter,upper,lower,pos,
R1,testfoil,,0,200,2,0.3,10,30,6,10,0.25,0.2,0.4,,
R2,testfoil,naca0009,0.5,180,1,0.3,10,30,6,10,0.25,0.2,0.5,0.5,-0.6
R3,testfoil,,0,200,2,1.4,10,30,6,10,0.25,0.2,0.4,
";

fn config_json(generate_missing_naca: bool) -> String {
    format!(
        r#"{{
            "rib_file": "ribs.csv",
            "airfoil_dir": "airfoils",
            "output_dir": "figure",
            "plank_thickness": 2.0,
            "ribcap_thickness": 1.0,
            "stringer": {{
                "tan_thickness": 1.0,
                "tan_width": 10.0,
                "norm_thickness": 2.0,
                "norm_width": 4.0
            }},
            "text_height": 4.0,
            "generate_missing_naca": {generate_missing_naca}
        }}"#
    )
}

/// A coordinate file for a NACA 0012 section, in the usual header plus two column layout
fn dat_file() -> String {
    let airfoil = Naca4Digit::new(0.12, 1.0, 0.0, 0.0).generate(Some(1e-5));
    let mut text = String::from("TESTFOIL\n");
    for p in airfoil.get_points(Surface::All) {
        writeln!(text, "  {:.12}  {:.12}", p.x, p.y).unwrap();
    }
    text
}

/// Lays out a configuration directory under the system temp directory
fn workspace(name: &str, generate_missing_naca: bool) -> PathBuf {
    let root = std::env::temp_dir().join(format!("ribdraw-e2e-{name}"));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("airfoils")).unwrap();
    std::fs::write(root.join("config.json"), config_json(generate_missing_naca)).unwrap();
    std::fs::write(root.join("ribs.csv"), RIB_TABLE).unwrap();
    std::fs::write(root.join("airfoils").join("testfoil.dat"), dat_file()).unwrap();
    root
}

#[derive(Default, Debug, PartialEq)]
struct Counts {
    polylines: usize,
    circles: usize,
    texts: usize,
}

fn count_dxf(path: &Path) -> Counts {
    let bytes = std::fs::read(path).unwrap();
    let drawing = Drawing::load(&mut Cursor::new(bytes)).unwrap();
    let mut counts = Counts::default();
    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::LwPolyline(_) => counts.polylines += 1,
            EntityType::Circle(_) => counts.circles += 1,
            EntityType::Text(_) => counts.texts += 1,
            other => panic!("unexpected entity {:?}", other),
        }
    }
    counts
}

#[test]
fn test_rib_table_to_dxf_files() {
    let root = workspace("dxf", true);
    let config = Config::load(root.join("config.json")).unwrap();
    let mut ribs = config.read_rib_specs().unwrap();
    assert_eq!(3, ribs.ribs().len());

    ribs.read_unique_airfoils(&config.airfoil_dir, config.generate_missing_naca).unwrap();
    assert_eq!(2, ribs.airfoils().len());

    std::fs::create_dir_all(&config.output_dir).unwrap();
    let reports = ribs.draw_each(|name| {
        Ok(DxfSink::create(config.output_dir.join(format!("{name}.dxf"))).with_text_height(4.0))
    });

    let ok: Vec<bool> = reports.iter().map(|r| r.is_ok()).collect();
    assert_eq!(vec![true, true, false], ok);
    assert!(matches!(
        reports[2].outcome,
        Err(RibError::GeometryDegenerate(_))
    ));

    // Wing outline, chord line, rib outline, four crosshair lines; beam, spar and two bracing
    // holes; the name label
    assert_eq!(
        Counts {
            polylines: 7,
            circles: 4,
            texts: 1
        },
        count_dxf(&config.output_dir.join("R1.dxf"))
    );

    // Two stringer notches and a single bracing hole
    assert_eq!(
        Counts {
            polylines: 9,
            circles: 3,
            texts: 1
        },
        count_dxf(&config.output_dir.join("R2.dxf"))
    );

    assert!(!config.output_dir.join("R3.dxf").exists());
}

#[test]
fn test_r1_primitive_order() {
    let root = workspace("recording", true);
    let config = Config::load(root.join("config.json")).unwrap();
    let mut ribs = config.read_rib_specs().unwrap();
    ribs.read_unique_airfoils(&config.airfoil_dir, config.generate_missing_naca).unwrap();

    let r1 = &ribs.ribs()[0];
    let mut sink = RecordingSink::new();
    let geometry = r1.draw(ribs.airfoils(), &mut sink).unwrap();

    assert_eq!("R1", geometry.name);
    assert!(sink.primitives[..3]
        .iter()
        .all(|p| matches!(p, Primitive::Polyline { .. })));
    assert!(matches!(sink.primitives[3], Primitive::Circle { .. }));
    assert!(matches!(sink.primitives[6], Primitive::Text { .. }));
    assert!(matches!(sink.primitives[7], Primitive::Circle { .. }));
    assert_eq!(12, sink.primitives.len());
    assert_eq!(
        0,
        sink.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { points } if points.len() == 8))
            .count()
    );

    // The beam hole sits inside the section at 30% of the chord
    let beam = geometry.beam_hole_center;
    assert!((beam.x - 60.0).abs() < 1e-9);
    assert!(beam.y > -10.0 && beam.y < 20.0);
}

#[test]
fn test_missing_airfoil_stops_before_drawing() {
    let root = workspace("missing", true);
    std::fs::remove_file(root.join("airfoils").join("testfoil.dat")).unwrap();
    let config = Config::load(root.join("config.json")).unwrap();
    let mut ribs = config.read_rib_specs().unwrap();

    assert!(matches!(
        ribs.read_unique_airfoils(&config.airfoil_dir, config.generate_missing_naca),
        Err(RibError::Lookup(name)) if name == "testfoil"
    ));
}

#[test]
fn test_missing_naca_file_is_not_generated_by_default() {
    let root = workspace("strict", false);
    let config = Config::load(root.join("config.json")).unwrap();
    assert!(!config.generate_missing_naca);
    let mut ribs = config.read_rib_specs().unwrap();

    assert!(matches!(
        ribs.read_unique_airfoils(&config.airfoil_dir, config.generate_missing_naca),
        Err(RibError::Lookup(name)) if name == "naca0009"
    ));
}

#[test]
fn test_sample_data_draws_from_coordinate_files() {
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/config/config.json");
    let config = Config::load(config_path).unwrap();
    assert!(!config.generate_missing_naca);

    let mut ribs = config.read_rib_specs().unwrap();
    ribs.read_unique_airfoils(&config.airfoil_dir, false).unwrap();

    let reports = ribs.draw_each(|_| Ok(RecordingSink::new()));
    assert!(!reports.is_empty());
    for report in reports.iter() {
        assert!(report.is_ok(), "{} failed: {:?}", report.name, report.outcome);
    }
}
