use std::path::PathBuf;

use cell_topology::{write_sites, ConfigLoader, OutputFormat, TopologyConfig};

fn layout_loader() -> ConfigLoader {
    ConfigLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn layout_path(name: &str) -> PathBuf {
    PathBuf::from("layouts").join(name)
}

#[test]
fn loader_reads_three_tier_fixture() {
    let config = layout_loader()
        .load(layout_path("three_tier.yaml"))
        .expect("layout parses");

    assert_eq!(config.name, "three_tier");
    assert_eq!(config.cell_radius, 200.0);
    assert_eq!(config.expected_sites().unwrap(), 37);

    let sites = config.generate().unwrap();
    assert_eq!(sites.len(), config.expected_sites().unwrap());
}

#[test]
fn loader_applies_defaults_for_missing_sections() {
    let config = layout_loader()
        .load(layout_path("single_tier.yaml"))
        .unwrap();

    assert_eq!(config.tiers, 1);
    assert_eq!(config.output.format, OutputFormat::Csv);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.generate().unwrap().len(), 7);
}

#[test]
fn loader_rejects_invalid_radius() {
    let err = layout_loader()
        .load(layout_path("bad_radius.yaml"))
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("bad_radius.yaml"), "{message}");
    assert!(message.contains("invalid configuration"), "{message}");
}

#[test]
fn loader_reports_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new(temp.path())
        .load("missing.yaml")
        .unwrap_err();
    assert!(format!("{err:#}").contains("missing.yaml"));
}

#[test]
fn written_config_loads_back_and_generates() {
    let temp = tempfile::tempdir().unwrap();
    let config = TopologyConfig {
        name: "dense_urban".into(),
        cell_radius: 75.0,
        tiers: 2,
        ..TopologyConfig::default()
    };
    config.to_yaml(temp.path().join("dense.yaml")).unwrap();

    let loaded = ConfigLoader::new(temp.path()).load("dense.yaml").unwrap();
    assert_eq!(loaded, config);

    let sites = loaded.generate().unwrap();
    let mut out = Vec::new();
    write_sites(&sites, OutputFormat::Csv, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1 + 19);
    assert!(text.starts_with("index,tier,x,y\n0,0,0.0,0.0\n1,1,150.0,0.0\n"));
}
