use std::fs;

use constellation_engine::domain::config::ConstellationConfig;

fn load(name: &str) -> ConstellationConfig {
    let json = fs::read_to_string(format!("presets/{}.json", name))
        .unwrap_or_else(|e| panic!("presets/{}.json should exist: {}", name, e));
    ConstellationConfig::from_json(&json).unwrap_or_else(|e| panic!("{}.json should parse: {}", name, e))
}

#[test]
fn shipped_presets_match_built_ins() {
    assert_eq!(load("classic"), ConstellationConfig::classic());
    assert_eq!(load("drift"), ConstellationConfig::drift());
}

#[test]
fn shipped_presets_keep_links_inside_one_cell() {
    for name in ["classic", "drift"] {
        let cfg = load(name);
        assert!(cfg.links.distance <= cfg.links.cell_size, "{}", name);
        assert!(cfg.field.min_particles <= cfg.field.max_particles, "{}", name);
    }
}

#[test]
fn preset_json_export_parses_back() {
    let json = constellation_engine::preset_json("drift").expect("drift is built in");
    assert_eq!(ConstellationConfig::from_json(&json).unwrap(), ConstellationConfig::drift());
    assert!(constellation_engine::preset_json("aurora").is_none());
}
