//! Tunable constants for the constellation, cursor trail and parallax.
//!
//! Configuration documents are camelCase JSON. Every field is optional: a
//! document is layered over a base preset (`"preset": "drift"`, default
//! `classic`), so `{"links": {"distance": 140}}` is a complete config.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::color::Rgb;
use super::viewport::MAX_DEVICE_PIXEL_RATIO;

pub const PRESET_CLASSIC: &str = "classic";
pub const PRESET_DRIFT: &str = "drift";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstellationConfig {
    pub field: FieldConfig,
    pub links: LinkConfig,
    pub pointer: PointerConfig,
    pub particles: ParticleStyle,
    pub palette: Palette,
    pub trail: TrailConfig,
    pub parallax: ParallaxConfig,
    pub max_device_pixel_ratio: f32,
}

/// Seeding density and drift of the particle field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Viewport area (px²) per particle
    pub area_per_particle: f32,
    pub min_particles: u32,
    pub max_particles: u32,
    /// Velocity is drawn from `[-speed, speed]` px/frame per axis
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Distance past an edge before a particle wraps
    pub wrap_margin: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkConfig {
    /// Spatial grid cell size; must be >= `distance`
    pub cell_size: f32,
    pub distance: f32,
    pub strength: f32,
    pub max_opacity: f32,
    /// 0 = unlimited
    pub max_per_particle: u32,
    pub line_width: f32,
    /// Blend `lineA`/`lineB` by link strength instead of using `lineA` only
    pub mix_colors: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Raw,
    Smoothed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerConfig {
    /// Follower easing per frame, in (0, 1]; 1 tracks the raw pointer
    pub easing: f32,
    /// 0 disables repulsion
    pub repel_distance: f32,
    pub repel_force: f32,
    pub repel_source: PointerSource,
    pub link_distance: f32,
    /// Nearest particles linked to the pointer; 0 disables pointer links
    pub link_count: u32,
    pub link_strength: f32,
    /// Particles closer than this to the pointer use `particles.nearAlpha`
    pub proximity_distance: f32,
    pub glyph: bool,
    pub glyph_radius: f32,
    pub glyph_alpha: f32,
    pub glow_radius: f32,
    pub glow_alpha: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticleStyle {
    /// Halo radius as a multiple of particle radius; 0 disables halos
    pub halo_scale: f32,
    pub core_alpha: f32,
    pub near_alpha: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub line_a: Rgb,
    pub line_b: Rgb,
    pub dot: Rgb,
    pub pointer: Rgb,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    pub enabled: bool,
    /// Canvas element for the trail layer; created on mount when absent
    pub canvas_id: Option<String>,
    pub max_particles: u32,
    pub spawn_distance: f32,
    pub max_speed: f32,
    pub decay: f32,
    pub glow_scale: f32,
    pub dot_easing: f32,
    pub ring_easing: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParallaxConfig {
    pub enabled: bool,
    pub easing: f32,
    /// Per-axis offset in px for a pointer at the viewport edge, times two
    pub amplitude: [f32; 2],
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        ConstellationConfig::classic().field
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        ConstellationConfig::classic().links
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        ConstellationConfig::classic().pointer
    }
}

impl Default for ParticleStyle {
    fn default() -> Self {
        ConstellationConfig::classic().particles
    }
}

impl Default for Palette {
    fn default() -> Self {
        ConstellationConfig::classic().palette
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        ConstellationConfig::classic().trail
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ConstellationConfig::classic().parallax
    }
}

impl ConstellationConfig {
    /// Dense links with a two-tone gradient, pointer links and a pointer glyph.
    pub fn classic() -> Self {
        Self {
            field: FieldConfig {
                area_per_particle: 42_000.0,
                min_particles: 55,
                max_particles: 110,
                speed: 0.18,
                radius_min: 1.0,
                radius_max: 2.0,
                wrap_margin: 20.0,
            },
            links: LinkConfig {
                cell_size: 170.0,
                distance: 170.0,
                strength: 0.18,
                max_opacity: 0.18,
                max_per_particle: 3,
                line_width: 1.0,
                mix_colors: true,
            },
            pointer: PointerConfig {
                easing: 1.0,
                repel_distance: 0.0,
                repel_force: 0.65,
                repel_source: PointerSource::Smoothed,
                link_distance: 210.0,
                link_count: 7,
                link_strength: 0.28,
                proximity_distance: 0.0,
                glyph: true,
                glyph_radius: 2.4,
                glyph_alpha: 0.90,
                glow_radius: 26.0,
                glow_alpha: 0.55,
            },
            particles: ParticleStyle {
                halo_scale: 6.0,
                core_alpha: 0.88,
                near_alpha: 0.88,
            },
            palette: Palette {
                line_a: [122, 162, 255],
                line_b: [185, 140, 255],
                dot: [235, 242, 255],
                pointer: [126, 240, 216],
            },
            trail: TrailConfig {
                enabled: true,
                canvas_id: None,
                max_particles: 44,
                spawn_distance: 6.0,
                max_speed: 18.0,
                decay: 0.045,
                glow_scale: 3.2,
                dot_easing: 0.42,
                ring_easing: 0.18,
            },
            parallax: ParallaxConfig {
                enabled: true,
                easing: 0.08,
                amplitude: [40.0, 40.0],
            },
            max_device_pixel_ratio: MAX_DEVICE_PIXEL_RATIO,
        }
    }

    /// Sparser, slower links; particles shy away from an eased pointer.
    pub fn drift() -> Self {
        let classic = Self::classic();
        Self {
            field: FieldConfig {
                area_per_particle: 52_000.0,
                min_particles: 60,
                max_particles: 140,
                speed: 0.14,
                radius_min: 1.0,
                radius_max: 2.2,
                wrap_margin: 10.0,
            },
            links: LinkConfig {
                cell_size: 128.0,
                distance: 128.0,
                strength: 0.22,
                max_opacity: 0.22,
                max_per_particle: 0,
                line_width: 1.0,
                mix_colors: false,
            },
            pointer: PointerConfig {
                easing: 0.085,
                repel_distance: 140.0,
                repel_force: 0.65,
                repel_source: PointerSource::Smoothed,
                link_count: 0,
                // sqrt(240_000)
                proximity_distance: 489.898,
                glyph: false,
                ..classic.pointer
            },
            particles: ParticleStyle {
                halo_scale: 0.0,
                core_alpha: 0.55,
                near_alpha: 0.78,
            },
            palette: Palette {
                line_a: [150, 170, 255],
                line_b: [150, 170, 255],
                ..classic.palette
            },
            trail: TrailConfig {
                enabled: false,
                ..classic.trail
            },
            parallax: ParallaxConfig {
                enabled: true,
                easing: 0.085,
                amplitude: [36.0, 28.0],
            },
            max_device_pixel_ratio: MAX_DEVICE_PIXEL_RATIO,
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            PRESET_CLASSIC => Some(Self::classic()),
            PRESET_DRIFT => Some(Self::drift()),
            _ => None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let patch: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let Value::Object(mut patch) = patch else {
            return Err("config must be a JSON object".to_string());
        };

        let base = match patch.remove("preset") {
            None => Self::classic(),
            Some(Value::String(name)) => {
                Self::preset(&name).ok_or_else(|| format!("unknown preset: {}", name))?
            }
            Some(other) => return Err(format!("preset must be a string, got {}", other)),
        };

        let mut merged = serde_json::to_value(&base).map_err(|e| e.to_string())?;
        merge(&mut merged, Value::Object(patch));

        let config: Self = serde_json::from_value(merged).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let f = &self.field;
        if !(f.area_per_particle > 0.0) {
            return Err(format!("field.areaPerParticle must be > 0, got {}", f.area_per_particle));
        }
        if f.min_particles > f.max_particles {
            return Err(format!(
                "field.minParticles ({}) exceeds field.maxParticles ({})",
                f.min_particles, f.max_particles
            ));
        }
        if f.radius_min < 0.0 || f.radius_min > f.radius_max {
            return Err(format!(
                "invalid particle radius range {}..{}",
                f.radius_min, f.radius_max
            ));
        }
        if f.speed < 0.0 || f.wrap_margin < 0.0 {
            return Err("field.speed and field.wrapMargin must be >= 0".to_string());
        }

        let l = &self.links;
        if !(l.cell_size > 0.0) {
            return Err(format!("links.cellSize must be > 0, got {}", l.cell_size));
        }
        if l.distance < 0.0 || l.distance > l.cell_size {
            return Err(format!(
                "links.distance ({}) must be within 0..=links.cellSize ({})",
                l.distance, l.cell_size
            ));
        }

        let p = &self.pointer;
        check_easing("pointer.easing", p.easing)?;
        if p.repel_distance < 0.0 || p.link_distance < 0.0 || p.proximity_distance < 0.0 {
            return Err("pointer distances must be >= 0".to_string());
        }

        if self.trail.enabled {
            check_easing("trail.dotEasing", self.trail.dot_easing)?;
            check_easing("trail.ringEasing", self.trail.ring_easing)?;
            if !(self.trail.decay > 0.0) {
                return Err(format!("trail.decay must be > 0, got {}", self.trail.decay));
            }
        }
        if self.parallax.enabled {
            check_easing("parallax.easing", self.parallax.easing)?;
        }

        if !(self.max_device_pixel_ratio >= 1.0) {
            return Err(format!(
                "maxDevicePixelRatio must be >= 1, got {}",
                self.max_device_pixel_ratio
            ));
        }
        Ok(())
    }
}

fn check_easing(name: &str, v: f32) -> Result<(), String> {
    if v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(format!("{} must be in (0, 1], got {}", name, v))
    }
}

/// Recursive object merge; non-object values in `patch` replace `base`.
fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (k, v) in patch {
                match base.get_mut(&k) {
                    Some(slot) => merge(slot, v),
                    None => {
                        base.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(ConstellationConfig::classic().validate().is_ok());
        assert!(ConstellationConfig::drift().validate().is_ok());
        assert!(ConstellationConfig::preset("nebula").is_none());
    }

    #[test]
    fn empty_document_is_classic() {
        let cfg = ConstellationConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ConstellationConfig::classic());
    }

    #[test]
    fn patch_layers_over_named_preset() {
        let cfg = ConstellationConfig::from_json(
            r#"{"preset": "drift", "links": {"strength": 0.3}, "palette": {"dot": [1, 2, 3]}}"#,
        )
        .unwrap();
        assert_eq!(cfg.links.strength, 0.3);
        assert_eq!(cfg.links.cell_size, 128.0);
        assert_eq!(cfg.palette.dot, [1, 2, 3]);
        assert_eq!(cfg.pointer.repel_distance, 140.0);
    }

    #[test]
    fn link_distance_beyond_cell_is_rejected() {
        let err = ConstellationConfig::from_json(r#"{"links": {"distance": 200}}"#).unwrap_err();
        assert!(err.contains("links.distance"), "{}", err);
    }

    #[test]
    fn inverted_counts_and_bad_easing_are_rejected() {
        assert!(ConstellationConfig::from_json(
            r#"{"field": {"minParticles": 200, "maxParticles": 100}}"#
        )
        .is_err());
        assert!(ConstellationConfig::from_json(r#"{"pointer": {"easing": 0}}"#).is_err());
        assert!(ConstellationConfig::from_json(r#"{"preset": "nebula"}"#).is_err());
        assert!(ConstellationConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn json_round_trip_keeps_camel_case_keys() {
        let json = ConstellationConfig::drift().to_json();
        assert!(json.contains("areaPerParticle"));
        assert!(json.contains("\"repelSource\": \"smoothed\""));
        assert_eq!(ConstellationConfig::from_json(&json).unwrap(), ConstellationConfig::drift());
    }
}
