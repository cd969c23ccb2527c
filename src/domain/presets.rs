//! Gravity preset content. The built-in set mirrors the UI buttons
//! (Tierra/Luna/Marte/Júpiter); a custom bundle can replace it at runtime
//! via JSON, same flow as any other content the JS side ships to the engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    GRAVITY_EARTH, GRAVITY_JUPITER, GRAVITY_MARS, GRAVITY_MAX, GRAVITY_MIN, GRAVITY_MOON,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GravityPreset {
    pub key: String,
    pub label: String,
    pub gravity: f64,
}

#[derive(Deserialize)]
struct BundleRoot {
    presets: Vec<GravityPreset>,
}

fn preset(key: &str, label: &str, gravity: f64) -> GravityPreset {
    GravityPreset {
        key: key.to_string(),
        label: label.to_string(),
        gravity,
    }
}

#[derive(Clone)]
pub struct PresetRegistry {
    presets: Vec<GravityPreset>,
    key_to_index: HashMap<String, usize>,
}

impl PresetRegistry {
    pub fn from_builtin() -> Self {
        Self::from_presets(vec![
            preset("Earth", "Tierra", GRAVITY_EARTH),
            preset("Moon", "Luna", GRAVITY_MOON),
            preset("Mars", "Marte", GRAVITY_MARS),
            preset("Jupiter", "Júpiter", GRAVITY_JUPITER),
        ])
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if bundle.presets.is_empty() {
            return Err("preset bundle has no presets".to_string());
        }
        for p in &bundle.presets {
            if !p.gravity.is_finite() {
                return Err(format!("preset '{}' has a non-finite gravity", p.key));
            }
        }
        // Gravity values are content, but they still have to fit the slider.
        let presets = bundle
            .presets
            .into_iter()
            .map(|mut p| {
                p.gravity = p.gravity.clamp(GRAVITY_MIN, GRAVITY_MAX);
                p
            })
            .collect();
        Ok(Self::from_presets(presets))
    }

    fn from_presets(presets: Vec<GravityPreset>) -> Self {
        let mut key_to_index = HashMap::new();
        for (i, p) in presets.iter().enumerate() {
            key_to_index.insert(p.key.clone(), i);
        }
        Self { presets, key_to_index }
    }

    pub fn preset_count(&self) -> usize {
        self.presets.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_to_index.contains_key(key)
    }

    pub fn gravity_for(&self, key: &str) -> Option<f64> {
        self.key_to_index.get(key).map(|&i| self.presets[i].gravity)
    }

    /// Reverse lookup, used to keep the preset label honest after slider moves.
    pub fn key_for_gravity(&self, gravity: f64) -> Option<&str> {
        self.presets
            .iter()
            .find(|p| p.gravity == gravity)
            .map(|p| p.key.as_str())
    }

    pub fn manifest_json(&self) -> String {
        serde_json::to_string(&self.presets).unwrap_or_else(|_| "[]".to_string())
    }
}
