use std::collections::HashMap;

use super::presets::MaterialPreset;
use super::types::{clamp01, MaterialColor, MaterialConfig, PbrProperties, TextureSlot};

/// Per-part material store.
///
/// Keys are model part names (e.g. `Body`, `Wheels`). Writing to a part
/// that has no entry yet starts from [`MaterialConfig::default`]. The
/// platform layer reads these values and builds its own material instances.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: HashMap<String, MaterialConfig>,
}

impl MaterialLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the material of `part`.
    pub fn set_material(&mut self, part: &str, config: MaterialConfig) {
        let _ = self.materials.insert(part.to_owned(), config);
    }

    /// Material of `part`, if one was set.
    #[must_use]
    pub fn material(&self, part: &str) -> Option<&MaterialConfig> {
        self.materials.get(part)
    }

    /// Whether `part` has a material.
    #[must_use]
    pub fn has_material(&self, part: &str) -> bool {
        self.materials.contains_key(part)
    }

    fn entry(&mut self, part: &str) -> &mut MaterialConfig {
        self.materials.entry(part.to_owned()).or_default()
    }

    /// Set the base color of `part` (components clamped to `[0, 1]`).
    pub fn set_base_color(&mut self, part: &str, color: MaterialColor) {
        self.entry(part).base_color =
            MaterialColor::clamped(color.r, color.g, color.b, color.a);
    }

    /// Replace all shading scalars of `part` (clamped to `[0, 1]`).
    pub fn set_pbr_properties(&mut self, part: &str, pbr: PbrProperties) {
        self.entry(part).pbr = pbr.clamped();
    }

    /// Set the metallic factor of `part`.
    pub fn set_metallic(&mut self, part: &str, metallic: f32) {
        self.entry(part).pbr.metallic = clamp01(metallic);
    }

    /// Set the roughness of `part`.
    pub fn set_roughness(&mut self, part: &str, roughness: f32) {
        self.entry(part).pbr.roughness = clamp01(roughness);
    }

    /// Set the clear-coat strength and its roughness for `part`.
    pub fn set_clear_coat(&mut self, part: &str, clear_coat: f32, roughness: f32) {
        let pbr = &mut self.entry(part).pbr;
        pbr.clear_coat = clamp01(clear_coat);
        pbr.clear_coat_roughness = clamp01(roughness);
    }

    /// Assign a texture path to a slot of `part`.
    pub fn set_texture(&mut self, part: &str, slot: TextureSlot, path: &str) {
        path.clone_into(self.entry(part).texture_mut(slot));
    }

    /// Texture path of a slot of `part` (empty when unset or unknown part).
    #[must_use]
    pub fn texture(&self, part: &str, slot: TextureSlot) -> String {
        self.materials
            .get(part)
            .map(|config| config.texture(slot).to_owned())
            .unwrap_or_default()
    }

    /// Apply a preset template to `part`, naming it `"{part}_{preset}"`.
    pub fn apply_preset(&mut self, part: &str, preset: MaterialPreset) {
        let mut config = preset.config();
        config.name = format!("{part}_{}", preset.name());
        log::debug!("Applied material preset {} to '{part}'", preset.name());
        self.set_material(part, config);
    }

    /// Set the same base color on several parts.
    pub fn set_color_for_parts<S: AsRef<str>>(&mut self, parts: &[S], color: MaterialColor) {
        for part in parts {
            self.set_base_color(part.as_ref(), color);
        }
    }

    /// Remove every material.
    pub fn clear(&mut self) {
        self.materials.clear();
    }

    /// Names of all parts with a material, sorted.
    #[must_use]
    pub fn part_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.materials.keys().cloned().collect();
        names.sort();
        names
    }
}
