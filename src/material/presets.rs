//! Built-in material templates.

use super::types::{MaterialColor, MaterialConfig, PbrProperties};

/// Fixed catalog of material templates for vehicle-style product models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialPreset {
    /// Shiny car paint with a glossy clear coat.
    GlossyPaint,
    /// Flat paint, no clear coat.
    MattePaint,
    /// Metallic flake paint.
    MetallicPaint,
    /// Polished chrome.
    Chrome,
    /// Brushed aluminum alloy.
    AluminumAlloy,
    /// Seat leather.
    Leather,
    /// Seat fabric.
    Fabric,
    /// Dashboard plastic.
    Plastic,
    /// Clear glass.
    Glass,
    /// Dark tinted glass.
    TintedGlass,
    /// Tire rubber.
    Rubber,
    /// Carbon fiber weave.
    Carbon,
}

impl MaterialPreset {
    /// Every preset, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::GlossyPaint,
        Self::MattePaint,
        Self::MetallicPaint,
        Self::Chrome,
        Self::AluminumAlloy,
        Self::Leather,
        Self::Fabric,
        Self::Plastic,
        Self::Glass,
        Self::TintedGlass,
        Self::Rubber,
        Self::Carbon,
    ];

    /// Display name of the preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GlossyPaint => "GlossyPaint",
            Self::MattePaint => "MattePaint",
            Self::MetallicPaint => "MetallicPaint",
            Self::Chrome => "Chrome",
            Self::AluminumAlloy => "AluminumAlloy",
            Self::Leather => "Leather",
            Self::Fabric => "Fabric",
            Self::Plastic => "Plastic",
            Self::Glass => "Glass",
            Self::TintedGlass => "TintedGlass",
            Self::Rubber => "Rubber",
            Self::Carbon => "CarbonFiber",
        }
    }

    /// Look a preset up by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// Material template for this preset. Fields the preset does not
    /// mention keep their defaults.
    #[must_use]
    pub fn config(self) -> MaterialConfig {
        let base = PbrProperties::default();
        let (pbr, base_color) = match self {
            Self::GlossyPaint => (
                PbrProperties {
                    metallic: 0.8,
                    roughness: 0.2,
                    clear_coat: 1.0,
                    clear_coat_roughness: 0.1,
                    ..base
                },
                None,
            ),
            Self::MattePaint => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.8,
                    clear_coat: 0.0,
                    ..base
                },
                None,
            ),
            Self::MetallicPaint => (
                PbrProperties {
                    metallic: 0.9,
                    roughness: 0.3,
                    clear_coat: 0.8,
                    clear_coat_roughness: 0.15,
                    ..base
                },
                None,
            ),
            Self::Chrome => (
                PbrProperties {
                    metallic: 1.0,
                    roughness: 0.05,
                    reflectance: 1.0,
                    ..base
                },
                None,
            ),
            Self::AluminumAlloy => (
                PbrProperties {
                    metallic: 1.0,
                    roughness: 0.4,
                    reflectance: 0.9,
                    ..base
                },
                None,
            ),
            Self::Leather => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.6,
                    reflectance: 0.4,
                    ..base
                },
                None,
            ),
            Self::Fabric => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.9,
                    reflectance: 0.3,
                    ..base
                },
                None,
            ),
            Self::Plastic => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.5,
                    reflectance: 0.5,
                    ..base
                },
                None,
            ),
            Self::Glass => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.0,
                    reflectance: 0.5,
                    ..base
                },
                Some(MaterialColor::new(1.0, 1.0, 1.0, 0.3)),
            ),
            Self::TintedGlass => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.0,
                    reflectance: 0.5,
                    ..base
                },
                Some(MaterialColor::new(0.2, 0.2, 0.2, 0.5)),
            ),
            Self::Rubber => (
                PbrProperties {
                    metallic: 0.0,
                    roughness: 0.85,
                    reflectance: 0.35,
                    ..base
                },
                Some(MaterialColor::new(0.1, 0.1, 0.1, 1.0)),
            ),
            Self::Carbon => (
                PbrProperties {
                    metallic: 0.2,
                    roughness: 0.4,
                    anisotropy: 0.8,
                    ..base
                },
                Some(MaterialColor::new(0.05, 0.05, 0.05, 1.0)),
            ),
        };

        MaterialConfig {
            name: self.name().to_owned(),
            base_color: base_color.unwrap_or_default(),
            pbr,
            ..MaterialConfig::default()
        }
    }
}
