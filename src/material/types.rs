//! Material configuration values.

/// Clamp a material scalar to `[0, 1]`.
#[inline]
#[must_use]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialColor {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha (opacity).
    pub a: f32,
}

impl MaterialColor {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Build a color from raw components (not clamped).
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color with every component clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(clamp01(r), clamp01(g), clamp01(b), clamp01(a))
    }

    /// Components as `[r, g, b, a]`.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for MaterialColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Physically-based shading scalars, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PbrProperties {
    /// 0 = dielectric, 1 = metal.
    pub metallic: f32,
    /// 0 = mirror smooth, 1 = fully rough.
    pub roughness: f32,
    /// Specular reflectance at normal incidence.
    pub reflectance: f32,
    /// Clear-coat layer strength.
    pub clear_coat: f32,
    /// Roughness of the clear-coat layer.
    pub clear_coat_roughness: f32,
    /// Anisotropic highlight strength.
    pub anisotropy: f32,
}

impl Default for PbrProperties {
    fn default() -> Self {
        Self {
            metallic: 0.0,
            roughness: 0.5,
            reflectance: 0.5,
            clear_coat: 0.0,
            clear_coat_roughness: 0.0,
            anisotropy: 0.0,
        }
    }
}

impl PbrProperties {
    /// Copy with every scalar clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            metallic: clamp01(self.metallic),
            roughness: clamp01(self.roughness),
            reflectance: clamp01(self.reflectance),
            clear_coat: clamp01(self.clear_coat),
            clear_coat_roughness: clamp01(self.clear_coat_roughness),
            anisotropy: clamp01(self.anisotropy),
        }
    }
}

/// Texture slots a material can reference.
///
/// `Metallic` and `Roughness` share one packed metallic-roughness texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Albedo / base color map.
    BaseColor,
    /// Tangent-space normal map.
    Normal,
    /// Metallic channel of the metallic-roughness map.
    Metallic,
    /// Roughness channel of the metallic-roughness map.
    Roughness,
    /// Ambient occlusion map.
    AmbientOcclusion,
    /// Emissive map.
    Emissive,
}

/// Complete per-part material description.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialConfig {
    /// Display name.
    pub name: String,
    /// Base color multiplier.
    pub base_color: MaterialColor,
    /// Shading scalars.
    pub pbr: PbrProperties,
    /// Base color texture path (empty when unset).
    pub base_color_texture: String,
    /// Normal map path.
    pub normal_texture: String,
    /// Packed metallic-roughness texture path.
    pub metallic_roughness_texture: String,
    /// Ambient occlusion texture path.
    pub ao_texture: String,
    /// Emissive texture path.
    pub emissive_texture: String,
    /// Render both faces.
    pub double_sided: bool,
    /// Skip lighting.
    pub unlit: bool,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            name: "DefaultMaterial".to_owned(),
            base_color: MaterialColor::default(),
            pbr: PbrProperties::default(),
            base_color_texture: String::new(),
            normal_texture: String::new(),
            metallic_roughness_texture: String::new(),
            ao_texture: String::new(),
            emissive_texture: String::new(),
            double_sided: false,
            unlit: false,
        }
    }
}

impl MaterialConfig {
    /// Texture path stored for `slot`.
    #[must_use]
    pub fn texture(&self, slot: TextureSlot) -> &str {
        match slot {
            TextureSlot::BaseColor => &self.base_color_texture,
            TextureSlot::Normal => &self.normal_texture,
            TextureSlot::Metallic | TextureSlot::Roughness => {
                &self.metallic_roughness_texture
            }
            TextureSlot::AmbientOcclusion => &self.ao_texture,
            TextureSlot::Emissive => &self.emissive_texture,
        }
    }

    /// Mutable texture path for `slot`.
    pub fn texture_mut(&mut self, slot: TextureSlot) -> &mut String {
        match slot {
            TextureSlot::BaseColor => &mut self.base_color_texture,
            TextureSlot::Normal => &mut self.normal_texture,
            TextureSlot::Metallic | TextureSlot::Roughness => {
                &mut self.metallic_roughness_texture
            }
            TextureSlot::AmbientOcclusion => &mut self.ao_texture,
            TextureSlot::Emissive => &mut self.emissive_texture,
        }
    }
}
