//! Fruit catalog: name, base color and pattern family for every fruit

use crate::error::ConfigError;
use crate::overlay::PatternFamily;
use crate::texture::Color;
use serde::Deserialize;

/// One fruit to synthesize textures for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FruitSpec {
    pub name: String,
    #[serde(rename = "color", deserialize_with = "deserialize_color")]
    pub base_color: Color,
    #[serde(default)]
    pub family: PatternFamily,
}

impl FruitSpec {
    pub fn new(name: impl Into<String>, base_color: Color, family: PatternFamily) -> Self {
        Self {
            name: name.into(),
            base_color,
            family,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <[u8; 3]>::deserialize(deserializer).map(Color::from)
}

/// A single unit of synthesis work
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub spec: &'a FruitSpec,
    pub size: u32,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(spec: &'a FruitSpec, size: u32) -> Self {
        Self { spec, size }
    }
}

/// Built-in fruits as `(name, base color)`, in game order
const BUILTIN: [(&str, [u8; 3]); 11] = [
    ("cherry", [139, 0, 0]),
    ("strawberry", [255, 60, 60]),
    ("grape", [128, 0, 128]),
    ("dekopon", [255, 140, 0]),
    ("persimmon", [255, 69, 0]),
    ("apple", [220, 20, 60]),
    ("pear", [173, 255, 47]),
    ("peach", [255, 218, 185]),
    ("pineapple", [255, 215, 0]),
    ("melon", [144, 238, 144]),
    ("watermelon", [0, 100, 0]),
];

/// Pattern family used for a built-in fruit name
pub fn family_for(name: &str) -> PatternFamily {
    match name {
        "strawberry" => PatternFamily::Strawberry,
        "watermelon" => PatternFamily::Watermelon,
        "pineapple" => PatternFamily::Pineapple,
        "dekopon" | "persimmon" => PatternFamily::CitrusDimple,
        "grape" => PatternFamily::Grape,
        _ => PatternFamily::Default,
    }
}

/// Ordered collection of fruits with unique names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    fruits: Vec<FruitSpec>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The eleven built-in fruits
    pub fn builtin() -> Self {
        let fruits = BUILTIN
            .iter()
            .map(|&(name, rgb)| FruitSpec::new(name, Color::from(rgb), family_for(name)))
            .collect();
        Self { fruits }
    }

    /// Build a catalog from arbitrary entries, rejecting duplicate names
    pub fn from_specs(fruits: Vec<FruitSpec>) -> Result<Self, ConfigError> {
        for (i, fruit) in fruits.iter().enumerate() {
            if fruits[..i].iter().any(|f| f.name == fruit.name) {
                return Err(ConfigError::DuplicateFruit(fruit.name.clone()));
            }
        }
        Ok(Self { fruits })
    }

    pub fn get(&self, name: &str) -> Option<&FruitSpec> {
        self.fruits.iter().find(|f| f.name == name)
    }

    /// Look up a fruit, failing with [`ConfigError::UnknownFruit`]
    pub fn require(&self, name: &str) -> Result<&FruitSpec, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownFruit(name.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FruitSpec> {
        self.fruits.iter()
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FruitSpec;
    type IntoIter = std::slice::Iter<'a, FruitSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fruits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.get("cherry").unwrap().base_color, Color::new(139, 0, 0));
        assert_eq!(catalog.get("watermelon").unwrap().family, PatternFamily::Watermelon);
        assert_eq!(catalog.get("dekopon").unwrap().family, PatternFamily::CitrusDimple);
        assert_eq!(catalog.get("persimmon").unwrap().family, PatternFamily::CitrusDimple);
        assert_eq!(catalog.get("peach").unwrap().family, PatternFamily::Default);
        assert!(catalog.get("durian").is_none());
    }

    #[test]
    fn test_family_mapping() {
        assert_eq!(family_for("strawberry"), PatternFamily::Strawberry);
        assert_eq!(family_for("pineapple"), PatternFamily::Pineapple);
        assert_eq!(family_for("grape"), PatternFamily::Grape);
        for name in ["cherry", "apple", "pear", "peach", "melon"] {
            assert_eq!(family_for(name), PatternFamily::Default);
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let fruits = vec![
            FruitSpec::new("kiwi", Color::new(120, 160, 40), PatternFamily::Default),
            FruitSpec::new("kiwi", Color::new(90, 120, 30), PatternFamily::Grape),
        ];
        let err = Catalog::from_specs(fruits).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateFruit(name) if name == "kiwi"));
    }

    #[test]
    fn test_require_unknown() {
        let err = Catalog::builtin().require("durian").unwrap_err();
        assert_eq!(err.to_string(), "Unknown fruit 'durian'");
    }

    #[test]
    fn test_fruit_spec_from_toml() {
        let spec: FruitSpec =
            toml::from_str("name = \"lime\"\ncolor = [50, 205, 50]\nfamily = \"citrus-dimple\"")
                .unwrap();
        assert_eq!(spec.base_color, Color::new(50, 205, 50));
        assert_eq!(spec.family, PatternFamily::CitrusDimple);
    }
}
