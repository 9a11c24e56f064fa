use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of numbered ingredient/measure slots in a provider recipe
pub const MAX_INGREDIENTS: usize = 20;

/// A recipe snapshot as returned by the provider.
///
/// Search-by-category only yields the summary fields (id, name, thumbnail);
/// lookup-by-id yields the full detail. Fields the crate does not model
/// (numbered ingredients, tags, source links) are kept in `extra` so a
/// recipe persists exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: String,
    #[serde(rename = "strMealThumb", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "strArea", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One `measure ingredient` line of a recipe detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.measure, self.name)
        }
    }
}

impl Recipe {
    /// Build a summary recipe (id, name, thumbnail only)
    pub fn summary(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: Option<String>,
    ) -> Self {
        Recipe {
            id: id.into(),
            name: name.into(),
            thumbnail,
            category: None,
            area: None,
            instructions: None,
            extra: BTreeMap::new(),
        }
    }

    /// True when the recipe carries the full detail from a lookup
    pub fn is_detail(&self) -> bool {
        self.instructions.is_some()
    }

    /// Non-blank ingredients in slot order, names and measures trimmed
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let name = self.extra_str(&format!("strIngredient{}", i))?.trim();
                if name.is_empty() {
                    return None;
                }
                let measure = self
                    .extra_str(&format!("strMeasure{}", i))
                    .unwrap_or_default()
                    .trim();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Categories accepted by the provider's category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Beef,
    Breakfast,
    Chicken,
    Dessert,
    Goat,
    Lamb,
    Miscellaneous,
    Pasta,
    Pork,
    Seafood,
    Side,
    Starter,
    Vegan,
    Vegetarian,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Beef,
        Category::Breakfast,
        Category::Chicken,
        Category::Dessert,
        Category::Goat,
        Category::Lamb,
        Category::Miscellaneous,
        Category::Pasta,
        Category::Pork,
        Category::Seafood,
        Category::Side,
        Category::Starter,
        Category::Vegan,
        Category::Vegetarian,
    ];

    /// Provider spelling used in the `c=` filter parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beef => "Beef",
            Category::Breakfast => "Breakfast",
            Category::Chicken => "Chicken",
            Category::Dessert => "Dessert",
            Category::Goat => "Goat",
            Category::Lamb => "Lamb",
            Category::Miscellaneous => "Miscellaneous",
            Category::Pasta => "Pasta",
            Category::Pork => "Pork",
            Category::Seafood => "Seafood",
            Category::Side => "Side",
            Category::Starter => "Starter",
            Category::Vegan => "Vegan",
            Category::Vegetarian => "Vegetarian",
        }
    }

    /// Parse a filter selection where blank or "all" means no category
    pub fn parse_filter(value: &str) -> Result<Option<Category>, UnknownCategory> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
