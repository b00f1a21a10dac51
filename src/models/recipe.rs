use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display, str::FromStr};
use uuid::Uuid;

/// One of the three daily recommendation targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            other => Err(format!("unknown meal slot: {}", other)),
        }
    }
}

/// Season a recipe belongs to; `AllYear` recipes are eligible in every season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllYear,
}

impl Season {
    /// Maps a calendar month (1-12) to its season
    ///
    /// March to May is spring, June to August summer, September to November autumn.
    /// Anything else, including out-of-range months, is winter.
    pub fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::AllYear => "all_year",
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            "all_year" => Ok(Season::AllYear),
            other => Err(format!("unknown season: {}", other)),
        }
    }
}

/// Cuisine or style of a recipe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    Chinese,
    Western,
    Japanese,
    Korean,
    SoutheastAsian,
    Light,
    Spicy,
    Soup,
    Dessert,
}

impl RecipeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::Chinese => "chinese",
            RecipeCategory::Western => "western",
            RecipeCategory::Japanese => "japanese",
            RecipeCategory::Korean => "korean",
            RecipeCategory::SoutheastAsian => "southeast_asian",
            RecipeCategory::Light => "light",
            RecipeCategory::Spicy => "spicy",
            RecipeCategory::Soup => "soup",
            RecipeCategory::Dessert => "dessert",
        }
    }
}

impl Display for RecipeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecipeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chinese" => Ok(RecipeCategory::Chinese),
            "western" => Ok(RecipeCategory::Western),
            "japanese" => Ok(RecipeCategory::Japanese),
            "korean" => Ok(RecipeCategory::Korean),
            "southeast_asian" => Ok(RecipeCategory::SoutheastAsian),
            "light" => Ok(RecipeCategory::Light),
            "spicy" => Ok(RecipeCategory::Spicy),
            "soup" => Ok(RecipeCategory::Soup),
            "dessert" => Ok(RecipeCategory::Dessert),
            other => Err(format!("unknown recipe category: {}", other)),
        }
    }
}

/// A recipe as seen by the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub meal_slot: MealSlot,
    pub season: Season,
    pub category: RecipeCategory,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub cooking_time_minutes: u32,
    pub calories: u32,
    /// Estimated cost in the budget's currency units
    pub estimated_cost: f64,
    #[serde(default)]
    pub suitable_for_hot: bool,
    #[serde(default)]
    pub suitable_for_cold: bool,
    #[serde(default)]
    pub suitable_for_rainy: bool,
    #[serde(default)]
    pub suitable_for_sunny: bool,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Recipe {
    /// Creates a recipe with a fresh id and no weather suitability, steps or tags
    pub fn new(
        name: impl Into<String>,
        meal_slot: MealSlot,
        season: Season,
        category: RecipeCategory,
        calories: u32,
        estimated_cost: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            meal_slot,
            season,
            category,
            ingredients: Vec::new(),
            steps: Vec::new(),
            cooking_time_minutes: 0,
            calories,
            estimated_cost,
            suitable_for_hot: false,
            suitable_for_cold: false,
            suitable_for_rainy: false,
            suitable_for_sunny: false,
            tags: BTreeSet::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_tag(tag))
    }

    /// Placeholder recipes are synthesized when a slot has no candidates and carry the nil id
    pub fn is_placeholder(&self) -> bool {
        self.id.is_nil()
    }
}
