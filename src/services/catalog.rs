//! Built-in sample recipes loaded on first run

use uuid::Uuid;

use crate::models::{MealSlot, Recipe, RecipeCategory, Season};

/// Compact, const-friendly description of a sample recipe
#[derive(Debug, Clone, Copy)]
struct RecipeSeed {
    id: u128,
    name: &'static str,
    description: &'static str,
    meal_slot: MealSlot,
    season: Season,
    category: RecipeCategory,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    cooking_time_minutes: u32,
    calories: u32,
    estimated_cost: f64,
    hot: bool,
    cold: bool,
    rainy: bool,
    sunny: bool,
    tags: &'static [&'static str],
}

const RECIPE_SEEDS: &[RecipeSeed] = &[
    // breakfast
    RecipeSeed {
        id: 0x101,
        name: "Century egg and pork congee",
        description: "A stomach-warming rice porridge for slow mornings",
        meal_slot: MealSlot::Breakfast,
        season: Season::AllYear,
        category: RecipeCategory::Chinese,
        ingredients: &["rice", "century eggs", "lean pork", "ginger", "scallion", "salt", "white pepper"],
        steps: &[
            "Rinse the rice and soak it for 30 minutes",
            "Shred the pork and marinate it with salt and cooking wine",
            "Simmer the rice until the grains burst",
            "Add the pork and diced century egg and cook for 5 more minutes",
            "Season with ginger, salt and pepper, then finish with scallion",
        ],
        cooking_time_minutes: 45,
        calories: 320,
        estimated_cost: 10.0,
        hot: true,
        cold: false,
        rainy: true,
        sunny: true,
        tags: &["warming", "nourishing", "breakfast"],
    },
    RecipeSeed {
        id: 0x102,
        name: "Breakfast sandwich",
        description: "Quick toasted sandwich with egg and ham",
        meal_slot: MealSlot::Breakfast,
        season: Season::AllYear,
        category: RecipeCategory::Western,
        ingredients: &["toast", "egg", "lettuce", "tomato", "ham", "cheese", "mayonnaise"],
        steps: &[
            "Lightly toast the bread",
            "Fry the egg and the ham",
            "Layer everything between the slices",
            "Cut diagonally and serve",
        ],
        cooking_time_minutes: 10,
        calories: 350,
        estimated_cost: 12.0,
        hot: false,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["quick", "western", "balanced-nutrition"],
    },
    RecipeSeed {
        id: 0x103,
        name: "Chilled mung bean porridge",
        description: "Sweet summer porridge that cools you down",
        meal_slot: MealSlot::Breakfast,
        season: Season::Summer,
        category: RecipeCategory::Chinese,
        ingredients: &["mung beans", "rice", "rock sugar", "water"],
        steps: &[
            "Soak the mung beans ahead of time",
            "Boil with the rice until the beans split",
            "Sweeten with rock sugar",
            "Let it cool before serving",
        ],
        cooking_time_minutes: 45,
        calories: 200,
        estimated_cost: 8.0,
        hot: false,
        cold: false,
        rainy: false,
        sunny: true,
        tags: &["cool", "sweet"],
    },
    RecipeSeed {
        id: 0x104,
        name: "Soy milk and fried dough sticks",
        description: "The classic Chinese breakfast pairing",
        meal_slot: MealSlot::Breakfast,
        season: Season::AllYear,
        category: RecipeCategory::Chinese,
        ingredients: &["soybeans", "fried dough sticks", "sugar"],
        steps: &[
            "Soak the soybeans overnight",
            "Blend into soy milk",
            "Strain and bring to a boil",
            "Serve with the dough sticks",
        ],
        cooking_time_minutes: 30,
        calories: 400,
        estimated_cost: 10.0,
        hot: true,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["classic", "filling"],
    },
    // lunch
    RecipeSeed {
        id: 0x201,
        name: "Tomato scrambled eggs",
        description: "Sweet and sour home-style classic",
        meal_slot: MealSlot::Lunch,
        season: Season::AllYear,
        category: RecipeCategory::Chinese,
        ingredients: &["tomatoes", "eggs", "scallion", "salt", "sugar", "cooking oil"],
        steps: &[
            "Cut the tomatoes into wedges and beat the eggs",
            "Scramble the eggs until just set and set them aside",
            "Stir-fry the tomatoes until they release their juice",
            "Return the eggs and toss together",
            "Season with salt and sugar and top with scallion",
        ],
        cooking_time_minutes: 15,
        calories: 280,
        estimated_cost: 8.0,
        hot: true,
        cold: false,
        rainy: false,
        sunny: true,
        tags: &["home-style", "quick", "vegetarian"],
    },
    RecipeSeed {
        id: 0x202,
        name: "Red braised pork belly",
        description: "Rich, glossy braise that is never greasy",
        meal_slot: MealSlot::Lunch,
        season: Season::Autumn,
        category: RecipeCategory::Chinese,
        ingredients: &["pork belly", "rock sugar", "light soy sauce", "dark soy sauce", "cooking wine", "star anise", "cinnamon", "ginger"],
        steps: &[
            "Cube the pork and blanch it",
            "Caramelize the sugar",
            "Brown the pork in the caramel",
            "Add water and aromatics and braise",
            "Reduce the sauce until glossy",
        ],
        cooking_time_minutes: 60,
        calories: 650,
        estimated_cost: 28.0,
        hot: true,
        cold: true,
        rainy: true,
        sunny: true,
        tags: &["classic", "rice-companion", "meat"],
    },
    RecipeSeed {
        id: 0x203,
        name: "Stir-fried seasonal greens",
        description: "Light and clean vegetable side",
        meal_slot: MealSlot::Lunch,
        season: Season::AllYear,
        category: RecipeCategory::Light,
        ingredients: &["seasonal greens", "garlic", "salt", "cooking oil"],
        steps: &[
            "Wash and cut the greens",
            "Fry the garlic until fragrant",
            "Stir-fry the greens over high heat",
            "Season and serve",
        ],
        cooking_time_minutes: 5,
        calories: 80,
        estimated_cost: 6.0,
        hot: false,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["light", "healthy", "vegetables"],
    },
    RecipeSeed {
        id: 0x204,
        name: "Tomato egg noodles",
        description: "Simple home-style noodle bowl",
        meal_slot: MealSlot::Lunch,
        season: Season::AllYear,
        category: RecipeCategory::Chinese,
        ingredients: &["noodles", "tomatoes", "eggs", "scallion", "salt", "sugar", "light soy sauce"],
        steps: &[
            "Fry the tomatoes until saucy",
            "Add water and bring to a boil",
            "Cook the noodles in the broth",
            "Stir in the beaten egg",
            "Season and top with scallion",
        ],
        cooking_time_minutes: 15,
        calories: 450,
        estimated_cost: 12.0,
        hot: true,
        cold: true,
        rainy: true,
        sunny: true,
        tags: &["noodles", "home-style", "balanced-nutrition"],
    },
    RecipeSeed {
        id: 0x205,
        name: "Smashed cucumber salad",
        description: "Crunchy, tangy cold dish",
        meal_slot: MealSlot::Lunch,
        season: Season::Summer,
        category: RecipeCategory::Chinese,
        ingredients: &["cucumbers", "garlic", "vinegar", "light soy sauce", "sesame oil", "chili oil", "sugar"],
        steps: &[
            "Smash and cut the cucumbers",
            "Salt them to draw out water",
            "Squeeze them dry",
            "Toss with the dressing",
            "Chill before serving",
        ],
        cooking_time_minutes: 10,
        calories: 60,
        estimated_cost: 6.0,
        hot: false,
        cold: false,
        rainy: false,
        sunny: true,
        tags: &["cold-dressed", "appetizing", "low-calorie"],
    },
    RecipeSeed {
        id: 0x206,
        name: "Kung pao chicken",
        description: "Spicy Sichuan classic with peanuts",
        meal_slot: MealSlot::Lunch,
        season: Season::AllYear,
        category: RecipeCategory::Spicy,
        ingredients: &["chicken breast", "peanuts", "dried chilies", "Sichuan peppercorns", "garlic", "light soy sauce", "vinegar", "sugar", "cooking wine"],
        steps: &[
            "Dice and marinate the chicken",
            "Mix the kung pao sauce",
            "Fry the chilies and peppercorns",
            "Stir-fry the chicken until opaque",
            "Add the sauce and peanuts and toss quickly",
        ],
        cooking_time_minutes: 20,
        calories: 480,
        estimated_cost: 22.0,
        hot: true,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["sichuan", "spicy", "rice-companion"],
    },
    RecipeSeed {
        id: 0x207,
        name: "Pickled cabbage fish",
        description: "Sour and spicy fish fillet soup",
        meal_slot: MealSlot::Lunch,
        season: Season::Winter,
        category: RecipeCategory::Soup,
        ingredients: &["grass carp", "pickled mustard greens", "pickled chilies", "ginger", "garlic", "Sichuan peppercorns", "dried chilies", "coriander"],
        steps: &[
            "Slice and marinate the fish",
            "Fry the pickled greens and chilies",
            "Add water and bring to a boil",
            "Poach the fish slices",
            "Pour sizzling oil over the top",
        ],
        cooking_time_minutes: 30,
        calories: 380,
        estimated_cost: 30.0,
        hot: false,
        cold: true,
        rainy: true,
        sunny: false,
        tags: &["hot", "sour", "fish"],
    },
    // dinner
    RecipeSeed {
        id: 0x301,
        name: "Steamed sea bass",
        description: "Tender, clean-tasting steamed fish",
        meal_slot: MealSlot::Dinner,
        season: Season::AllYear,
        category: RecipeCategory::Light,
        ingredients: &["sea bass", "scallion", "ginger", "seasoned soy sauce", "cooking wine", "sesame oil"],
        steps: &[
            "Clean and score the fish",
            "Rub with cooking wine and ginger",
            "Steam for 8 to 10 minutes",
            "Drain, then top with shredded scallion",
            "Pour over soy sauce and hot oil",
        ],
        cooking_time_minutes: 20,
        calories: 200,
        estimated_cost: 35.0,
        hot: true,
        cold: true,
        rainy: true,
        sunny: true,
        tags: &["steamed", "healthy", "fish"],
    },
    RecipeSeed {
        id: 0x302,
        name: "Winter melon and pork rib soup",
        description: "Cooling, restorative summer soup",
        meal_slot: MealSlot::Dinner,
        season: Season::Summer,
        category: RecipeCategory::Soup,
        ingredients: &["winter melon", "pork ribs", "ginger", "salt", "goji berries"],
        steps: &[
            "Blanch the ribs",
            "Simmer with water and ginger",
            "Add the winter melon once the ribs are tender",
            "Cook until the melon turns translucent",
            "Season and add goji berries",
        ],
        cooking_time_minutes: 50,
        calories: 250,
        estimated_cost: 28.0,
        hot: false,
        cold: true,
        rainy: true,
        sunny: true,
        tags: &["soup", "light", "cool"],
    },
    RecipeSeed {
        id: 0x303,
        name: "Mapo tofu",
        description: "Numbing and spicy Sichuan tofu",
        meal_slot: MealSlot::Dinner,
        season: Season::AllYear,
        category: RecipeCategory::Spicy,
        ingredients: &["silken tofu", "ground beef", "doubanjiang", "ground Sichuan pepper", "garlic", "light soy sauce", "starch"],
        steps: &[
            "Cube and blanch the tofu",
            "Fry the beef with the bean paste",
            "Add water and bring to a boil",
            "Simmer the tofu gently",
            "Thicken and sprinkle with ground pepper",
        ],
        cooking_time_minutes: 15,
        calories: 320,
        estimated_cost: 12.0,
        hot: true,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["sichuan", "spicy", "hot", "tofu"],
    },
    RecipeSeed {
        id: 0x304,
        name: "Seaweed and egg drop soup",
        description: "Five-minute everyday soup",
        meal_slot: MealSlot::Dinner,
        season: Season::AllYear,
        category: RecipeCategory::Soup,
        ingredients: &["dried seaweed", "egg", "dried shrimp", "scallion", "salt", "sesame oil"],
        steps: &[
            "Bring water to a boil",
            "Add the seaweed and dried shrimp",
            "Stir in the beaten egg",
            "Season and add scallion",
            "Finish with sesame oil",
        ],
        cooking_time_minutes: 5,
        calories: 80,
        estimated_cost: 8.0,
        hot: true,
        cold: true,
        rainy: true,
        sunny: true,
        tags: &["quick", "soup", "warming"],
    },
    RecipeSeed {
        id: 0x305,
        name: "Shiitake with bok choy",
        description: "Light and nourishing vegetable dish",
        meal_slot: MealSlot::Dinner,
        season: Season::AllYear,
        category: RecipeCategory::Light,
        ingredients: &["bok choy", "shiitake mushrooms", "garlic", "salt", "light soy sauce", "cooking oil"],
        steps: &[
            "Slice the mushrooms and wash the greens",
            "Cook the mushrooms until soft",
            "Add the greens and stir-fry quickly",
            "Season and serve",
        ],
        cooking_time_minutes: 8,
        calories: 90,
        estimated_cost: 10.0,
        hot: false,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["vegetarian", "light", "healthy"],
    },
    RecipeSeed {
        id: 0x306,
        name: "Stone pot bibimbap",
        description: "Rice bowl loaded with vegetables, beef and egg",
        meal_slot: MealSlot::Dinner,
        season: Season::AllYear,
        category: RecipeCategory::Korean,
        ingredients: &["rice", "beef", "bean sprouts", "spinach", "carrot", "shiitake mushrooms", "egg", "gochujang"],
        steps: &[
            "Blanch or saute each vegetable separately",
            "Cook and season the beef",
            "Oil the stone pot and add the rice",
            "Arrange the toppings",
            "Crown with a fried egg and serve with gochujang",
        ],
        cooking_time_minutes: 25,
        calories: 550,
        estimated_cost: 28.0,
        hot: true,
        cold: true,
        rainy: false,
        sunny: true,
        tags: &["korean", "rice-bowl", "balanced-nutrition"],
    },
    RecipeSeed {
        id: 0x307,
        name: "Cola chicken wings",
        description: "Sweet and savoury wings everyone likes",
        meal_slot: MealSlot::Dinner,
        season: Season::AllYear,
        category: RecipeCategory::Chinese,
        ingredients: &["chicken wings", "cola", "light soy sauce", "dark soy sauce", "cooking wine", "ginger"],
        steps: &[
            "Score the wings on both sides",
            "Blanch with ginger and cooking wine",
            "Pan-fry until golden on both sides",
            "Add the cola and soy sauces",
            "Simmer for 15 minutes, then reduce over high heat",
        ],
        cooking_time_minutes: 25,
        calories: 450,
        estimated_cost: 25.0,
        hot: true,
        cold: true,
        rainy: true,
        sunny: true,
        tags: &["home-style", "rice-companion", "meat"],
    },
];

impl RecipeSeed {
    fn to_recipe(self) -> Recipe {
        Recipe {
            id: Uuid::from_u128(self.id),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            meal_slot: self.meal_slot,
            season: self.season,
            category: self.category,
            ingredients: self.ingredients.iter().map(|s| (*s).to_owned()).collect(),
            steps: self.steps.iter().map(|s| (*s).to_owned()).collect(),
            cooking_time_minutes: self.cooking_time_minutes,
            calories: self.calories,
            estimated_cost: self.estimated_cost,
            suitable_for_hot: self.hot,
            suitable_for_cold: self.cold,
            suitable_for_rainy: self.rainy,
            suitable_for_sunny: self.sunny,
            tags: self.tags.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// The built-in sample recipes with stable ids
pub fn sample_recipes() -> Vec<Recipe> {
    RECIPE_SEEDS.iter().map(|seed| seed.to_recipe()).collect()
}
