use crate::core::ingredient::IngredientRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

const MEAT_INGREDIENTS: &[&str] = &[
    "Meat", "Chicken", "Beef", "Pork", "Lamb", "Fish", "Shrimp", "Bacon", "Ham", "Turkey", "Sausage",
];
const ANIMAL_PRODUCTS: &[&str] = &["Cheese", "Milk", "Butter", "Cream", "Egg", "Eggs", "Honey", "Yogurt"];
const GLUTEN_INGREDIENTS: &[&str] = &["Wheat", "Flour", "Bread", "Breadcrumbs", "Pasta", "Barley", "Pastry"];
const NUT_INGREDIENTS: &[&str] = &[
    "Nuts", "Almonds", "Walnuts", "Peanuts", "Hazelnuts", "Pecans", "Cashews", "Pistachios",
];
const SODIUM_INGREDIENTS: &[&str] = &["Salt", "Soy Sauce"];
const SUGAR_INGREDIENTS: &[&str] = &["Sugar"];

const MEAT_SUBSTITUTE: &str = "Tofu";
const LOW_SUGAR_SWEETNESS_DROP: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    #[default]
    Other,
}

impl CuisineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Italian => "ITALIAN",
            CuisineType::Mexican => "MEXICAN",
            CuisineType::Chinese => "CHINESE",
            CuisineType::Indian => "INDIAN",
            CuisineType::American => "AMERICAN",
            CuisineType::French => "FRENCH",
            CuisineType::Other => "OTHER",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingStyle {
    #[default]
    Plated,
    FamilyStyle,
    Buffet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    #[default]
    Grilled,
    Baked,
    Boiled,
    Fried,
    Steamed,
    Raw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlavorProfile {
    #[default]
    Sweet,
    Bitter,
    Sour,
    Salty,
    Umami,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideDish {
    pub name: String,
    pub category: String,
}

/// Variant-specific attributes of a dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DishKind {
    #[default]
    Plain,
    Appetizer {
        #[serde(default)]
        serving_style: ServingStyle,
        /// Scale of 1 to 10
        #[serde(default)]
        spiciness_level: u8,
        #[serde(default)]
        vegetarian: bool,
    },
    MainCourse {
        #[serde(default)]
        cooking_method: CookingMethod,
        #[serde(default)]
        protein_type: String,
        #[serde(default)]
        side_dishes: Vec<SideDish>,
        #[serde(default)]
        gluten_free: bool,
    },
    Dessert {
        #[serde(default)]
        flavor_profile: FlavorProfile,
        /// Scale of 1 to 10
        #[serde(default)]
        sweetness_level: u8,
        #[serde(default)]
        contains_nuts: bool,
    },
}

/// Dietary restrictions attached to an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryRequest {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub nut_free: bool,
    pub low_sodium: bool,
    pub low_sugar: bool,
}

impl DietaryRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A dish on the menu: its recipe plus descriptive attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    #[serde(default)]
    ingredients: Vec<IngredientRecord>,
    /// Minutes
    #[serde(default)]
    prep_time: u32,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    cuisine_type: CuisineType,
    #[serde(default)]
    kind: DishKind,
}

impl Dish {
    pub fn new(name: impl Into<String>, ingredients: Vec<IngredientRecord>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            prep_time: 0,
            price: 0.0,
            cuisine_type: CuisineType::Other,
            kind: DishKind::Plain,
        }
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_cuisine(mut self, cuisine_type: CuisineType) -> Self {
        self.cuisine_type = cuisine_type;
        self
    }

    pub fn with_kind(mut self, kind: DishKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recipe lines; `required_quantity` is the demand per dish
    pub fn ingredients(&self) -> &[IngredientRecord] {
        &self.ingredients
    }

    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cuisine_type(&self) -> CuisineType {
        self.cuisine_type
    }

    pub fn kind(&self) -> &DishKind {
        &self.kind
    }

    /// A blank name is the only way to build a dish that cannot be ordered
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Adjust the recipe in place for a dietary request.
    ///
    /// Not idempotent for every variant (a dessert loses sweetness on each
    /// low-sugar call), so apply it once per order.
    pub fn dietary_accommodations(&mut self, request: &DietaryRequest) {
        let meatless = request.vegetarian || request.vegan;

        if meatless {
            if let DishKind::MainCourse { protein_type, .. } = &mut self.kind {
                // Mains keep a protein: swap rather than drop
                substitute(&mut self.ingredients, MEAT_INGREDIENTS, MEAT_SUBSTITUTE);
                *protein_type = MEAT_SUBSTITUTE.to_string();
            } else {
                strip(&mut self.ingredients, MEAT_INGREDIENTS);
            }
        }
        if request.vegan {
            strip(&mut self.ingredients, ANIMAL_PRODUCTS);
        }
        if request.gluten_free {
            strip(&mut self.ingredients, GLUTEN_INGREDIENTS);
        }
        if request.nut_free {
            strip(&mut self.ingredients, NUT_INGREDIENTS);
        }
        if request.low_sodium {
            strip(&mut self.ingredients, SODIUM_INGREDIENTS);
        }

        match &mut self.kind {
            DishKind::Appetizer { vegetarian, .. } => {
                if meatless {
                    *vegetarian = true;
                }
            }
            DishKind::MainCourse { gluten_free, side_dishes, .. } => {
                if request.gluten_free {
                    *gluten_free = true;
                    side_dishes.retain(|side| !matches_any(&side.name, GLUTEN_INGREDIENTS));
                }
            }
            DishKind::Dessert { sweetness_level, contains_nuts, .. } => {
                if request.nut_free {
                    *contains_nuts = false;
                }
                if request.low_sugar {
                    *sweetness_level = sweetness_level.saturating_sub(LOW_SUGAR_SWEETNESS_DROP);
                    strip(&mut self.ingredients, SUGAR_INGREDIENTS);
                }
            }
            DishKind::Plain => {}
        }
    }
}

fn matches_any(name: &str, list: &[&str]) -> bool {
    list.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}

fn strip(ingredients: &mut Vec<IngredientRecord>, list: &[&str]) {
    ingredients.retain(|ingredient| !matches_any(&ingredient.name, list));
}

/// Rename every listed ingredient to `replacement`, folding the results into one line
fn substitute(ingredients: &mut Vec<IngredientRecord>, list: &[&str], replacement: &str) {
    let mut result: Vec<IngredientRecord> = Vec::with_capacity(ingredients.len());
    for mut ingredient in ingredients.drain(..) {
        if matches_any(&ingredient.name, list) {
            ingredient.name = replacement.to_string();
        }
        match result.iter_mut().find(|existing| existing.name == ingredient.name) {
            Some(existing) => {
                existing.quantity += ingredient.quantity;
                existing.required_quantity += ingredient.required_quantity;
            }
            None => result.push(ingredient),
        }
    }
    *ingredients = result;
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.ingredients.iter().map(|i| i.name.as_str()).collect();
        writeln!(f, "Dish Name: {}", self.name)?;
        writeln!(f, "Ingredients: {}", names.join(", "))?;
        writeln!(f, "Preparation Time: {} minutes", self.prep_time)?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        write!(f, "Cuisine Type: {}", self.cuisine_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, required: u32) -> IngredientRecord {
        IngredientRecord::new(name, required, required, 1.0)
    }

    #[test]
    fn test_display_format() {
        let dish = Dish::new("Carbonara", vec![line("Pasta", 1), line("Egg", 2)])
            .with_prep_time(20)
            .with_price(12.5)
            .with_cuisine(CuisineType::Italian);

        let expected = "Dish Name: Carbonara\n\
                        Ingredients: Pasta, Egg\n\
                        Preparation Time: 20 minutes\n\
                        Price: $12.50\n\
                        Cuisine Type: ITALIAN";
        assert_eq!(dish.to_string(), expected);
    }

    #[test]
    fn test_blank_name_is_invalid() {
        assert!(!Dish::new("  ", vec![]).is_valid());
        assert!(Dish::new("Soup", vec![]).is_valid());
    }

    #[test]
    fn test_vegetarian_main_swaps_protein() {
        let mut dish = Dish::new("Stir Fry", vec![line("Chicken", 1), line("Beef", 2), line("Rice", 1)])
            .with_kind(DishKind::MainCourse {
                cooking_method: CookingMethod::Fried,
                protein_type: "Chicken".to_string(),
                side_dishes: vec![],
                gluten_free: false,
            });

        dish.dietary_accommodations(&DietaryRequest { vegetarian: true, ..Default::default() });

        let names: Vec<&str> = dish.ingredients().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tofu", "Rice"]);
        assert_eq!(dish.ingredients()[0].required_quantity, 3);
        match dish.kind() {
            DishKind::MainCourse { protein_type, .. } => assert_eq!(protein_type, "Tofu"),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_vegan_appetizer_strips_animal_products() {
        let mut dish = Dish::new("Nachos", vec![line("Chips", 1), line("Cheese", 1), line("beef", 1)])
            .with_kind(DishKind::Appetizer {
                serving_style: ServingStyle::FamilyStyle,
                spiciness_level: 4,
                vegetarian: false,
            });

        dish.dietary_accommodations(&DietaryRequest { vegan: true, ..Default::default() });

        assert_eq!(dish.ingredients().len(), 1);
        assert_eq!(dish.ingredients()[0].name, "Chips");
        assert!(matches!(dish.kind(), DishKind::Appetizer { vegetarian: true, .. }));
    }

    #[test]
    fn test_dessert_low_sugar_and_nut_free() {
        let mut dish = Dish::new("Baklava", vec![line("Walnuts", 1), line("Sugar", 2), line("Pastry", 1)])
            .with_kind(DishKind::Dessert {
                flavor_profile: FlavorProfile::Sweet,
                sweetness_level: 2,
                contains_nuts: true,
            });

        dish.dietary_accommodations(&DietaryRequest {
            nut_free: true,
            low_sugar: true,
            ..Default::default()
        });

        assert_eq!(dish.ingredients().len(), 1);
        assert_eq!(
            dish.kind(),
            &DishKind::Dessert {
                flavor_profile: FlavorProfile::Sweet,
                sweetness_level: 0,
                contains_nuts: false,
            }
        );
    }

    #[test]
    fn test_gluten_free_main_drops_gluten_sides() {
        let mut dish = Dish::new("Steak Frites", vec![line("Beef", 1), line("Flour", 1)])
            .with_kind(DishKind::MainCourse {
                cooking_method: CookingMethod::Grilled,
                protein_type: "Beef".to_string(),
                side_dishes: vec![
                    SideDish { name: "Bread".to_string(), category: "Starch".to_string() },
                    SideDish { name: "Salad".to_string(), category: "Vegetable".to_string() },
                ],
                gluten_free: false,
            });

        dish.dietary_accommodations(&DietaryRequest { gluten_free: true, ..Default::default() });

        assert_eq!(dish.ingredients().len(), 1);
        match dish.kind() {
            DishKind::MainCourse { side_dishes, gluten_free, .. } => {
                assert!(*gluten_free);
                assert_eq!(side_dishes.len(), 1);
                assert_eq!(side_dishes[0].name, "Salad");
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
