use crate::core::dish::Dish;
use crate::core::ingredient::{IngredientRecord, Stock};
use log::debug;
use serde::{Deserialize, Serialize};

/// A preparation station: the dishes it can cook and the stock it cooks from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StationData", into = "StationData")]
pub struct Station {
    name: String,
    dishes: Vec<Dish>,
    stock: Stock,
}

/// Serialized form; loading goes through `assign_dish` so duplicate recipes collapse
#[derive(Serialize, Deserialize)]
struct StationData {
    name: String,
    #[serde(default)]
    dishes: Vec<Dish>,
    #[serde(default)]
    stock: Stock,
}

impl From<StationData> for Station {
    fn from(data: StationData) -> Self {
        let mut station = Station::new(data.name);
        for dish in data.dishes {
            if !station.assign_dish(dish) {
                debug!("{}: ignoring duplicate recipe", station.name);
            }
        }
        station.stock = data.stock;
        station
    }
}

impl From<Station> for StationData {
    fn from(station: Station) -> Self {
        Self {
            name: station.name,
            dishes: station.dishes,
            stock: station.stock,
        }
    }
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dishes: Vec::new(),
            stock: Stock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered recipes, in assignment order
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Stock {
        &mut self.stock
    }

    /// Registered recipe for `dish_name`, if any
    pub fn dish(&self, dish_name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.name() == dish_name)
    }

    pub fn has_dish(&self, dish_name: &str) -> bool {
        self.dish(dish_name).is_some()
    }

    /// Register a recipe; false if a dish with the same name is already here
    pub fn assign_dish(&mut self, dish: Dish) -> bool {
        if self.has_dish(dish.name()) {
            return false;
        }
        self.dishes.push(dish);
        true
    }

    /// Merge a record into this station's stock
    pub fn replenish(&mut self, record: IngredientRecord) {
        self.stock.merge(record);
    }

    /// Whether the stock covers every recipe line of `dish_name` right now
    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        self.shortfalls(dish_name)
            .map(|missing| missing.is_empty())
            .unwrap_or(false)
    }

    /// Units of each recipe ingredient missing from stock, skipping lines that are covered.
    ///
    /// An ingredient absent from stock is short by its whole requirement.
    /// Repeated recipe lines for one ingredient are summed. Returns `None` if
    /// the dish is not registered here.
    pub fn shortfalls(&self, dish_name: &str) -> Option<Vec<(String, u32)>> {
        let dish = self.dish(dish_name)?;

        let mut required: Vec<(String, u32)> = Vec::new();
        for line in dish.ingredients() {
            match required.iter_mut().find(|(name, _)| *name == line.name) {
                Some((_, total)) => *total += line.required_quantity,
                None => required.push((line.name.clone(), line.required_quantity)),
            }
        }

        Some(
            required
                .into_iter()
                .filter_map(|(name, needed)| {
                    let missing = needed.saturating_sub(self.stock.quantity_of(&name));
                    (missing > 0).then_some((name, missing))
                })
                .collect(),
        )
    }

    /// Prepare `dish_name`, consuming its recipe from stock.
    ///
    /// Returns false and leaves the stock alone if the order cannot be completed.
    pub fn prepare_dish(&mut self, dish_name: &str) -> bool {
        if !self.can_complete_order(dish_name) {
            return false;
        }
        let Some(dish) = self.dishes.iter().find(|dish| dish.name() == dish_name) else {
            return false;
        };
        for line in dish.ingredients() {
            // Covered by the capability check above
            self.stock.deduct(&line.name, line.required_quantity);
        }
        debug!("{}: consumed recipe for {}", self.name, dish_name);
        true
    }
}
