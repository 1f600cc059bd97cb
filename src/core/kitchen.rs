//! Aggregate view over the dishes currently in the kitchen

use crate::core::dish::{CuisineType, Dish};
use crate::core::manager::StationManager;
use std::fmt;

/// A dish counts as elaborate with at least this many ingredients...
pub const ELABORATE_MIN_INGREDIENTS: usize = 5;
/// ...and at least this many minutes of preparation
pub const ELABORATE_MIN_PREP_TIME: u32 = 60;

const ALL_CUISINES: [CuisineType; 7] = [
    CuisineType::Italian,
    CuisineType::Mexican,
    CuisineType::Chinese,
    CuisineType::Indian,
    CuisineType::American,
    CuisineType::French,
    CuisineType::Other,
];

pub fn is_elaborate(dish: &Dish) -> bool {
    dish.ingredients().len() >= ELABORATE_MIN_INGREDIENTS && dish.prep_time() >= ELABORATE_MIN_PREP_TIME
}

/// Two entries are the same dish when name, prep time, price and cuisine agree
fn same_dish(a: &Dish, b: &Dish) -> bool {
    a.name() == b.name()
        && a.prep_time() == b.prep_time()
        && a.price() == b.price()
        && a.cuisine_type() == b.cuisine_type()
}

/// Dishes in the kitchen, without duplicates, with running totals
#[derive(Debug, Clone, Default)]
pub struct Kitchen {
    dishes: Vec<Dish>,
    prep_time_sum: u32,
    elaborate_count: usize,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dish; false if the same dish is already here
    pub fn new_order(&mut self, dish: Dish) -> bool {
        if self.contains(&dish) {
            return false;
        }
        self.prep_time_sum += dish.prep_time();
        if is_elaborate(&dish) {
            self.elaborate_count += 1;
        }
        self.dishes.push(dish);
        true
    }

    /// Remove a dish; false if it is not here
    pub fn serve_dish(&mut self, dish: &Dish) -> bool {
        match self.dishes.iter().position(|known| same_dish(known, dish)) {
            Some(index) => {
                self.take(index);
                true
            }
            None => false,
        }
    }

    fn take(&mut self, index: usize) -> Dish {
        let dish = self.dishes.remove(index);
        self.prep_time_sum -= dish.prep_time();
        if is_elaborate(&dish) {
            self.elaborate_count -= 1;
        }
        dish
    }

    pub fn contains(&self, dish: &Dish) -> bool {
        self.dishes.iter().any(|known| same_dish(known, dish))
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn prep_time_sum(&self) -> u32 {
        self.prep_time_sum
    }

    /// Mean prep time rounded to the nearest minute, 0 when empty
    pub fn average_prep_time(&self) -> u32 {
        if self.dishes.is_empty() {
            return 0;
        }
        (self.prep_time_sum as f64 / self.dishes.len() as f64).round() as u32
    }

    pub fn elaborate_dish_count(&self) -> usize {
        self.elaborate_count
    }

    /// Share of elaborate dishes in percent, rounded up to two decimals
    pub fn elaborate_percentage(&self) -> f64 {
        if self.dishes.is_empty() {
            return 0.0;
        }
        let percentage = self.elaborate_count as f64 * 100.0 / self.dishes.len() as f64;
        (percentage * 100.0).ceil() / 100.0
    }

    pub fn tally_cuisine(&self, cuisine: CuisineType) -> usize {
        self.dishes.iter().filter(|dish| dish.cuisine_type() == cuisine).count()
    }

    /// Drop every dish quicker than `prep_time` minutes; returns how many left
    pub fn release_dishes_below_prep_time(&mut self, prep_time: u32) -> usize {
        self.release_where(|dish| dish.prep_time() < prep_time)
    }

    /// Drop every dish of `cuisine`; returns how many left
    pub fn release_dishes_of_cuisine(&mut self, cuisine: CuisineType) -> usize {
        self.release_where(|dish| dish.cuisine_type() == cuisine)
    }

    fn release_where(&mut self, predicate: impl Fn(&Dish) -> bool) -> usize {
        let mut released = 0;
        let mut index = 0;
        while index < self.dishes.len() {
            if predicate(&self.dishes[index]) {
                self.take(index);
                released += 1;
            } else {
                index += 1;
            }
        }
        released
    }

    pub fn report(&self) -> KitchenReport {
        KitchenReport {
            cuisine_tally: ALL_CUISINES.map(|cuisine| (cuisine, self.tally_cuisine(cuisine))),
            average_prep_time: self.average_prep_time(),
            elaborate_percentage: self.elaborate_percentage(),
        }
    }
}

/// Dishes currently queued, one entry per distinct dish
impl From<&StationManager> for Kitchen {
    fn from(manager: &StationManager) -> Self {
        let mut kitchen = Kitchen::new();
        for order in manager.queue().iter() {
            kitchen.new_order(order.dish().clone());
        }
        kitchen
    }
}

/// Snapshot of the kitchen's cuisine mix and workload
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenReport {
    pub cuisine_tally: [(CuisineType, usize); 7],
    pub average_prep_time: u32,
    pub elaborate_percentage: f64,
}

impl fmt::Display for KitchenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cuisine, count) in &self.cuisine_tally {
            writeln!(f, "{}: {}", cuisine, count)?;
        }
        writeln!(f, "AVERAGE PREP TIME: {}", self.average_prep_time)?;
        writeln!(f, "ELABORATE DISHES: {:.2}%", self.elaborate_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingredient::IngredientRecord;

    fn dish(name: &str, ingredients: usize, prep_time: u32, cuisine: CuisineType) -> Dish {
        let lines = (0..ingredients)
            .map(|i| IngredientRecord::new(format!("Item{}", i), 1, 1, 1.0))
            .collect();
        Dish::new(name, lines).with_prep_time(prep_time).with_cuisine(cuisine)
    }

    #[test]
    fn test_new_order_rejects_duplicates() {
        let mut kitchen = Kitchen::new();
        assert!(kitchen.new_order(dish("Lasagna", 6, 90, CuisineType::Italian)));
        assert!(!kitchen.new_order(dish("Lasagna", 6, 90, CuisineType::Italian)));
        // Same name, different prep time is a different dish
        assert!(kitchen.new_order(dish("Lasagna", 6, 45, CuisineType::Italian)));
        assert_eq!(kitchen.len(), 2);
        assert_eq!(kitchen.prep_time_sum(), 135);
    }

    #[test]
    fn test_serve_updates_totals() {
        let mut kitchen = Kitchen::new();
        let lasagna = dish("Lasagna", 6, 90, CuisineType::Italian);
        kitchen.new_order(lasagna.clone());
        kitchen.new_order(dish("Taco", 3, 10, CuisineType::Mexican));
        assert_eq!(kitchen.elaborate_dish_count(), 1);

        assert!(kitchen.serve_dish(&lasagna));
        assert!(!kitchen.serve_dish(&lasagna));
        assert_eq!(kitchen.prep_time_sum(), 10);
        assert_eq!(kitchen.elaborate_dish_count(), 0);
    }

    #[test]
    fn test_elaborate_needs_both_thresholds() {
        assert!(is_elaborate(&dish("A", 5, 60, CuisineType::Other)));
        assert!(!is_elaborate(&dish("B", 4, 120, CuisineType::Other)));
        assert!(!is_elaborate(&dish("C", 8, 59, CuisineType::Other)));
    }

    #[test]
    fn test_averages_and_percentages() {
        let mut kitchen = Kitchen::new();
        assert_eq!(kitchen.average_prep_time(), 0);
        assert_eq!(kitchen.elaborate_percentage(), 0.0);

        kitchen.new_order(dish("A", 5, 60, CuisineType::French));
        kitchen.new_order(dish("B", 1, 10, CuisineType::French));
        kitchen.new_order(dish("C", 1, 11, CuisineType::Indian));

        // 81 / 3 = 27
        assert_eq!(kitchen.average_prep_time(), 27);
        // 33.333.. rounds up to 33.34
        assert_eq!(kitchen.elaborate_percentage(), 33.34);
        assert_eq!(kitchen.tally_cuisine(CuisineType::French), 2);
        assert_eq!(kitchen.tally_cuisine(CuisineType::Chinese), 0);
    }

    #[test]
    fn test_release_dishes() {
        let mut kitchen = Kitchen::new();
        kitchen.new_order(dish("A", 1, 5, CuisineType::Mexican));
        kitchen.new_order(dish("B", 1, 50, CuisineType::Mexican));
        kitchen.new_order(dish("C", 1, 8, CuisineType::Italian));
        kitchen.new_order(dish("D", 1, 70, CuisineType::Chinese));

        assert_eq!(kitchen.release_dishes_below_prep_time(10), 2);
        assert_eq!(kitchen.prep_time_sum(), 120);
        assert_eq!(kitchen.release_dishes_of_cuisine(CuisineType::Mexican), 1);
        assert_eq!(kitchen.release_dishes_of_cuisine(CuisineType::French), 0);
        assert_eq!(kitchen.dishes()[0].name(), "D");
    }

    #[test]
    fn test_report_display() {
        let mut kitchen = Kitchen::new();
        kitchen.new_order(dish("Pho", 5, 60, CuisineType::Other));
        kitchen.new_order(dish("Curry", 2, 41, CuisineType::Indian));

        let expected = "ITALIAN: 0\n\
                        MEXICAN: 0\n\
                        CHINESE: 0\n\
                        INDIAN: 1\n\
                        AMERICAN: 0\n\
                        FRENCH: 0\n\
                        OTHER: 1\n\
                        AVERAGE PREP TIME: 51\n\
                        ELABORATE DISHES: 50.00%\n";
        assert_eq!(kitchen.report().to_string(), expected);
    }

    #[test]
    fn test_from_queue() {
        let mut manager = StationManager::new();
        manager.add_dish_to_queue(dish("Soup", 1, 20, CuisineType::French)).unwrap();
        manager.add_dish_to_queue(dish("Soup", 1, 20, CuisineType::French)).unwrap();
        manager.add_dish_to_queue(dish("Rice", 1, 10, CuisineType::Chinese)).unwrap();

        let kitchen = Kitchen::from(&manager);
        assert_eq!(kitchen.len(), 2);
        assert_eq!(kitchen.prep_time_sum(), 30);
    }
}
