use crate::core::dish::{DietaryRequest, Dish};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces a reproducible stream of orders picked from a menu
pub struct OrderGenerator {
    menu: Vec<Dish>,
    rng: StdRng,
    /// Chance (0.0..=1.0) that an order carries a dietary request
    dietary_rate: f64,
}

impl OrderGenerator {
    pub fn new(menu: Vec<Dish>, seed: u64) -> Self {
        Self {
            menu,
            rng: StdRng::seed_from_u64(seed),
            dietary_rate: 0.0,
        }
    }

    pub fn with_dietary_rate(mut self, rate: f64) -> Self {
        self.dietary_rate = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
        self
    }

    pub fn menu(&self) -> &[Dish] {
        &self.menu
    }

    /// Next order, or `None` when the menu is empty
    pub fn next_order(&mut self) -> Option<(Dish, Option<DietaryRequest>)> {
        if self.menu.is_empty() {
            return None;
        }
        let dish = self.menu[self.rng.gen_range(0..self.menu.len())].clone();
        let request = if self.rng.gen_bool(self.dietary_rate) {
            Some(self.random_request())
        } else {
            None
        };
        Some((dish, request))
    }

    /// Up to `count` orders
    pub fn batch(&mut self, count: usize) -> Vec<(Dish, Option<DietaryRequest>)> {
        (0..count).map_while(|_| self.next_order()).collect()
    }

    fn random_request(&mut self) -> DietaryRequest {
        DietaryRequest {
            vegetarian: self.rng.gen_bool(0.3),
            vegan: self.rng.gen_bool(0.1),
            gluten_free: self.rng.gen_bool(0.2),
            nut_free: self.rng.gen_bool(0.2),
            low_sodium: self.rng.gen_bool(0.2),
            low_sugar: self.rng.gen_bool(0.2),
        }
    }
}
