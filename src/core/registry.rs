use crate::core::errors::{KitchenError, KitchenResult};
use crate::core::station::Station;
use log::debug;

/// Ordered collection of stations; dispatch consults them front to back
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Stations in dispatch order
    stations: Vec<Station>,
    /// Optional upper bound on the number of stations
    capacity: Option<usize>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that refuses stations beyond `capacity`
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            stations: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Append a station at the end of the dispatch order
    pub fn add(&mut self, station: Station) -> KitchenResult<()> {
        if let Some(capacity) = self.capacity {
            if self.stations.len() >= capacity {
                return Err(KitchenError::RegistryFull { capacity });
            }
        }
        if self.contains(station.name()) {
            return Err(KitchenError::DuplicateStation(station.name().to_string()));
        }

        debug!("Registered station '{}' at position {}", station.name(), self.stations.len());
        self.stations.push(station);
        Ok(())
    }

    /// Remove a station by name, handing it back to the caller
    pub fn remove(&mut self, name: &str) -> Option<Station> {
        let index = self.index_of(name)?;
        Some(self.stations.remove(index))
    }

    pub fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Station> {
        self.stations.iter_mut().find(|station| station.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Position of a station in the dispatch order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.stations.iter().position(|station| station.name() == name)
    }

    /// Move a station to the front, keeping everyone else in order
    pub fn move_to_front(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(0) => true,
            Some(index) => {
                let station = self.stations.remove(index);
                self.stations.insert(0, station);
                true
            }
            None => false,
        }
    }

    /// Fold station `source` into station `target` and drop `source`.
    ///
    /// Dishes go through the target's assign (duplicates are skipped) and stock
    /// through its replenish (quantities merge). Nothing changes unless both
    /// stations exist and are distinct.
    pub fn merge_stations(&mut self, target: &str, source: &str) -> bool {
        if target == source || !self.contains(target) {
            return false;
        }
        let Some(absorbed) = self.remove(source) else {
            return false;
        };
        let Some(station) = self.find_mut(target) else {
            return false;
        };

        for dish in absorbed.dishes() {
            station.assign_dish(dish.clone());
        }
        for record in absorbed.stock() {
            station.replenish(record.clone());
        }
        debug!("Merged station '{}' into '{}'", source, target);
        true
    }

    /// Station names in dispatch order
    pub fn names(&self) -> Vec<&str> {
        self.stations.iter().map(|station| station.name()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Station> {
        self.stations.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Station> {
        self.stations.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.stations.clear();
    }
}

impl<'a> IntoIterator for &'a StationRegistry {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dish::Dish;
    use crate::core::ingredient::IngredientRecord;

    fn registry_of(names: &[&str]) -> StationRegistry {
        let mut registry = StationRegistry::new();
        for name in names {
            registry.add(Station::new(*name)).unwrap();
        }
        registry
    }

    #[test]
    fn test_add_rejects_duplicate_names() {
        let mut registry = registry_of(&["Grill"]);
        let err = registry.add(Station::new("Grill")).unwrap_err();
        assert_eq!(err, KitchenError::DuplicateStation("Grill".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_capacity_limit() {
        let mut registry = StationRegistry::with_capacity_limit(1);
        registry.add(Station::new("Grill")).unwrap();
        assert_eq!(
            registry.add(Station::new("Oven")),
            Err(KitchenError::RegistryFull { capacity: 1 })
        );
    }

    #[test]
    fn test_remove_and_find() {
        let mut registry = registry_of(&["Grill", "Oven"]);
        assert!(registry.find("Oven").is_some());

        let removed = registry.remove("Oven").unwrap();
        assert_eq!(removed.name(), "Oven");
        assert!(registry.find("Oven").is_none());
        assert!(registry.remove("Oven").is_none());
    }

    #[test]
    fn test_move_to_front_keeps_relative_order() {
        let mut registry = registry_of(&["A", "B", "C"]);

        assert!(registry.move_to_front("C"));
        assert_eq!(registry.names(), vec!["C", "A", "B"]);

        assert!(registry.move_to_front("C"));
        assert_eq!(registry.names(), vec!["C", "A", "B"]);

        assert!(!registry.move_to_front("D"));
        assert_eq!(registry.names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_merge_moves_dishes_and_stock() {
        let mut registry = StationRegistry::new();
        let mut grill = Station::new("Grill");
        grill.assign_dish(Dish::new("Burger", vec![]));
        grill.replenish(IngredientRecord::new("Salt", 1, 0, 0.5));
        let mut fryer = Station::new("Fryer");
        fryer.assign_dish(Dish::new("Burger", vec![]));
        fryer.assign_dish(Dish::new("Fries", vec![]));
        fryer.replenish(IngredientRecord::new("Salt", 2, 0, 0.5));
        fryer.replenish(IngredientRecord::new("Potato", 4, 0, 0.2));
        registry.add(grill).unwrap();
        registry.add(fryer).unwrap();

        assert!(registry.merge_stations("Grill", "Fryer"));

        assert_eq!(registry.names(), vec!["Grill"]);
        let grill = registry.find("Grill").unwrap();
        assert_eq!(grill.dishes().len(), 2);
        assert_eq!(grill.stock().quantity_of("Salt"), 3);
        assert_eq!(grill.stock().quantity_of("Potato"), 4);
    }

    #[test]
    fn test_merge_requires_both_stations() {
        let mut registry = registry_of(&["Grill", "Oven"]);
        assert!(!registry.merge_stations("Grill", "Wok"));
        assert!(!registry.merge_stations("Wok", "Grill"));
        assert!(!registry.merge_stations("Grill", "Grill"));
        assert_eq!(registry.names(), vec!["Grill", "Oven"]);
    }
}
