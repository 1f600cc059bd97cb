use crate::core::backup::BackupInventory;
use crate::core::config::DispatchConfig;
use crate::core::dish::{DietaryRequest, Dish};
use crate::core::errors::KitchenResult;
use crate::core::ingredient::IngredientRecord;
use crate::core::queue::{Order, OrderQueue};
use crate::core::registry::StationRegistry;
use crate::core::station::Station;
use crate::core::types::OrderId;
use log::{debug, info};

/// Owns the stations, the backup pool and the order queue, and dispatches
/// orders between them.
///
/// Every mutating operation takes `&mut self`, so a dispatch pass always has
/// exclusive access to station stock and the backup pool.
#[derive(Debug, Clone, Default)]
pub struct StationManager {
    pub(crate) registry: StationRegistry,
    pub(crate) backup: BackupInventory,
    pub(crate) queue: OrderQueue,
    pub(crate) config: DispatchConfig,
}

/// Result of taking a single order off the queue
#[derive(Debug, Clone, PartialEq)]
pub enum PrepareOutcome {
    Prepared { order: Order, station: String },
    Unserved(Order),
}

impl PrepareOutcome {
    pub fn is_prepared(&self) -> bool {
        matches!(self, PrepareOutcome::Prepared { .. })
    }

    pub fn order(&self) -> &Order {
        match self {
            PrepareOutcome::Prepared { order, .. } | PrepareOutcome::Unserved(order) => order,
        }
    }

    pub fn into_order(self) -> Order {
        match self {
            PrepareOutcome::Prepared { order, .. } | PrepareOutcome::Unserved(order) => order,
        }
    }
}

impl StationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        let registry = match config.max_stations {
            Some(capacity) => StationRegistry::with_capacity_limit(capacity),
            None => StationRegistry::new(),
        };
        Self {
            registry,
            backup: BackupInventory::new(),
            queue: OrderQueue::new(),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    pub fn backup(&self) -> &BackupInventory {
        &self.backup
    }

    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    // Stations

    pub fn add_station(&mut self, station: Station) -> KitchenResult<()> {
        self.registry.add(station)
    }

    pub fn remove_station(&mut self, name: &str) -> Option<Station> {
        self.registry.remove(name)
    }

    pub fn find_station(&self, name: &str) -> Option<&Station> {
        self.registry.find(name)
    }

    pub fn find_station_mut(&mut self, name: &str) -> Option<&mut Station> {
        self.registry.find_mut(name)
    }

    pub fn move_station_to_front(&mut self, name: &str) -> bool {
        self.registry.move_to_front(name)
    }

    /// Fold station `source` into station `target`; see [`StationRegistry::merge_stations`]
    pub fn merge_stations(&mut self, target: &str, source: &str) -> bool {
        self.registry.merge_stations(target, source)
    }

    pub fn assign_dish_to_station(&mut self, station_name: &str, dish: Dish) -> bool {
        match self.registry.find_mut(station_name) {
            Some(station) => station.assign_dish(dish),
            None => false,
        }
    }

    pub fn replenish_ingredient_at_station(&mut self, station_name: &str, record: IngredientRecord) -> bool {
        match self.registry.find_mut(station_name) {
            Some(station) => {
                station.replenish(record);
                true
            }
            None => false,
        }
    }

    /// Whether any station could prepare `dish_name` from its current stock
    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        self.registry.iter().any(|station| station.can_complete_order(dish_name))
    }

    pub fn prepare_dish_at_station(&mut self, station_name: &str, dish_name: &str) -> bool {
        match self.registry.find_mut(station_name) {
            Some(station) => station.prepare_dish(dish_name),
            None => false,
        }
    }

    // Backup inventory

    /// Replace the backup pool; an empty batch is rejected
    pub fn add_backup_ingredients(&mut self, records: Vec<IngredientRecord>) -> KitchenResult<()> {
        self.backup.add_batch(records)
    }

    pub fn add_backup_ingredient(&mut self, record: IngredientRecord) {
        self.backup.add_one(record);
    }

    pub fn clear_backup_ingredients(&mut self) {
        self.backup.clear();
    }

    /// Draw `quantity` of `ingredient` from backup into the named station
    pub fn replenish_station_ingredient_from_backup(
        &mut self,
        station_name: &str,
        ingredient: &str,
        quantity: u32,
    ) -> bool {
        match self.registry.find_mut(station_name) {
            Some(station) => self.backup.draw_into(station, ingredient, quantity),
            None => false,
        }
    }

    // Order queue

    pub fn add_dish_to_queue(&mut self, dish: Dish) -> KitchenResult<OrderId> {
        self.queue.enqueue(dish)
    }

    pub fn add_dish_to_queue_with_request(
        &mut self,
        dish: Dish,
        request: &DietaryRequest,
    ) -> KitchenResult<OrderId> {
        self.queue.enqueue_with_dietary_request(dish, request)
    }

    /// Replace the queue contents, dropping whatever was queued before
    pub fn set_dish_queue(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.queue.replace(orders);
    }

    pub fn clear_dish_queue(&mut self) {
        self.queue.clear();
    }

    /// Pop the front order and hand it to the first station that can prepare it
    /// from current stock.
    ///
    /// No backup top-up is attempted. The order leaves the queue either way and
    /// comes back to the caller inside the outcome; `None` if the queue is empty.
    pub fn prepare_next_dish(&mut self) -> Option<PrepareOutcome> {
        let order = self.queue.pop_front()?;

        for station in self.registry.iter_mut() {
            if station.prepare_dish(order.dish_name()) {
                info!("{}: Successfully prepared {}.", station.name(), order.dish_name());
                return Some(PrepareOutcome::Prepared {
                    station: station.name().to_string(),
                    order,
                });
            }
        }

        debug!("{} could not be prepared by any station", order.dish_name());
        Some(PrepareOutcome::Unserved(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::KitchenError;

    fn soup() -> Dish {
        Dish::new("Soup", vec![IngredientRecord::new("Stock", 1, 1, 1.0)])
    }

    fn manager_with_kettle(stock: u32) -> StationManager {
        let mut manager = StationManager::new();
        let mut kettle = Station::new("Kettle");
        kettle.assign_dish(soup());
        if stock > 0 {
            kettle.replenish(IngredientRecord::new("Stock", stock, 0, 1.0));
        }
        manager.add_station(kettle).unwrap();
        manager
    }

    #[test]
    fn test_prepare_next_dish_success() {
        let mut manager = manager_with_kettle(1);
        manager.add_dish_to_queue(soup()).unwrap();

        let outcome = manager.prepare_next_dish().unwrap();
        assert!(outcome.is_prepared());
        assert!(matches!(outcome, PrepareOutcome::Prepared { ref station, .. } if station == "Kettle"));
        assert!(manager.queue().is_empty());
        assert!(manager.prepare_next_dish().is_none());
    }

    #[test]
    fn test_prepare_next_dish_does_not_use_backup() {
        let mut manager = manager_with_kettle(0);
        manager.add_backup_ingredient(IngredientRecord::new("Stock", 5, 0, 1.0));
        let id = manager.add_dish_to_queue(soup()).unwrap();

        let outcome = manager.prepare_next_dish().unwrap();
        assert!(!outcome.is_prepared());
        assert_eq!(outcome.into_order().id(), id);
        assert!(manager.queue().is_empty());
        assert_eq!(manager.backup().quantity_of("Stock"), 5);
    }

    #[test]
    fn test_station_helpers_report_missing_station() {
        let mut manager = manager_with_kettle(1);
        assert!(!manager.assign_dish_to_station("Wok", soup()));
        assert!(!manager.replenish_ingredient_at_station("Wok", IngredientRecord::new("Salt", 1, 0, 0.1)));
        assert!(!manager.prepare_dish_at_station("Wok", "Soup"));
        assert!(!manager.replenish_station_ingredient_from_backup("Wok", "Stock", 1));
    }

    #[test]
    fn test_station_helpers() {
        let mut manager = manager_with_kettle(0);
        assert!(!manager.can_complete_order("Soup"));

        assert!(manager.replenish_ingredient_at_station("Kettle", IngredientRecord::new("Stock", 1, 0, 1.0)));
        assert!(manager.can_complete_order("Soup"));
        assert!(manager.prepare_dish_at_station("Kettle", "Soup"));
        assert!(!manager.can_complete_order("Soup"));

        manager.add_backup_ingredient(IngredientRecord::new("Stock", 2, 0, 1.0));
        assert!(manager.replenish_station_ingredient_from_backup("Kettle", "Stock", 2));
        assert_eq!(manager.find_station("Kettle").unwrap().stock().quantity_of("Stock"), 2);
        assert!(manager.backup().is_empty());
    }

    #[test]
    fn test_capacity_from_config() {
        let mut manager = StationManager::with_config(DispatchConfig::new().with_max_stations(1));
        manager.add_station(Station::new("Grill")).unwrap();
        assert_eq!(
            manager.add_station(Station::new("Oven")),
            Err(KitchenError::RegistryFull { capacity: 1 })
        );
    }

    #[test]
    fn test_backup_batch_guard() {
        let mut manager = StationManager::new();
        manager.add_backup_ingredient(IngredientRecord::new("Salt", 1, 0, 0.1));
        assert!(manager.add_backup_ingredients(Vec::new()).is_err());
        assert_eq!(manager.backup().quantity_of("Salt"), 1);
        manager.clear_backup_ingredients();
        assert!(manager.backup().is_empty());
    }
}
