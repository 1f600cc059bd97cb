use crate::core::errors::{KitchenError, KitchenResult};
use crate::core::ingredient::{self, IngredientRecord, Stock};
use crate::core::station::Station;
use log::{debug, warn};

/// Shared pool of ingredients used to top up station stock
#[derive(Debug, Clone, Default)]
pub struct BackupInventory {
    stock: Stock,
}

impl BackupInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole pool with `records`.
    ///
    /// Zero-quantity records are skipped. A batch with nothing left to hold is
    /// rejected and the pool is left as it was; use [`BackupInventory::add_one`]
    /// to grow the pool incrementally.
    pub fn add_batch(&mut self, records: Vec<IngredientRecord>) -> KitchenResult<()> {
        let stocked: Vec<IngredientRecord> = records
            .into_iter()
            .filter(|record| record.quantity > 0)
            .collect();
        if stocked.is_empty() {
            return Err(KitchenError::EmptyBackupBatch);
        }
        self.stock = Stock::from_records(stocked);
        Ok(())
    }

    /// Add one record, merging its quantity into an existing entry of the same name.
    ///
    /// A zero-quantity record adds nothing.
    pub fn add_one(&mut self, record: IngredientRecord) {
        if record.quantity == 0 {
            return;
        }
        self.stock.merge(record);
    }

    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Move `quantity` units of `ingredient` from the pool into `station`.
    ///
    /// Fails without side effects when the pool has no such ingredient or not
    /// enough of it. The backup record is removed once it runs out.
    pub fn draw_into(&mut self, station: &mut Station, ingredient: &str, quantity: u32) -> bool {
        let available = self.stock.quantity_of(ingredient);
        let station_name = station.name().to_string();

        if !ingredient::transfer(&mut self.stock, station.stock_mut(), ingredient, quantity) {
            warn!(
                "{}: backup cannot supply {} x{} ({} available)",
                station_name, ingredient, quantity, available
            );
            return false;
        }
        debug!("{}: drew {} x{} from backup", station_name, ingredient, quantity);
        true
    }

    pub fn records(&self) -> &[IngredientRecord] {
        self.stock.records()
    }

    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.stock.get(name)
    }

    /// Units held for `name`, zero when absent
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.stock.quantity_of(name)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}
