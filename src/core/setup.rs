//! Loading a kitchen (stations, backup pool, menu) from TOML

use crate::core::config::DispatchConfig;
use crate::core::dish::Dish;
use crate::core::errors::{KitchenError, KitchenResult};
use crate::core::ingredient::IngredientRecord;
use crate::core::manager::StationManager;
use crate::core::station::Station;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenSetup {
    pub config: DispatchConfig,
    pub stations: Vec<Station>,
    pub backup: Vec<IngredientRecord>,
    /// Dishes customers can order; defaults to every station recipe when empty
    pub menu: Vec<Dish>,
}

impl KitchenSetup {
    pub fn from_toml_str(source: &str) -> KitchenResult<Self> {
        toml::from_str(source).map_err(|err| KitchenError::config_error(err.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> KitchenResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|err| KitchenError::config_error(format!("{}: {}", path.display(), err)))?;
        Self::from_toml_str(&source)
    }

    /// The configured menu, or every distinct station recipe if none is given
    pub fn menu(&self) -> Vec<Dish> {
        if !self.menu.is_empty() {
            return self.menu.clone();
        }
        let mut menu: Vec<Dish> = Vec::new();
        for dish in self.stations.iter().flat_map(|station| station.dishes()) {
            if !menu.iter().any(|known| known.name() == dish.name()) {
                menu.push(dish.clone());
            }
        }
        menu
    }

    /// Build a manager with every station registered and the backup pool loaded
    pub fn build(self) -> KitchenResult<StationManager> {
        let mut manager = StationManager::with_config(self.config);
        for station in self.stations {
            manager.add_station(station)?;
        }
        if !self.backup.is_empty() {
            manager.add_backup_ingredients(self.backup)?;
        }
        info!(
            "Kitchen ready: {} stations, {} backup ingredients",
            manager.registry().len(),
            manager.backup().len()
        );
        Ok(manager)
    }
}
