pub mod core;

// Re-export commonly used types
pub use crate::core::backup::BackupInventory;
pub use crate::core::config::{ConcurrencyMode, DispatchConfig};
pub use crate::core::dish::{CuisineType, DietaryRequest, Dish, DishKind};
pub use crate::core::dispatch::{BackupDraw, PassReport, PreparedOrder};
pub use crate::core::errors::{KitchenError, KitchenResult};
pub use crate::core::ingredient::{IngredientRecord, Stock};
pub use crate::core::kitchen::{Kitchen, KitchenReport};
pub use crate::core::manager::{PrepareOutcome, StationManager};
pub use crate::core::queue::{Order, OrderQueue};
pub use crate::core::readiness::OrderReadiness;
pub use crate::core::registry::StationRegistry;
pub use crate::core::rush::OrderGenerator;
pub use crate::core::setup::KitchenSetup;
pub use crate::core::station::Station;
pub use crate::core::types::OrderId;
