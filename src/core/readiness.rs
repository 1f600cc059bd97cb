use crate::core::config::ConcurrencyMode;
use crate::core::manager::StationManager;
use crate::core::queue::Order;
use crate::core::registry::StationRegistry;
use crate::core::types::OrderId;
use log::warn;
use rayon::prelude::*;

/// Stations able to prepare one queued order from their current stock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReadiness {
    pub order_id: OrderId,
    pub dish_name: String,
    /// In registry order
    pub ready_stations: Vec<String>,
}

impl OrderReadiness {
    pub fn is_ready(&self) -> bool {
        !self.ready_stations.is_empty()
    }
}

fn evaluate(registry: &StationRegistry, order: &Order) -> OrderReadiness {
    OrderReadiness {
        order_id: order.id(),
        dish_name: order.dish_name().to_string(),
        ready_stations: registry
            .iter()
            .filter(|station| station.can_complete_order(order.dish_name()))
            .map(|station| station.name().to_string())
            .collect(),
    }
}

impl StationManager {
    /// Which stations could serve each queued order right now, without backup.
    ///
    /// Read-only. Entries follow queue order in both concurrency modes.
    pub fn readiness_report(&self) -> Vec<OrderReadiness> {
        let orders: Vec<&Order> = self.queue.iter().collect();
        let registry = &self.registry;

        match self.config.concurrency_mode {
            ConcurrencyMode::Sequential => orders.iter().map(|order| evaluate(registry, order)).collect(),
            ConcurrencyMode::Rayon => {
                let run = || {
                    orders
                        .par_iter()
                        .map(|order| evaluate(registry, order))
                        .collect::<Vec<_>>()
                };
                match self.config.thread_pool_size {
                    Some(size) => match rayon::ThreadPoolBuilder::new().num_threads(size).build() {
                        Ok(pool) => pool.install(run),
                        Err(err) => {
                            warn!("Falling back to the global thread pool: {}", err);
                            run()
                        }
                    },
                    None => run(),
                }
            }
        }
    }
}
