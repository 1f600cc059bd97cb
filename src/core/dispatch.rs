use crate::core::manager::StationManager;
use crate::core::queue::Order;
use crate::core::types::OrderId;
use log::{debug, info, warn};

/// An order that left the queue during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedOrder {
    pub order_id: OrderId,
    pub dish_name: String,
    pub station: String,
    /// Whether backup stock had to be drawn first
    pub replenished: bool,
}

/// Units moved from the backup pool into a station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupDraw {
    pub station: String,
    pub ingredient: String,
    pub quantity: u32,
}

/// What happened during one `process_all_dishes` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub prepared: Vec<PreparedOrder>,
    /// Orders carried into the next pass, in queue order
    pub unprepared: Vec<OrderId>,
    pub draws: Vec<BackupDraw>,
}

impl PassReport {
    pub fn prepared_count(&self) -> usize {
        self.prepared.len()
    }

    pub fn unprepared_count(&self) -> usize {
        self.unprepared.len()
    }

    /// Total units of `ingredient` drawn from backup during the pass
    pub fn drawn_total(&self, ingredient: &str) -> u32 {
        self.draws
            .iter()
            .filter(|draw| draw.ingredient == ingredient)
            .map(|draw| draw.quantity)
            .sum()
    }
}

/// How a single station handled an order
enum StationAttempt {
    NotRegistered,
    Prepared { replenished: bool },
    Failed,
}

impl StationManager {
    /// Run every queued order through the stations once.
    ///
    /// Orders are taken in FIFO order and stations are tried in registry
    /// order. A station that has the dish registered but lacks stock is topped
    /// up from backup when the backup can cover every shortfall, then gets one
    /// more attempt. Orders no station could prepare are kept, in their
    /// original relative order, as the queue for the next pass.
    pub fn process_all_dishes(&mut self) -> PassReport {
        let mut report = PassReport::default();
        let mut unprepared: Vec<Order> = Vec::new();

        while let Some(order) = self.queue.pop_front() {
            info!("PREPARING DISH: {}", order.dish_name());

            match self.dispatch_order(&order, &mut report) {
                Some((station, replenished)) => report.prepared.push(PreparedOrder {
                    order_id: order.id(),
                    dish_name: order.dish_name().to_string(),
                    station,
                    replenished,
                }),
                None => {
                    info!("{} was not prepared.", order.dish_name());
                    report.unprepared.push(order.id());
                    unprepared.push(order);
                }
            }
        }

        self.queue.replace(unprepared);
        info!(
            "All dishes have been processed: {} prepared, {} still queued",
            report.prepared_count(),
            report.unprepared_count()
        );
        report
    }

    /// Try each station in turn; returns the station that prepared the order
    fn dispatch_order(&mut self, order: &Order, report: &mut PassReport) -> Option<(String, bool)> {
        for index in 0..self.registry.len() {
            let attempt = self.attempt_at_station(index, order.dish_name(), report);
            let station_name = self.registry.get(index)?.name().to_string();

            match attempt {
                StationAttempt::Prepared { replenished } => {
                    info!("{}: Successfully prepared {}.", station_name, order.dish_name());
                    return Some((station_name, replenished));
                }
                StationAttempt::NotRegistered => {
                    debug!("{}: Dish not available. Moving to next station...", station_name);
                }
                StationAttempt::Failed => {
                    debug!("{}: Failed to prepare {}.", station_name, order.dish_name());
                }
            }
        }
        None
    }

    fn attempt_at_station(&mut self, index: usize, dish_name: &str, report: &mut PassReport) -> StationAttempt {
        let Some(station) = self.registry.get_mut(index) else {
            return StationAttempt::Failed;
        };
        debug!("{}: attempting to prepare {}...", station.name(), dish_name);

        let Some(shortfalls) = station.shortfalls(dish_name) else {
            return StationAttempt::NotRegistered;
        };

        if shortfalls.is_empty() {
            return if station.prepare_dish(dish_name) {
                StationAttempt::Prepared { replenished: false }
            } else {
                StationAttempt::Failed
            };
        }

        info!("{}: Insufficient ingredients. Replenishing ingredients...", station.name());
        // Draws that succeed before a failure stay at the station
        for (ingredient, quantity) in shortfalls {
            if !self.backup.draw_into(station, &ingredient, quantity) {
                warn!(
                    "{}: Unable to replenish ingredients. Failed to prepare {}.",
                    station.name(),
                    dish_name
                );
                return StationAttempt::Failed;
            }
            report.draws.push(BackupDraw {
                station: station.name().to_string(),
                ingredient,
                quantity,
            });
        }
        info!("{}: Ingredients replenished.", station.name());

        // One retry per station per order
        if station.prepare_dish(dish_name) {
            StationAttempt::Prepared { replenished: true }
        } else {
            StationAttempt::Failed
        }
    }
}
