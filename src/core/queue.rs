use crate::core::dish::{DietaryRequest, Dish};
use crate::core::errors::{KitchenError, KitchenResult};
use crate::core::types::OrderId;
use std::collections::VecDeque;
use std::fmt;

/// A dish waiting to be prepared
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    dish: Dish,
}

impl Order {
    pub fn new(dish: Dish) -> Self {
        Self { id: OrderId::new(), dish }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn dish_name(&self) -> &str {
        self.dish.name()
    }
}

/// FIFO queue of pending orders
#[derive(Debug, Clone, Default)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dish at the back of the queue
    pub fn enqueue(&mut self, dish: Dish) -> KitchenResult<OrderId> {
        if !dish.is_valid() {
            return Err(KitchenError::InvalidDish);
        }
        let order = Order::new(dish);
        let id = order.id();
        self.orders.push_back(order);
        Ok(id)
    }

    /// Apply dietary accommodations once, then append
    pub fn enqueue_with_dietary_request(
        &mut self,
        mut dish: Dish,
        request: &DietaryRequest,
    ) -> KitchenResult<OrderId> {
        if !dish.is_valid() {
            return Err(KitchenError::InvalidDish);
        }
        if !request.is_empty() {
            dish.dietary_accommodations(request);
        }
        self.enqueue(dish)
    }

    /// Re-append an order that already has an identity
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Replace every queued order with `orders`, dropping the old contents
    pub fn replace(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.orders = orders.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Queued dish names, front first
    pub fn dish_names(&self) -> Vec<&str> {
        self.orders.iter().map(|order| order.dish_name()).collect()
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.iter().any(|order| order.id() == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<Order> for OrderQueue {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OrderQueue {
    type Item = &'a Order;
    type IntoIter = std::collections::vec_deque::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

/// One dish name per line, front of the queue first
impl fmt::Display for OrderQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in &self.orders {
            writeln!(f, "{}", order.dish_name())?;
        }
        Ok(())
    }
}
