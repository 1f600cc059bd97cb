use serde::{Deserialize, Serialize};

/// A named stock entry
///
/// The same record type is used for a dish's recipe line (where
/// `required_quantity` is the demand per dish) and for stock held by a
/// station or the backup pool (where `quantity` is what is on hand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    /// Units on hand
    #[serde(default)]
    pub quantity: u32,
    /// Units needed to prepare one dish
    #[serde(default)]
    pub required_quantity: u32,
    /// Price per unit
    #[serde(default)]
    pub price: f64,
}

impl IngredientRecord {
    pub fn new(name: impl Into<String>, quantity: u32, required_quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            required_quantity,
            price,
        }
    }
}

/// An ordered, name-keyed collection of ingredient records
///
/// Holds at most one record per name: adding a record whose name is already
/// present merges the quantity into the existing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<IngredientRecord>", into = "Vec<IngredientRecord>")]
pub struct Stock {
    records: Vec<IngredientRecord>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stock from records, merging duplicate names
    pub fn from_records(records: impl IntoIterator<Item = IngredientRecord>) -> Self {
        let mut stock = Self::new();
        for record in records {
            stock.merge(record);
        }
        stock
    }

    pub fn records(&self) -> &[IngredientRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name == name)
    }

    /// Units on hand for `name`, zero when absent
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.get(name).map(|record| record.quantity).unwrap_or(0)
    }

    /// Add a record, merging its quantity into an existing entry of the same name.
    ///
    /// The existing entry keeps its price and required quantity.
    pub fn merge(&mut self, record: IngredientRecord) {
        match self.records.iter_mut().find(|existing| existing.name == record.name) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(record.quantity),
            None => self.records.push(record),
        }
    }

    /// Remove `amount` units of `name`, dropping the record once it reaches zero.
    ///
    /// Returns false without touching the stock if there is not enough on hand.
    pub fn deduct(&mut self, name: &str, amount: u32) -> bool {
        let Some(index) = self.position(name) else {
            return false;
        };
        let record = &mut self.records[index];
        if record.quantity < amount {
            return false;
        }
        record.quantity -= amount;
        if record.quantity == 0 {
            self.records.remove(index);
        }
        true
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl From<Vec<IngredientRecord>> for Stock {
    fn from(records: Vec<IngredientRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<Stock> for Vec<IngredientRecord> {
    fn from(stock: Stock) -> Self {
        stock.records
    }
}

impl<'a> IntoIterator for &'a Stock {
    type Item = &'a IngredientRecord;
    type IntoIter = std::slice::Iter<'a, IngredientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Move `amount` units of `name` from `source` into `destination` as one step.
///
/// The record inserted into `destination` carries the source price and a
/// required quantity of zero. Returns false, leaving both sides untouched, when
/// `source` has no such record or holds fewer than `amount` units.
pub fn transfer(source: &mut Stock, destination: &mut Stock, name: &str, amount: u32) -> bool {
    let Some(record) = source.get(name) else {
        return false;
    };
    if record.quantity < amount {
        return false;
    }
    if amount == 0 {
        return true;
    }

    let moved = IngredientRecord::new(record.name.clone(), amount, 0, record.price);
    if !source.deduct(name, amount) {
        return false;
    }
    destination.merge(moved);
    true
}
