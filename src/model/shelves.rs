// src/model/shelves.rs

use crate::error::PricingError;
use serde::Serialize;

/// One display slot. `slot` holds item and price together or nothing at all;
/// there is no representable half-stocked state.
#[derive(Debug, Clone)]
pub struct Shelf {
    pub id: usize,
    slot: Option<(String, i64)>,
}

impl Shelf {
    pub fn is_occupied(&self) -> bool {
        self.slot.is_some()
    }

    pub fn contents(&self) -> Option<(&str, i64)> {
        self.slot.as_ref().map(|(item, price)| (item.as_str(), *price))
    }
}

/// Append-only record of one stock/empty transition.
#[derive(Debug, Clone, Serialize)]
pub struct ShelfTransition {
    pub shelf_id: usize,
    pub item: Option<String>,
    pub price: Option<i64>,
}

/// Fixed set of shelves plus the full transition history.
///
/// Emptying and restocking are separate sequential operations; there is no
/// combined swap. The simulation loop is the sole caller of the mutators.
#[derive(Debug)]
pub struct ShelfRegistry {
    shelves: Vec<Shelf>,
    history: Vec<ShelfTransition>,
}

impl ShelfRegistry {
    pub fn new(shelf_count: usize) -> Self {
        let shelves = (0..shelf_count)
            .map(|id| Shelf { id, slot: None })
            .collect();
        Self {
            shelves,
            history: Vec::new(),
        }
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Ids of empty shelves, ascending.
    pub fn empty_ids(&self) -> Vec<usize> {
        self.shelves
            .iter()
            .filter(|s| !s.is_occupied())
            .map(|s| s.id)
            .collect()
    }

    /// Ids of occupied shelves, ascending.
    pub fn occupied_ids(&self) -> Vec<usize> {
        self.shelves
            .iter()
            .filter(|s| s.is_occupied())
            .map(|s| s.id)
            .collect()
    }

    pub fn any_occupied(&self) -> bool {
        self.shelves.iter().any(Shelf::is_occupied)
    }

    pub fn contents(&self, shelf_id: usize) -> Result<Option<(&str, i64)>, PricingError> {
        self.shelf(shelf_id).map(Shelf::contents)
    }

    /// EMPTY -> OCCUPIED. The caller decrements inventory first.
    pub fn stock(&mut self, shelf_id: usize, item: &str, price: i64) -> Result<(), PricingError> {
        let shelf = self.shelf_mut(shelf_id)?;
        if shelf.is_occupied() {
            return Err(PricingError::InvariantViolation(format!(
                "shelf {} restocked while occupied",
                shelf_id
            )));
        }
        shelf.slot = Some((item.to_string(), price));
        self.history.push(ShelfTransition {
            shelf_id,
            item: Some(item.to_string()),
            price: Some(price),
        });
        Ok(())
    }

    /// OCCUPIED -> EMPTY. Returns what was on the shelf.
    pub fn clear(&mut self, shelf_id: usize) -> Result<(String, i64), PricingError> {
        let shelf = self.shelf_mut(shelf_id)?;
        let Some((item, price)) = shelf.slot.take() else {
            return Err(PricingError::InvariantViolation(format!(
                "shelf {} emptied while already empty",
                shelf_id
            )));
        };
        self.history.push(ShelfTransition {
            shelf_id,
            item: None,
            price: None,
        });
        Ok((item, price))
    }

    /// Full transition history, oldest first.
    pub fn history(&self) -> &[ShelfTransition] {
        &self.history
    }

    fn shelf(&self, shelf_id: usize) -> Result<&Shelf, PricingError> {
        self.shelves.get(shelf_id).ok_or_else(|| {
            PricingError::InvariantViolation(format!("unknown shelf id {}", shelf_id))
        })
    }

    fn shelf_mut(&mut self, shelf_id: usize) -> Result<&mut Shelf, PricingError> {
        self.shelves.get_mut(shelf_id).ok_or_else(|| {
            PricingError::InvariantViolation(format!("unknown shelf id {}", shelf_id))
        })
    }
}
