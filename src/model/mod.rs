pub mod bounds;
pub mod inventory;
pub mod reaction;
pub mod shelves;
