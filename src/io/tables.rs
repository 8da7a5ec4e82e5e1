// src/io/tables.rs

//! Helpers for the storage collaborator that owns the relational schema.

/// Stable partition pushing `allowed_` reference tables behind data tables.
///
/// Data tables carry foreign keys into the `allowed_*` enumerations, so a
/// teardown must drop them first. Order within each partition is preserved.
pub fn move_allowed_tables_to_end<S: AsRef<str>>(table_names: &[S]) -> Vec<String> {
    let (reference, data): (Vec<&str>, Vec<&str>) = table_names
        .iter()
        .map(|name| name.as_ref())
        .partition(|name| name.contains("allowed_"));
    data.into_iter()
        .chain(reference)
        .map(str::to_string)
        .collect()
}
