//! Serde round trips of `mrarray` arrays through several data formats; see
//! `tests/serialize.rs`.
