//! Persisted user state.

pub mod repository;

pub use repository::{
    InMemoryKeyValueStore, KeyValueStore, LANGUAGE_KEY, SELECTED_PRODUCTS_KEY, StateStore,
};
