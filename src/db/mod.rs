pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;
