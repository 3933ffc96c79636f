mod bucket;
pub mod hash;
pub mod hash_table_base;

pub use hash::polynomial_hash;
pub use hash_table_base::*;
