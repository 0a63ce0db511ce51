mod linear;

pub use linear::linear_search;
