pub mod pair;
pub mod polygon;
