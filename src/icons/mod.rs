pub mod catalog;
pub mod lookup;
pub mod normalize;
pub mod path;
