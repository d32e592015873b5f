mod builder;
mod model;
mod models;

pub use builder::*;
pub use model::*;
pub use models::*;
