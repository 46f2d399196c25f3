mod data_source;
mod resource;

pub use data_source::*;
pub use resource::*;
