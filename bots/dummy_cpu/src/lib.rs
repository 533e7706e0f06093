mod advisor;
mod bot;

pub use advisor::*;
pub use bot::*;
