mod build;
mod normalize;

pub use build::*;
pub use normalize::*;
