mod entities;
mod presenter;
mod settings;

pub use entities::*;
pub use presenter::*;
pub use settings::*;
