mod request_ctx;
mod response_ctx;
mod segments;

pub use request_ctx::*;
pub use response_ctx::*;
pub use segments::*;
