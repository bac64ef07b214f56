pub mod agronomy;
pub mod plan;
pub mod recommendation;
pub mod weather;

pub use agronomy::*;
pub use plan::*;
pub use recommendation::*;
pub use weather::*;
