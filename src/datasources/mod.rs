pub mod files;

pub use files::{load_plan_request, load_reference_et0, load_weather, DataFormat};
