//! Compounding projection engine with inflation-adjusted output

mod deflator;
mod engine;
mod inputs;
mod rates;
mod result;
pub mod presets;

pub use deflator::real_series;
pub use engine::project;
pub use inputs::{RateMode, SimulationInputs, ValidationError, Violation, MAX_HORIZON_MONTHS};
pub use rates::{
    effective_annual_to_effective_monthly, nominal_annual_to_effective_annual,
    resolve_monthly_rate, NonPositiveCompounding,
};
pub use result::{SimulationResult, Summary};
