pub mod arch;
pub mod config;
pub mod console;
pub mod error;
pub mod initialization;
pub mod output;
pub mod params;
pub mod scheduling;
pub mod tensor;

pub use error::{EsrlErr, Result};
