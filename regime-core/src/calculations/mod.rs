//! Tax computation modules for the regime comparison engine.
//!
//! Individual and business calculations share the slab catalog, the cess
//! rule and the boundary rounding helpers.

pub mod business;
pub mod cess;
pub mod common;
pub mod individual;

pub use business::{BusinessTaxCalculator, BusinessTaxError};
pub use individual::{IndividualTaxCalculator, IndividualTaxError};
