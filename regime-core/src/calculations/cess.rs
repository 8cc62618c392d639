//! Health-and-education cess.
//!
//! A flat surcharge applied uniformly to every regime's slab tax and to
//! every business branch before amounts are compared or rounded. Rate
//! changes (or future surcharge tiers) touch this module only.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat health-and-education cess rate (4%).
pub const CESS_RATE: Decimal = dec!(0.04);

/// Applies the cess to a computed slab tax.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::cess::with_cess;
///
/// assert_eq!(with_cess(dec!(22500)), dec!(23400));
/// ```
pub fn with_cess(tax: Decimal) -> Decimal {
    tax * (Decimal::ONE + CESS_RATE)
}
