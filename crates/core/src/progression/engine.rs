//! Revenue progression engine.

use rust_decimal::{Decimal, RoundingStrategy};

use healwise_shared::types::is_valid_percent;

use super::constants::{
    AREA_DISPLAY_DECIMAL_PLACES, AREA_FLOOR, COST_RATE, MAX_INTERACTIVE_TREATMENTS,
    REIMBURSEMENT_RATE,
};
use super::error::ProgressionError;
use super::types::{Progression, ProgressionInput, ProgressionRow, ProgressionTotals};
use crate::pricing::GraftProduct;

/// Engine for projecting treatment revenue over a healing wound.
///
/// Stateless. Every call is independent and returns identical output for
/// identical input.
pub struct ProgressionEngine;

impl ProgressionEngine {
    /// Validates the request, then runs the progression.
    ///
    /// This is the entry point for callers holding unchecked input, such as
    /// a form submission where no product may have been chosen yet.
    pub fn calculate(
        product: Option<&GraftProduct>,
        input: &ProgressionInput,
    ) -> Result<Progression, ProgressionError> {
        let product = product.ok_or(ProgressionError::MissingProduct)?;
        Self::validate(product, input)?;
        Ok(Self::run(product, input))
    }

    /// Checks a product and input pair without computing anything.
    pub fn validate(
        product: &GraftProduct,
        input: &ProgressionInput,
    ) -> Result<(), ProgressionError> {
        if product.unit_price <= Decimal::ZERO {
            return Err(ProgressionError::NonPositiveUnitPrice(product.unit_price));
        }
        if input.initial_area <= Decimal::ZERO {
            return Err(ProgressionError::NonPositiveArea(input.initial_area));
        }
        if input.treatment_count == 0 {
            return Err(ProgressionError::NoTreatments);
        }
        if !is_valid_percent(input.closure_rate_percent) {
            return Err(ProgressionError::InvalidClosureRate(
                input.closure_rate_percent,
            ));
        }
        if !is_valid_percent(input.billing_fee_percent) {
            return Err(ProgressionError::InvalidBillingFee(input.billing_fee_percent));
        }
        if !Self::amounts_fit(product, input) {
            return Err(ProgressionError::AmountOutOfRange {
                area: input.initial_area,
                unit_price: product.unit_price,
                treatment_count: input.treatment_count,
            });
        }
        Ok(())
    }

    /// Whether every amount `run` produces fits in a `Decimal`.
    ///
    /// The area never grows, so no row exceeds the first one and no total
    /// exceeds the first row times the treatment count. The fee step
    /// multiplies a billable amount by a percentage below 100.
    fn amounts_fit(product: &GraftProduct, input: &ProgressionInput) -> bool {
        let area = input.initial_area.max(AREA_FLOOR);
        let treatments = Decimal::from(input.treatment_count);

        let area_total = area.checked_mul(treatments);
        let fee_step = area
            .checked_mul(product.unit_price)
            .and_then(|billable| billable.checked_mul(treatments))
            .and_then(|billable| billable.checked_mul(Decimal::ONE_HUNDRED));

        area_total.is_some() && fee_step.is_some()
    }

    /// Rejects treatment counts above [`MAX_INTERACTIVE_TREATMENTS`].
    ///
    /// The engine itself has no ceiling; interactive callers apply this one.
    pub fn check_interactive_limit(input: &ProgressionInput) -> Result<(), ProgressionError> {
        if input.treatment_count > MAX_INTERACTIVE_TREATMENTS {
            return Err(ProgressionError::TooManyTreatments {
                max: MAX_INTERACTIVE_TREATMENTS,
                got: input.treatment_count,
            });
        }
        Ok(())
    }

    /// Runs the progression on input the caller has already validated.
    ///
    /// Unchecked input whose amounts exceed the `Decimal` range panics;
    /// [`Self::validate`] rejects it first.
    ///
    /// The area carried from one treatment to the next is never rounded;
    /// only `display_area` is. After each treatment the area shrinks by the
    /// closure rate and is then held at [`AREA_FLOOR`] or above.
    pub fn run(product: &GraftProduct, input: &ProgressionInput) -> Progression {
        let decay = Decimal::ONE - input.closure_rate_percent / Decimal::ONE_HUNDRED;
        let mut current_area = input.initial_area.max(AREA_FLOOR);
        let mut rows = Vec::with_capacity(input.treatment_count as usize);

        for treatment_index in 1..=input.treatment_count {
            rows.push(Self::row(
                treatment_index,
                current_area,
                product.unit_price,
                input.billing_fee_percent,
            ));

            current_area *= decay;
            if current_area < AREA_FLOOR {
                current_area = AREA_FLOOR;
            }
        }

        let totals: ProgressionTotals = rows.iter().collect();

        Progression {
            product: product.clone(),
            input: input.clone(),
            rows,
            totals,
        }
    }

    /// Computes the amounts of a single treatment.
    pub fn row(
        treatment_index: u32,
        area: Decimal,
        unit_price: Decimal,
        billing_fee_percent: Decimal,
    ) -> ProgressionRow {
        let total_billable = area * unit_price;
        let reimbursed_amount = total_billable * REIMBURSEMENT_RATE;
        let cost_amount = total_billable * COST_RATE;
        let billing_fee_amount = total_billable * billing_fee_percent / Decimal::ONE_HUNDRED;
        let gross_profit = reimbursed_amount - cost_amount;

        ProgressionRow {
            treatment_index,
            area_at_treatment: area,
            display_area: area.round_dp_with_strategy(
                AREA_DISPLAY_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            ),
            unit_price,
            total_billable,
            reimbursed_amount,
            cost_amount,
            billing_fee_amount,
            gross_profit,
            net_profit: gross_profit - billing_fee_amount,
        }
    }
}
