//! Payroll withholding estimate
//!
//! Two progressive stages applied to a monthly gross salary:
//!
//! 1. Pension contribution (INSS): each slice of income pays its own marginal
//!    rate, with a flat ceiling above the last bracket.
//! 2. Income tax (IRRF) on `gross - pension`, using the rate-and-deduction
//!    form of the progressive table.
//!
//! Rates are basis points and amounts are cents, so the whole calculation is
//! integer arithmetic with one rounding step per stage.

use serde::Serialize;

use crate::models::Money;

/// Basis points in 100%
const RATE_SCALE: i128 = 10_000;

/// One pension slice: income up to `ceiling` pays `rate_bp` on the part above
/// the previous ceiling.
#[derive(Debug, Clone, Copy)]
struct PensionBracket {
    ceiling: Money,
    rate_bp: i64,
}

const PENSION_BRACKETS: [PensionBracket; 4] = [
    PensionBracket {
        ceiling: Money::from_cents(141_200),
        rate_bp: 750,
    },
    PensionBracket {
        ceiling: Money::from_cents(266_668),
        rate_bp: 900,
    },
    PensionBracket {
        ceiling: Money::from_cents(400_003),
        rate_bp: 1_200,
    },
    PensionBracket {
        ceiling: Money::from_cents(778_602),
        rate_bp: 1_400,
    },
];

/// Contribution paid by anyone above the last pension ceiling
pub const PENSION_CAP: Money = Money::from_cents(90_885);

/// Income tax bracket in rate-and-deduction form; `ceiling: None` is open-ended
#[derive(Debug, Clone, Copy)]
struct IncomeTaxBracket {
    ceiling: Option<Money>,
    rate_bp: i64,
    deduction: Money,
}

const INCOME_TAX_BRACKETS: [IncomeTaxBracket; 5] = [
    IncomeTaxBracket {
        ceiling: Some(Money::from_cents(225_920)),
        rate_bp: 0,
        deduction: Money::zero(),
    },
    IncomeTaxBracket {
        ceiling: Some(Money::from_cents(282_665)),
        rate_bp: 750,
        deduction: Money::from_cents(16_944),
    },
    IncomeTaxBracket {
        ceiling: Some(Money::from_cents(375_105)),
        rate_bp: 1_500,
        deduction: Money::from_cents(38_144),
    },
    IncomeTaxBracket {
        ceiling: Some(Money::from_cents(466_468)),
        rate_bp: 2_250,
        deduction: Money::from_cents(66_277),
    },
    IncomeTaxBracket {
        ceiling: None,
        rate_bp: 2_750,
        deduction: Money::from_cents(89_600),
    },
];

/// Breakdown of a gross salary into deductions and take-home pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxEstimate {
    pub gross: Money,
    pub pension_contribution: Money,
    pub income_tax: Money,
    pub net: Money,
}

impl TaxEstimate {
    pub fn total_deductions(&self) -> Money {
        self.pension_contribution + self.income_tax
    }

    /// Share of gross withheld, in percent (0 for non-positive gross)
    pub fn effective_rate(&self) -> f64 {
        if !self.gross.is_positive() {
            return 0.0;
        }
        self.total_deductions().cents() as f64 / self.gross.cents() as f64 * 100.0
    }
}

/// Estimate deductions and net pay for a monthly gross income
///
/// Zero or negative income yields zero deductions. Each stage rounds to the
/// cent before the next one runs, so the result can differ by a cent from a
/// computation that rounds only at the end (5000.00 gives income tax 345.50
/// and net 4135.68 rather than 345.49 and 4135.69).
///
/// ```
/// use fintrack::models::Money;
/// use fintrack::services::tax::estimate;
///
/// let estimate = estimate(Money::from_cents(100_000));
/// assert_eq!(estimate.pension_contribution, Money::from_cents(7_500));
/// assert_eq!(estimate.net, Money::from_cents(92_500));
/// ```
pub fn estimate(gross: Money) -> TaxEstimate {
    let pension_contribution = pension_contribution(gross);
    let income_tax = income_tax(gross - pension_contribution);
    TaxEstimate {
        gross,
        pension_contribution,
        income_tax,
        net: gross - pension_contribution - income_tax,
    }
}

/// Progressive pension contribution on a gross income
pub fn pension_contribution(gross: Money) -> Money {
    if !gross.is_positive() {
        return Money::zero();
    }

    let top = PENSION_BRACKETS[PENSION_BRACKETS.len() - 1].ceiling;
    if gross > top {
        return PENSION_CAP;
    }

    let mut floor = 0;
    let mut scaled: i128 = 0;
    for bracket in PENSION_BRACKETS {
        let upper = gross.cents().min(bracket.ceiling.cents());
        if upper <= floor {
            break;
        }
        scaled += i128::from(upper - floor) * i128::from(bracket.rate_bp);
        floor = bracket.ceiling.cents();
    }

    Money::from_cents(round_scaled(scaled)).min(PENSION_CAP)
}

/// Income tax on a taxable base (gross minus pension contribution)
pub fn income_tax(base: Money) -> Money {
    if !base.is_positive() {
        return Money::zero();
    }

    let bracket = INCOME_TAX_BRACKETS
        .iter()
        .find(|b| b.ceiling.map_or(true, |ceiling| base <= ceiling))
        .unwrap_or(&INCOME_TAX_BRACKETS[INCOME_TAX_BRACKETS.len() - 1]);

    let product = i128::from(base.cents()) * i128::from(bracket.rate_bp);
    let gross_tax = Money::from_cents(round_scaled(product));
    (gross_tax - bracket.deduction).max(Money::zero())
}

/// Divide a cents × basis-point product back to cents, rounding half away
/// from zero.
///
/// Products are widened to `i128` so any `i64` cent amount times a rate fits;
/// rates never exceed 100% so the quotient always fits back in `i64`.
fn round_scaled(value: i128) -> i64 {
    let half = RATE_SCALE / 2;
    let rounded = if value >= 0 {
        (value + half) / RATE_SCALE
    } else {
        (value - half) / RATE_SCALE
    };
    i64::try_from(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN })
}
