//! The pricing engine - turns a product plus the workshop's cost structure
//! into a fully itemized price breakdown.
//!
//! [`compute_pricing`] is a pure function: no database access, no side
//! effects, and no failure path. Every potential divide-by-zero (production
//! capacity, equipment life and usage, the fee divisor, the final price) is
//! absorbed by a clamp or zero-fallback, so the engine is total over its
//! input domain and always returns finite numbers.
//!
//! The central business rule is the card-fee gross-up: the final sale price
//! is inflated so that after the payment processor deducts its percentage
//! fee, the remaining amount still equals the markup price. The desired
//! margin is therefore protected from fee erosion.

use crate::entities::{equipment, fixed_costs, labor, product, variable_costs};
use serde::{Deserialize, Serialize};

/// Main material category of a product.
///
/// This is a closed set: every category resolves to exactly one price field
/// on the variable-cost sheet, and anything outside the set costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Sublimation paper
    Sublimation,
    /// Photo paper
    Photo,
    /// DTF (direct-to-film) transfer film
    Dtf,
    /// Xerox/copy page
    Xerox,
    /// Adhesive vinyl
    Adhesive,
    /// Power film
    PowerFilm,
    /// No main material (e.g., a service-only product)
    None,
}

impl Material {
    /// Tags accepted by [`Material::from_tag`], in display order.
    pub const TAGS: [&'static str; 7] = [
        "sublimation",
        "photo",
        "dtf",
        "xerox",
        "adhesive",
        "powerfilm",
        "none",
    ];

    /// Parses a stored material tag. Unrecognized tags map to
    /// [`Material::None`] so the engine stays total; strict validation
    /// happens at record creation, not here.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "sublimation" => Self::Sublimation,
            "photo" => Self::Photo,
            "dtf" => Self::Dtf,
            "xerox" => Self::Xerox,
            "adhesive" => Self::Adhesive,
            "powerfilm" => Self::PowerFilm,
            _ => Self::None,
        }
    }

    /// The stored tag for this material.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sublimation => "sublimation",
            Self::Photo => "photo",
            Self::Dtf => "dtf",
            Self::Xerox => "xerox",
            Self::Adhesive => "adhesive",
            Self::PowerFilm => "powerfilm",
            Self::None => "none",
        }
    }

    /// Looks up this material's per-unit price on the variable-cost sheet.
    #[must_use]
    pub const fn unit_cost(self, sheet: &variable_costs::Model) -> f64 {
        match self {
            Self::Sublimation => sheet.sublimation_paper,
            Self::Photo => sheet.photo_paper,
            Self::Dtf => sheet.dtf_film,
            Self::Xerox => sheet.xerox_cost,
            Self::Adhesive => sheet.adhesive_vinyl,
            Self::PowerFilm => sheet.power_film,
            Self::None => 0.0,
        }
    }
}

/// Fully itemized result of one pricing computation.
///
/// Purely derived data: never stored as source of truth, recomputed on
/// every request. Every intermediate is exposed because downstream
/// consumers display the complete cost breakdown, not just the final price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Sum of the eight monthly overhead fields
    pub total_fixed_cost: f64,
    /// Overhead share attributed to one unit (0 if the product opts out)
    pub fixed_cost_per_unit: f64,
    /// Equipment depreciation attributed to one unit
    pub equipment_cost: f64,
    /// Material + ink + press energy, per unit
    pub variable_cost: f64,
    /// Waste/scrap allowance, per unit
    pub waste_cost: f64,
    /// Labor cost for the product's production time
    pub labor_cost: f64,
    /// All direct costs of one unit (everything except overhead)
    pub direct_cost: f64,
    /// Direct cost plus the fixed-overhead share
    pub total_unit_cost: f64,
    /// Total cost of the order (unit cost x quantity, quantity floored at 1)
    pub total_order_cost: f64,
    /// Break-even price: the unit cost with no margin and no fee
    pub break_even_price: f64,
    /// Cost-plus price before the card-fee gross-up
    pub markup_price: f64,
    /// Amount the payment processor keeps from the final sale price
    pub card_fee_amount: f64,
    /// Sale price after the fee gross-up
    pub final_sale_price: f64,
    /// Realized profit per unit after the card fee
    pub unit_profit: f64,
    /// Realized profit for the whole order
    pub total_profit: f64,
    /// Realized margin as a percentage of the final sale price
    pub real_margin_percent: f64,
}

/// Computes the itemized price breakdown for one order.
///
/// # Arguments
/// * `product` - The item being priced
/// * `fixed` - Monthly overhead sheet
/// * `variable` - Per-unit consumable price sheet
/// * `equipment` - Every depreciable asset in the workshop
/// * `labor` - Labor-rate model (only `hourly_rate` is consumed here)
/// * `quantity` - Ordered units; values below 1 are treated as 1
/// * `desired_margin_percent` - Target margin over cost; negative treated as 0
#[must_use]
pub fn compute_pricing(
    product: &product::Model,
    fixed: &fixed_costs::Model,
    variable: &variable_costs::Model,
    equipment: &[equipment::Model],
    labor: &labor::Model,
    quantity: i64,
    desired_margin_percent: f64,
) -> PricingResult {
    // 1. Total monthly fixed cost
    let total_fixed_cost = fixed.rent
        + fixed.water
        + fixed.electricity
        + fixed.internet
        + fixed.accounting
        + fixed.marketing
        + fixed.taxes
        + fixed.other;

    // 2. Fixed cost per unit, based on monthly production capacity.
    // Products can opt out of overhead allocation (one-off jobs priced standalone).
    let fixed_cost_base = if fixed.monthly_capacity > 0.0 {
        total_fixed_cost / fixed.monthly_capacity
    } else {
        0.0
    };
    let fixed_cost_per_unit = if product.allocate_overhead {
        fixed_cost_base
    } else {
        0.0
    };

    // 3. Equipment depreciation per unit. A zero life or zero usage
    // contributes nothing rather than infinity.
    let equipment_cost: f64 = equipment
        .iter()
        .map(|eq| {
            if eq.useful_life_months > 0.0 && eq.monthly_usage > 0.0 {
                (eq.purchase_price / eq.useful_life_months) / eq.monthly_usage
            } else {
                0.0
            }
        })
        .sum();

    // 4. Main material cost, by category lookup
    let material_cost = Material::from_tag(&product.material).unit_cost(variable);

    // 5. Variable unit cost. Printer energy is tracked on the sheet but
    // deliberately excluded from this sum.
    let variable_cost = material_cost + variable.ink + variable.press_energy;

    // 6. Waste allowance over material-related cost
    let waste_cost = (variable_cost + product.blank_cost) * (variable.waste_percent.max(0.0) / 100.0);

    // 7. Labor, from production minutes and the stored hourly rate
    let labor_cost = (labor.hourly_rate / 60.0) * product.production_minutes;

    // 8. Direct unit cost
    let direct_cost = product.blank_cost
        + product.packaging_cost
        + variable_cost
        + waste_cost
        + equipment_cost
        + labor_cost;

    // 9. Total unit cost, with the fixed-overhead share
    let total_unit_cost = direct_cost + fixed_cost_per_unit;

    // 10. Order total; quantity is floored at 1
    #[allow(clippy::cast_precision_loss)]
    let units = quantity.max(1) as f64;
    let total_order_cost = total_unit_cost * units;

    // 11. Break-even price
    let break_even_price = total_unit_cost;

    // 12. Markup price over total cost
    let markup_price = total_unit_cost * (1.0 + desired_margin_percent.max(0.0) / 100.0);

    // 13. Card-fee gross-up: divide so the processor's cut leaves the markup
    // price intact. The divisor guard covers a fee of exactly 100% should the
    // clamp ever change.
    let fee_percent = variable.card_fee_percent.clamp(0.0, 99.0);
    let fee_divisor = 1.0 - fee_percent / 100.0;
    let fee_divisor = if fee_divisor == 0.0 { 1.0 } else { fee_divisor };
    let final_sale_price = markup_price / fee_divisor;
    let card_fee_amount = final_sale_price - markup_price;

    // 14. Realized profit
    let unit_profit = final_sale_price - total_unit_cost - card_fee_amount;
    let total_profit = unit_profit * units;
    let real_margin_percent = if final_sale_price > 0.0 {
        (unit_profit / final_sale_price) * 100.0
    } else {
        0.0
    };

    PricingResult {
        total_fixed_cost,
        fixed_cost_per_unit,
        equipment_cost,
        variable_cost,
        waste_cost,
        labor_cost,
        direct_cost,
        total_unit_cost,
        total_order_cost,
        break_even_price,
        markup_price,
        card_fee_amount,
        final_sale_price,
        unit_profit,
        total_profit,
        real_margin_percent,
    }
}
