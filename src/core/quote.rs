//! Quote assembly - loads every pricing input, runs the engine, and bundles
//! the result with a snapshot of the inputs used.
//!
//! The snapshot matters: cost sheets change over time, and an exported quote
//! must stay explainable after the sheets move on. The pricing result itself
//! is never persisted; quotes are rebuilt fresh on every request.

use crate::{
    core::{equipment as equipment_ops, pricing, settings},
    entities::{equipment, fixed_costs, labor, product, variable_costs},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

/// One priced order: the full input snapshot plus the itemized result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// The product that was priced
    pub product: product::Model,
    /// Fixed-cost sheet at quote time
    pub fixed_costs: fixed_costs::Model,
    /// Variable-cost sheet at quote time
    pub variable_costs: variable_costs::Model,
    /// Active equipment roster at quote time
    pub equipment: Vec<equipment::Model>,
    /// Labor model at quote time
    pub labor: labor::Model,
    /// Ordered quantity as requested by the caller
    pub quantity: i64,
    /// Desired margin percentage as requested by the caller
    pub desired_margin_percent: f64,
    /// The itemized pricing breakdown
    pub pricing: pricing::PricingResult,
}

/// Builds a quote for a product: loads the cost sheets and the active
/// equipment roster, then runs the pricing engine.
///
/// # Errors
/// Returns an error if a cost sheet is missing or a query fails. The
/// pricing computation itself cannot fail.
pub async fn build_quote(
    db: &DatabaseConnection,
    product: product::Model,
    quantity: i64,
    desired_margin_percent: f64,
) -> Result<Quote> {
    let fixed_costs = settings::get_fixed_costs(db).await?;
    let variable_costs = settings::get_variable_costs(db).await?;
    let equipment = equipment_ops::get_all_active_equipment(db).await?;
    let labor = settings::get_labor(db).await?;

    let pricing = pricing::compute_pricing(
        &product,
        &fixed_costs,
        &variable_costs,
        &equipment,
        &labor,
        quantity,
        desired_margin_percent,
    );

    Ok(Quote {
        product,
        fixed_costs,
        variable_costs,
        equipment,
        labor,
        quantity,
        desired_margin_percent,
        pricing,
    })
}

/// Renders a quote as a plain-text itemized breakdown for the terminal.
#[must_use]
pub fn format_quote(quote: &Quote) -> String {
    let p = &quote.pricing;
    let units = quote.quantity.max(1);
    #[allow(clippy::cast_precision_loss)]
    let unit_count = units as f64;

    let mut out = String::new();
    out.push_str(&format!(
        "Quote: {} x{units} (margin {:.1}%)\n",
        quote.product.name, quote.desired_margin_percent
    ));
    out.push_str("\nCost breakdown (per unit)\n");
    out.push_str(&format!("  Blank item cost      {:>10.2}\n", quote.product.blank_cost));
    out.push_str(&format!("  Packaging            {:>10.2}\n", quote.product.packaging_cost));
    out.push_str(&format!("  Variable (materials) {:>10.2}\n", p.variable_cost));
    out.push_str(&format!("  Waste allowance      {:>10.2}\n", p.waste_cost));
    out.push_str(&format!("  Equipment wear       {:>10.2}\n", p.equipment_cost));
    out.push_str(&format!("  Labor                {:>10.2}\n", p.labor_cost));
    out.push_str(&format!("  Direct cost          {:>10.2}\n", p.direct_cost));
    out.push_str(&format!(
        "  Overhead share       {:>10.2}  (monthly overhead {:.2})\n",
        p.fixed_cost_per_unit, p.total_fixed_cost
    ));
    out.push_str(&format!("  Total unit cost      {:>10.2}\n", p.total_unit_cost));
    out.push_str("\nPricing\n");
    out.push_str(&format!("  Break-even price     {:>10.2}\n", p.break_even_price));
    out.push_str(&format!("  Markup price         {:>10.2}\n", p.markup_price));
    out.push_str(&format!("  Card fee             {:>10.2}\n", p.card_fee_amount));
    out.push_str(&format!("  Final sale price     {:>10.2}\n", p.final_sale_price));
    out.push_str(&format!("\nOrder of {units}\n"));
    out.push_str(&format!("  Total cost           {:>10.2}\n", p.total_order_cost));
    out.push_str(&format!(
        "  Total revenue        {:>10.2}\n",
        p.final_sale_price * unit_count
    ));
    out.push_str(&format!("  Profit per unit      {:>10.2}\n", p.unit_profit));
    out.push_str(&format!("  Total profit         {:>10.2}\n", p.total_profit));
    out.push_str(&format!("  Realized margin      {:>9.1}%\n", p.real_margin_percent));
    out
}

/// Serializes a quote to pretty-printed JSON for export.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn export_quote(quote: &Quote) -> Result<String> {
    serde_json::to_string_pretty(quote).map_err(Into::into)
}
