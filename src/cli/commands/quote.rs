//! The `price` command - builds and prints a quote.

use crate::{
    core::{product as product_ops, quote},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Resolves a product reference (numeric id, or exact name) to a record.
async fn resolve_product(
    db: &DatabaseConnection,
    reference: &str,
) -> Result<crate::entities::product::Model> {
    // Try the reference as an id first, then as a name
    if let Ok(id) = reference.parse::<i64>() {
        if let Some(found) = product_ops::get_product_by_id(db, id).await? {
            if !found.is_deleted {
                return Ok(found);
            }
        }
    }

    product_ops::get_product_by_name(db, reference)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: reference.to_string(),
        })
}

/// Prices an order for the referenced product and prints the itemized
/// breakdown, or the full JSON quote when `json` is set.
///
/// # Errors
/// Returns an error if the product cannot be resolved, a cost sheet is
/// missing, or export serialization fails.
pub async fn price(
    db: &DatabaseConnection,
    product_ref: &str,
    quantity: i64,
    margin: f64,
    json: bool,
) -> Result<()> {
    let product = resolve_product(db, product_ref).await?;
    let quote = quote::build_quote(db, product, quantity, margin).await?;

    if json {
        println!("{}", quote::export_quote(&quote)?);
    } else {
        print!("{}", quote::format_quote(&quote));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_with_sheets;

    #[tokio::test]
    async fn test_resolve_product_by_id_and_name() -> Result<()> {
        let db = setup_with_sheets().await?;

        let by_name = resolve_product(&db, "White Ceramic Mug").await?;
        let by_id = resolve_product(&db, &by_name.id.to_string()).await?;
        assert_eq!(by_id.id, by_name.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_unknown_product() -> Result<()> {
        let db = setup_with_sheets().await?;

        let result = resolve_product(&db, "T-Shirt").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProductNotFound { name } if name == "T-Shirt"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_numeric_name_falls_back_to_name_lookup() -> Result<()> {
        let db = setup_with_sheets().await?;

        // "999" is not a valid id; the name lookup also misses
        let result = resolve_product(&db, "999").await;
        assert!(matches!(result.unwrap_err(), Error::ProductNotFound { name: _ }));

        Ok(())
    }
}
