use crate::models::ProductId;

pub const MISSING_PRODUCT_MESSAGE: &str = "Seleccione un producto";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{MISSING_PRODUCT_MESSAGE}")]
    MissingProductId,
}

/// Existence check on a product selection; whitespace-only counts as absent.
pub fn require_product_id(selected: Option<&str>) -> Result<ProductId, ValidationError> {
    match selected.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(ProductId::new(id)),
        _ => Err(ValidationError::MissingProductId),
    }
}
