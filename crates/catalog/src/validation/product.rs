use super::{ValidationResult, ValidationStrategy};
use crate::model::ProductInput;

pub const NAME_REQUIRED: &str = "Product name is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than zero";
pub const CATEGORY_REQUIRED: &str = "Category is required";

/// Default product policy. Checks every field and reports all failures, in the order
/// name, price, category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductValidationStrategy;

impl ValidationStrategy<ProductInput> for ProductValidationStrategy {
    fn validate(&self, candidate: &ProductInput) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if !matches!(candidate.name.as_deref(), Some(name) if !name.trim().is_empty()) {
            result.push(NAME_REQUIRED);
        }

        // NaN fails the comparison, so it is rejected too.
        if !candidate.price.is_some_and(|price| price > 0.0) {
            result.push(PRICE_NOT_POSITIVE);
        }

        if candidate.category_id().is_none() {
            result.push(CATEGORY_REQUIRED);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, CategoryRef};

    fn validate(candidate: &ProductInput) -> ValidationResult {
        ProductValidationStrategy.validate(candidate)
    }

    #[test]
    fn test_accepts_well_formed_product() {
        let result = validate(&ProductInput::new("Mouse", 50.0, CategoryId(1)));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut candidate = ProductInput::new("   ", 10.0, CategoryId(1));
        assert_eq!(validate(&candidate).errors(), [NAME_REQUIRED]);

        candidate.name = None;
        assert_eq!(validate(&candidate).errors(), [NAME_REQUIRED]);
    }

    #[test]
    fn test_rejects_non_positive_or_missing_price() {
        for price in [Some(0.0), Some(-10.0), Some(f64::NAN), None] {
            let candidate = ProductInput {
                price,
                ..ProductInput::new("Mouse", 1.0, CategoryId(1))
            };
            assert_eq!(validate(&candidate).errors(), [PRICE_NOT_POSITIVE], "{price:?}");
        }
    }

    #[test]
    fn test_rejects_missing_category_or_category_id() {
        let mut candidate = ProductInput::new("Mouse", 50.0, CategoryId(1));
        candidate.category = Some(CategoryRef { id: None });
        assert_eq!(validate(&candidate).errors(), [CATEGORY_REQUIRED]);

        candidate.category = None;
        assert_eq!(validate(&candidate).errors(), [CATEGORY_REQUIRED]);
    }

    #[test]
    fn test_accumulates_all_errors_in_field_order() {
        let candidate = ProductInput {
            name: Some(String::new()),
            price: Some(0.0),
            category: None,
        };

        let result = validate(&candidate);

        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            [NAME_REQUIRED, PRICE_NOT_POSITIVE, CATEGORY_REQUIRED]
        );
    }
}
