//! # Transport Adapters
//!
//! Inbound payloads arrive as loosely typed DTOs: every field may be absent or `null`. The
//! adapters turn them into the candidates the services validate, so that a missing field shows
//! up as a validation message rather than a decode error. Outbound, they flatten entities into
//! views that are safe to serialize (no passwords).

use crate::model::{
    CategoryId, CategoryRef, Product, ProductId, ProductInput, User, UserId, UserInput,
};
use crate::service::ServiceError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Option<u32>,
}

/// Product payload as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub id: Option<CategoryId>,
    pub name: String,
}

/// Product as returned to a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub category: CategoryView,
}

pub struct ProductAdapter;

impl ProductAdapter {
    pub fn to_input(dto: ProductDto) -> ProductInput {
        ProductInput {
            name: dto.name,
            price: dto.price,
            category: dto.category.map(|category| CategoryRef {
                id: category.id.map(CategoryId::from),
            }),
        }
    }

    /// Decodes a JSON body into a candidate.
    ///
    /// Only syntax and type errors fail here; absent fields become `None`.
    pub fn from_json(body: &str) -> Result<ProductInput, ServiceError> {
        let dto: ProductDto =
            serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
        Ok(Self::to_input(dto))
    }

    pub fn to_view(product: &Product) -> ProductView {
        ProductView {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: CategoryView {
                id: product.category.id,
                name: product.category.name.clone(),
            },
        }
    }
}

#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// User as returned to a client. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: Option<UserId>,
    pub email: String,
}

pub struct UserAdapter;

impl UserAdapter {
    pub fn to_input(dto: UserDto) -> UserInput {
        UserInput {
            email: dto.email,
            password: dto.password,
        }
    }

    pub fn from_json(body: &str) -> Result<UserInput, ServiceError> {
        let dto: UserDto =
            serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
        Ok(Self::to_input(dto))
    }

    pub fn to_view(user: &User) -> UserView {
        UserView {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use serde_json::json;

    #[test]
    fn test_product_json_to_input() {
        let input = ProductAdapter::from_json(
            r#"{"name": "Mouse", "price": 50.0, "category": {"id": 1}}"#,
        )
        .unwrap();

        assert_eq!(input, ProductInput::new("Mouse", 50.0, CategoryId(1)));
    }

    #[test]
    fn test_missing_and_null_fields_become_none() {
        let input =
            ProductAdapter::from_json(r#"{"name": "", "price": -10, "category": null}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some(""));
        assert_eq!(input.price, Some(-10.0));
        assert_eq!(input.category, None);

        let input = ProductAdapter::from_json(r#"{"category": {}}"#).unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.category, Some(CategoryRef { id: None }));
        assert_eq!(input.category_id(), None);
    }

    #[test]
    fn test_malformed_json() {
        let err = ProductAdapter::from_json(r#"{"name": "Mouse", "price": "cheap"}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
        assert_eq!(err.status_code(), 400);

        assert!(ProductAdapter::from_json("not json").is_err());
    }

    #[test]
    fn test_product_view_shape() {
        let mut category = Category::new("Peripherals");
        category.id = Some(CategoryId(1));
        let mut product = Product::new("Mouse", 50.0, category);
        product.id = Some(ProductId(3));

        let value = serde_json::to_value(ProductAdapter::to_view(&product)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Mouse",
                "price": 50.0,
                "category": {"id": 1, "name": "Peripherals"}
            })
        );
    }

    #[test]
    fn test_user_view_omits_password() {
        let input = UserAdapter::from_json(r#"{"email": "a@b.com", "password": "123456"}"#)
            .unwrap();
        assert_eq!(input, UserInput::new("a@b.com", "123456"));

        let mut user = User::new("a@b.com", "123456");
        user.id = Some(UserId(1));
        let value = serde_json::to_value(UserAdapter::to_view(&user)).unwrap();

        assert_eq!(value, json!({"id": 1, "email": "a@b.com"}));
    }
}
