use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::errors::PriceError;
use crate::domain::product::errors::ProductDescriptionError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::errors::ProductIdError;
use crate::domain::product::errors::ProductNameError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name: trimmed, non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, ProductNameError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(ProductNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product description: trimmed, non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDescription(String);

impl ProductDescription {
    pub fn new(description: String) -> Result<Self, ProductDescriptionError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ProductDescriptionError::Empty);
        }
        Ok(Self(description.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strictly positive, finite price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, PriceError> {
        if !value.is_finite() {
            Err(PriceError::NotFinite)
        } else if value <= 0.0 {
            Err(PriceError::NotPositive(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Command to create a new product with validated fields.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
}

impl CreateProductCommand {
    /// Validate raw product input.
    ///
    /// # Errors
    /// * `InvalidName` - Name blank or too long
    /// * `InvalidDescription` - Description blank
    /// * `InvalidPrice` - Price zero, negative, or not finite
    pub fn new(name: String, description: String, price: f64) -> Result<Self, ProductError> {
        Ok(Self {
            name: ProductName::new(name)?,
            description: ProductDescription::new(description)?,
            price: Price::new(price)?,
        })
    }
}

/// Command to replace all editable fields of an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
}

impl UpdateProductCommand {
    pub fn new(name: String, description: String, price: f64) -> Result<Self, ProductError> {
        Ok(Self {
            name: ProductName::new(name)?,
            description: ProductDescription::new(description)?,
            price: Price::new(price)?,
        })
    }
}
