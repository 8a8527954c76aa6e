use thiserror::Error;

/// Error type for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("Product name cannot be empty")]
    Empty,

    #[error("Product name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductDescriptionError {
    #[error("Product description cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Product price must be greater than 0, got {0}")]
    NotPositive(f64),

    #[error("Product price must be a finite number")]
    NotFinite,
}

/// Top-level error type for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("Invalid product description: {0}")]
    InvalidDescription(#[from] ProductDescriptionError),

    #[error("Invalid product price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Product not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
