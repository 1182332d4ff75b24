//! Product entity, its validated draft, and the inbound create request.

use super::ProductId;
use crate::validation::{ValidationErrors, require_non_empty};
use serde::{Deserialize, Serialize};

/// Inbound payload for `POST /api/products`.
///
/// A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    title: Option<String>,
    description: Option<String>,
}

impl CreateProductRequest {
    /// Creates a request with a title and no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    /// Sets the product description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks the non-empty title constraint.
    ///
    /// The description is optional and may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when the title is missing or empty.
    pub fn validate(self) -> Result<NewProduct, ValidationErrors> {
        let mut violations = Vec::new();
        require_non_empty("title", self.title.as_deref(), &mut violations);
        ValidationErrors::check(violations)?;

        Ok(NewProduct {
            title: self.title.unwrap_or_default(),
            description: self.description,
        })
    }
}

/// A validated product that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    title: String,
    description: Option<String>,
}

impl NewProduct {
    /// Validates the fields and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when `title` is empty.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        CreateProductRequest {
            title: Some(title.into()),
            description,
        }
        .validate()
    }

    /// Returns the product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Completes the draft with a store-assigned identifier.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

/// A stored product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    description: Option<String>,
}

impl Product {
    /// Rebuilds a product read back from a store that enforces its own
    /// constraints.
    #[must_use]
    pub const fn from_stored(id: ProductId, title: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    /// Returns the product identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
