//! Category model
//!
//! Categories classify operations and are tagged Income or Expense. They are
//! immutable once created.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::flow::FlowType;
use super::ids::CategoryId;

/// A named income or expense classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Income or Expense
    #[serde(rename = "Type")]
    pub flow: FlowType,
}

impl Category {
    /// Create a new category with a fresh identifier
    pub fn new(name: impl Into<String>, flow: FlowType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            flow,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.flow)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Salary", FlowType::Income);
        assert_eq!(category.name, "Salary");
        assert_eq!(category.flow, FlowType::Income);
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let category = Category::new("\t", FlowType::Expense);
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_type_field_name() {
        let category = Category::new("Food", FlowType::Expense);
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["Type"], "Expense");
    }

    #[test]
    fn test_accepts_ordinal_type() {
        let json = r#"{"Id":"550e8400-e29b-41d4-a716-446655440000","Name":"Salary","Type":0}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.flow, FlowType::Income);
    }
}
