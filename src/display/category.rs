//! Category display formatting

use crate::models::Category;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<width$}  {}\n",
        "ID",
        "Category",
        "Type",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<width$}  {:-<7}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<12}  {:<width$}  {}\n",
            category.id.short(),
            category.name,
            category.flow,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlowType;

    #[test]
    fn test_format_empty_list() {
        assert!(format_category_list(&[]).contains("No categories found"));
    }

    #[test]
    fn test_format_category_list() {
        let categories = vec![
            Category::new("Salary", FlowType::Income),
            Category::new("Groceries", FlowType::Expense),
        ];

        let output = format_category_list(&categories);
        assert!(output.contains("Salary"));
        assert!(output.contains("Income"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("Expense"));
    }
}
