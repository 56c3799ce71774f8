use std::fmt;

use crate::presentation::formatters::{format_cents, truncate};
use crate::presentation::view_models::{
    CatalogListViewModel, CategoryListViewModel, CreateView, ViewMode,
};

impl CreateView for CatalogListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogListView { data: self, mode })
    }
}

impl CreateView for CategoryListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CategoryListView { data: self, mode })
    }
}

struct CatalogListView<'a> {
    data: &'a CatalogListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for CatalogListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for product in &self.data.products {
                    writeln!(f, "{}", product.id)?;
                }
            }
            ViewMode::Compact => {
                for product in &self.data.products {
                    writeln!(
                        f,
                        "{:<4} {:<24} {:>9}",
                        product.id,
                        product.name,
                        format_cents(product.price_cents)
                    )?;
                }
            }
            ViewMode::Standard | ViewMode::Verbose => {
                let description_width = if self.mode == ViewMode::Verbose {
                    usize::MAX
                } else {
                    40
                };
                writeln!(
                    f,
                    "{:<4} {:<24} {:<12} {:>9}  DESCRIPTION",
                    "ID", "NAME", "CATEGORY", "PRICE"
                )?;
                writeln!(f, "{}", "-".repeat(80))?;
                for product in &self.data.products {
                    writeln!(
                        f,
                        "{:<4} {:<24} {:<12} {:>9}  {}",
                        product.id,
                        product.name,
                        product.category,
                        format_cents(product.price_cents),
                        truncate(&product.description, description_width)
                    )?;
                }
            }
        }
        Ok(())
    }
}

struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.data.categories {
            match self.mode {
                ViewMode::Minimal => writeln!(f, "{}", entry.label)?,
                _ => writeln!(f, "{:<14} {}", entry.label, entry.product_count)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_catalog, present_categories};
    use storefront_engine::{Catalog, Category};

    #[test]
    fn test_compact_catalog_rows() {
        let result = present_catalog(&Catalog::fashion(), &Category::named("Tops"));
        let text = result.content.create_view(ViewMode::Compact).to_string();
        insta::assert_snapshot!(text, @r"
        1    Classic White T-Shirt       $29.99
        6    Wool Sweater                $69.99
        ");
    }

    #[test]
    fn test_standard_catalog_truncates_descriptions() {
        let result = present_catalog(&Catalog::fashion(), &Category::All);
        let text = result.content.create_view(ViewMode::Standard).to_string();
        assert!(text.starts_with("ID   NAME"));
        assert!(text.contains("Comfortable cotton t-shirt, perfect f..."));
    }

    #[test]
    fn test_category_lines() {
        let result = present_categories(&Catalog::fashion());
        let text = result.content.create_view(ViewMode::Minimal).to_string();
        assert_eq!(
            text,
            "All\nTops\nBottoms\nDresses\nOuterwear\nFootwear\nAccessories\n"
        );
    }
}
