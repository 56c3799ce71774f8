use storefront_engine::{Catalog, Category, Product};

use crate::presentation::view_models::{
    CatalogListViewModel, CategoryEntryViewModel, CategoryListViewModel, CommandResultViewModel,
    Guidance, ProductCardViewModel, StatusBadge,
};

pub fn present_product_card(product: &Product) -> ProductCardViewModel {
    ProductCardViewModel {
        id: product.id.0,
        name: product.name.clone(),
        category: product.category.clone(),
        image: product.image.clone(),
        description: product.description.clone(),
        price_cents: product.price.cents(),
    }
}

pub fn present_catalog(
    catalog: &Catalog,
    category: &Category,
) -> CommandResultViewModel<CatalogListViewModel> {
    let products: Vec<ProductCardViewModel> = catalog
        .list_by_category(category)
        .into_iter()
        .map(present_product_card)
        .collect();

    let badge = if products.is_empty() {
        StatusBadge::warning(format!("No products in category '{}'", category))
    } else {
        StatusBadge::success(format!("{} product(s) in {}", products.len(), category))
    };

    let mut result = CommandResultViewModel::new(CatalogListViewModel {
        category: category.label().to_string(),
        products,
    })
    .with_badge(badge);

    if result.content.products.is_empty() {
        result = result.with_suggestion(
            Guidance::new("List the available categories").with_command("storefront categories"),
        );
    }

    result
}

pub fn present_categories(catalog: &Catalog) -> CommandResultViewModel<CategoryListViewModel> {
    let categories = catalog
        .categories()
        .into_iter()
        .map(|category| CategoryEntryViewModel {
            product_count: catalog.list_by_category(&category).len(),
            label: category.label().to_string(),
        })
        .collect();

    CommandResultViewModel::new(CategoryListViewModel { categories }).with_suggestion(
        Guidance::new("Filter the catalog").with_command("storefront catalog --category <NAME>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_count_products() {
        let result = present_categories(&Catalog::fashion());
        let counts: Vec<(&str, usize)> = result
            .content
            .categories
            .iter()
            .map(|c| (c.label.as_str(), c.product_count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("All", 8),
                ("Tops", 2),
                ("Bottoms", 1),
                ("Dresses", 1),
                ("Outerwear", 1),
                ("Footwear", 1),
                ("Accessories", 2)
            ]
        );
    }

    #[test]
    fn test_catalog_filter() {
        let result = present_catalog(&Catalog::fashion(), &Category::named("Accessories"));
        let ids: Vec<u32> = result.content.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 8]);
        assert!(result.suggestions.is_empty());
    }
}
