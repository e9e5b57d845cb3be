//! Page templates.
//!
//! One typed view model per route, compiled from `templates/`.

use askama::Template;

use crate::catalog::{Advantage, CatalogStore, ComparisonEntry, FeatureDescriptor, Product};

pub const HOME_TITLE: &str = "Fundas Premium para AirPods";
pub const CATALOG_TITLE: &str = "Catálogo Completo";
pub const ADVANTAGES_TITLE: &str = "Ventajas de Jinja2";

/// Home page: featured products and template engine features.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    /// Only products with `featured == true`.
    pub products: Vec<&'static Product>,
    pub features: &'static [FeatureDescriptor],
}

impl HomeTemplate {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            title: HOME_TITLE,
            products: store.list_featured().collect(),
            features: store.features(),
        }
    }
}

/// Full catalog page.
#[derive(Template)]
#[template(path = "productos.html")]
pub struct CatalogTemplate {
    pub title: &'static str,
    pub products: &'static [Product],
}

impl CatalogTemplate {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            title: CATALOG_TITLE,
            products: store.list_all(),
        }
    }
}

/// Single product page.
#[derive(Template)]
#[template(path = "detalle.html")]
pub struct ProductDetailTemplate {
    pub title: &'static str,
    pub product: &'static Product,
}

impl ProductDetailTemplate {
    pub fn new(product: &'static Product) -> Self {
        Self {
            title: product.name,
            product,
        }
    }
}

/// Static advantages and engine comparison page.
#[derive(Template)]
#[template(path = "ventajas.html")]
pub struct AdvantagesTemplate {
    pub title: &'static str,
    pub advantages: &'static [Advantage],
    pub comparison: &'static [ComparisonEntry],
}

impl AdvantagesTemplate {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            title: ADVANTAGES_TITLE,
            advantages: store.advantages(),
            comparison: store.comparison(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_renders_only_featured() {
        let store = CatalogStore::builtin();
        let view = HomeTemplate::new(&store);
        assert!(view.products.iter().all(|p| p.featured));

        let html = view.render().unwrap();
        assert!(html.contains(HOME_TITLE));
        for p in store.list_all() {
            assert_eq!(html.contains(p.name), p.featured, "{}", p.name);
        }
        assert!(html.contains("autoescapado"));
    }

    #[test]
    fn test_catalog_renders_all() {
        let store = CatalogStore::builtin();
        let html = CatalogTemplate::new(&store).render().unwrap();
        for p in store.list_all() {
            assert!(html.contains(p.name));
            assert!(html.contains(&format!("${}", p.price())));
            assert!(html.contains(&p.detail_path()));
        }
        assert!(html.contains("Rosa Gold"));
    }

    #[test]
    fn test_detail_renders_product() {
        let store = CatalogStore::builtin();
        let product = store.find_by_id(2).unwrap();
        let html = ProductDetailTemplate::new(product).render().unwrap();
        assert!(html.contains("Funda Cuero Vintage"));
        assert!(html.contains("$24.99"));
        assert!(html.contains("Marrón"));
        assert!(html.contains("Unidades en stock: 15"));
    }

    #[test]
    fn test_advantages_escapes_examples() {
        let store = CatalogStore::builtin();
        let html = AdvantagesTemplate::new(&store).render().unwrap();
        assert!(html.contains("Herencia de Plantillas"));
        assert!(html.contains("Handlebars"));
        assert!(html.contains("Indentación estricta puede ser problemática"));
        // `{% extends "base.html" %}` sample must come out escaped
        assert!(!html.contains("{% extends \"base.html\" %}"));
    }
}
