//! Product records and the built-in product table.

/// A product listing.
///
/// Records are `'static` table entries; nothing in the system creates,
/// mutates or drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique, stable identifier (positive).
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Price in the smallest currency unit (cents).
    pub price_cents: u32,
    /// Available colors in display order.
    pub colors: &'static [&'static str],
    /// Opaque image reference, never fetched by the server.
    pub image_url: &'static str,
    /// Shown on the home page when set.
    pub featured: bool,
    pub stock: u32,
}

impl Product {
    /// Price with two decimals, e.g. `12.99`.
    pub fn price(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Path of the detail page for this product.
    pub fn detail_path(&self) -> String {
        format!("/producto/{}", self.id)
    }
}

pub(crate) static PRODUCTS: [Product; 6] = [
    Product {
        id: 1,
        name: "Funda Silicona Premium",
        description: "Funda de silicona suave con protección anti-golpes",
        price_cents: 1299,
        colors: &["Negro", "Blanco", "Rosa", "Azul"],
        image_url: "https://images.unsplash.com/photo-1606841837239-c5a1a4a07af7?w=500&h=500&fit=crop",
        featured: true,
        stock: 25,
    },
    Product {
        id: 2,
        name: "Funda Cuero Vintage",
        description: "Elegante funda de cuero genuino con mosquetón metálico",
        price_cents: 2499,
        colors: &["Marrón", "Negro"],
        image_url: "https://images.unsplash.com/photo-1625245488600-f89d3f6d243d?w=500&h=500&fit=crop",
        featured: true,
        stock: 15,
    },
    Product {
        id: 3,
        name: "Funda Transparente",
        description: "Funda transparente ultra delgada que muestra el diseño original",
        price_cents: 999,
        colors: &["Transparente"],
        image_url: "https://images.unsplash.com/photo-1588423771073-b8903fbb85b5?w=500&h=500&fit=crop",
        featured: false,
        stock: 30,
    },
    Product {
        id: 4,
        name: "Funda Impermeable",
        description: "Protección total contra agua y polvo, perfecta para deportes",
        price_cents: 1999,
        colors: &["Negro", "Verde", "Naranja"],
        image_url: "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?w=500&h=500&fit=crop",
        featured: true,
        stock: 10,
    },
    Product {
        id: 5,
        name: "Funda Diseño Cartoon",
        description: "Diseños divertidos y coloridos de personajes animados",
        price_cents: 1499,
        colors: &["Multicolor"],
        image_url: "https://images.unsplash.com/photo-1598327105666-5b89351aff97?w=500&h=500&fit=crop",
        featured: false,
        stock: 20,
    },
    Product {
        id: 6,
        name: "Funda Metalizada",
        description: "Acabado metalizado brillante con protección reforzada",
        price_cents: 1699,
        colors: &["Oro", "Plata", "Rosa Gold"],
        image_url: "https://images.unsplash.com/photo-1572635196237-14b3f281503f?w=500&h=500&fit=crop",
        featured: false,
        stock: 12,
    },
];
