//! The built-in Kaccha Cooler product catalog.
//!
//! Products are compiled into the binary and never change at runtime. Both
//! the storefront and the admin console read from the same [`Catalog`].

use serde::{Deserialize, Serialize};

use crate::cart::PriceLookup;
use crate::types::{Price, ProductId};

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub description: String,
    /// Pack size / format label shown under the name (e.g., "150ml Bottle").
    pub variant: String,
}

/// Storefront category filter.
///
/// Categories are derived from the variant label rather than stored on the
/// product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFilter {
    #[default]
    All,
    /// Powder packs.
    Powder,
    /// Ready-to-drink bottles.
    Ready,
    /// Gift boxes.
    Gift,
}

impl ProductFilter {
    /// Every filter, in the order the storefront lists them.
    pub const ALL: [Self; 4] = [Self::All, Self::Powder, Self::Ready, Self::Gift];

    /// Display name for filter chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Powder => "Powder Packs",
            Self::Ready => "Ready to Drink",
            Self::Gift => "Gift Packs",
        }
    }

    /// Whether `product` belongs in this category.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        let needle = match self {
            Self::All => return true,
            Self::Powder => "powder",
            Self::Ready => "bottle",
            Self::Gift => "gift",
        };
        product.variant.to_lowercase().contains(needle)
    }
}

impl std::str::FromStr for ProductFilter {
    type Err = crate::types::ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "powder" => Ok(Self::Powder),
            "ready" => Ok(Self::Ready),
            "gift" => Ok(Self::Gift),
            _ => Err(crate::types::ParseStatusError::new("product filter", s)),
        }
    }
}

/// Number of products shown in the home page "featured" strip.
const FEATURED_COUNT: usize = 3;

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shop's built-in product line.
    #[must_use]
    pub fn builtin() -> Self {
        let entry = |id: &str, name: &str, price: i64, image: &str, description: &str, variant: &str| {
            Product {
                id: ProductId::new(id),
                name: name.to_owned(),
                price: Price::new(price),
                image: format!(
                    "https://images.pexels.com/photos/{image}?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
                ),
                description: description.to_owned(),
                variant: variant.to_owned(),
            }
        };

        Self::new(vec![
            entry(
                "1",
                "Kaccha Cooler Powder Pack",
                99,
                "5946081/pexels-photo-5946081.jpeg",
                "Our signature refreshing Kaccha Cooler in a convenient powder pack. Just mix with water and enjoy the perfect balance of tangy and sweet flavors. Made with natural ingredients and no preservatives.",
                "100g Powder Pack",
            ),
            entry(
                "2",
                "Kaccha Cooler Mini Sachets",
                149,
                "8471703/pexels-photo-8471703.jpeg",
                "Perfect for on-the-go refreshment. Each box contains 10 sachets of our signature Kaccha Cooler mix. Easy to carry and prepare anywhere. Just tear, pour, and mix with water.",
                "Box of 10 Sachets",
            ),
            entry(
                "3",
                "Kaccha Cooler Ready-to-Drink Bottle",
                49,
                "5947023/pexels-photo-5947023.jpeg",
                "Enjoy our refreshing Kaccha Cooler instantly with our ready-to-drink bottles. Perfect for picnics, office breaks, or anytime you need a quick refreshment. Made with natural ingredients and no artificial preservatives.",
                "150ml Bottle",
            ),
            entry(
                "4",
                "Kaccha Cooler Family Pack",
                249,
                "5946603/pexels-photo-5946603.jpeg",
                "The perfect pack for family gatherings and parties. Our large pack contains enough Kaccha Cooler mix to make 2 liters of refreshing beverage. Comes with a measuring scoop for perfect preparation every time.",
                "250g Family Pack",
            ),
            entry(
                "5",
                "Kaccha Cooler Premium Gift Box",
                599,
                "6064947/pexels-photo-6064947.jpeg",
                "A luxurious gift box featuring our signature Kaccha Cooler in three variants, along with a branded glass and stirrer. Perfect for gifting to friends and family who appreciate natural refreshment.",
                "Premium Gift Box",
            ),
            entry(
                "6",
                "Kaccha Cooler Sugar-Free",
                129,
                "4394612/pexels-photo-4394612.jpeg",
                "Enjoy the same refreshing taste of our classic Kaccha Cooler but with zero sugar. Sweetened with natural stevia extract, this version is perfect for those monitoring their sugar intake.",
                "100g Sugar-Free Pack",
            ),
        ])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products for the home page strip.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        let end = self.products.len().min(FEATURED_COUNT);
        self.products.get(..end).unwrap_or_default()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Products in a storefront category.
    pub fn filter(&self, filter: ProductFilter) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| filter.matches(product))
    }

    /// Case-insensitive search over product name and variant.
    ///
    /// A blank term matches everything.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Product> + use<'a> {
        let term = term.trim().to_lowercase();
        self.products.iter().filter(move |product| {
            term.is_empty()
                || product.name.to_lowercase().contains(&term)
                || product.variant.to_lowercase().contains(&term)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PriceLookup for Catalog {
    fn unit_price(&self, id: &ProductId) -> Option<Price> {
        self.get(id).map(|product| product.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.get(&ProductId::new("3")).unwrap().price,
            Price::new(49)
        );
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_featured_is_first_three() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(catalog.featured().iter()), vec!["1", "2", "3"]);

        let small = Catalog::new(catalog.all().iter().take(2).cloned().collect());
        assert_eq!(small.featured().len(), 2);
    }

    #[test]
    fn test_filters_match_variant_labels() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(catalog.filter(ProductFilter::All)).len(), 6);
        assert_eq!(ids(catalog.filter(ProductFilter::Powder)), vec!["1"]);
        assert_eq!(ids(catalog.filter(ProductFilter::Ready)), vec!["3"]);
        assert_eq!(ids(catalog.filter(ProductFilter::Gift)), vec!["5"]);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("".parse::<ProductFilter>().unwrap(), ProductFilter::All);
        assert_eq!("Ready".parse::<ProductFilter>().unwrap(), ProductFilter::Ready);
        assert!("snacks".parse::<ProductFilter>().is_err());
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(catalog.search("sugar")), vec!["6"]);
        assert_eq!(ids(catalog.search("PACK")), vec!["1", "4", "6"]);
        assert_eq!(ids(catalog.search("  ")).len(), 6);
    }
}
