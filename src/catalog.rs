//! Menu data: pizzas, toppings and sizes
//!
//! The catalog is static and read-only for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// A topping that can be scattered on a pizza
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Topping {
    /// Stable key (also selects the piece-count policy)
    pub id: &'static str,
    pub name: &'static str,
    pub unit_price: f64,
    /// Number of image variants; pieces pick from `1..=variants`
    pub variants: u8,
}

impl Topping {
    /// Highest usable image variant index (at least 1)
    pub fn variant_range(&self) -> std::ops::RangeInclusive<u8> {
        1..=self.variants.max(1)
    }
}

/// A pizza base on the menu
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pizza {
    pub id: &'static str,
    pub name: &'static str,
    pub base_price: f64,
    /// Index of the bread image used for the base
    pub base_image: u8,
    /// Toppings offered on this pizza
    pub toppings: &'static [Topping],
}

impl Pizza {
    /// Look up one of this pizza's toppings by id
    pub fn topping(&self, id: &str) -> Option<&'static Topping> {
        self.toppings.iter().find(|t| t.id == id)
    }

    /// Price for the given size and selected toppings
    pub fn total_price<'a>(
        &self,
        size: PizzaSize,
        selected: impl IntoIterator<Item = &'a Topping>,
    ) -> f64 {
        let toppings: f64 = selected.into_iter().map(|t| t.unit_price).sum();
        self.base_price * size.price_multiplier() + toppings
    }
}

/// Pizza sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PizzaSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" | "small" => Some(PizzaSize::Small),
            "m" | "medium" | "med" => Some(PizzaSize::Medium),
            "l" | "large" => Some(PizzaSize::Large),
            _ => None,
        }
    }

    /// Default visual scale of the pizza (and its toppings)
    pub fn scale(&self) -> f32 {
        match self {
            PizzaSize::Small => 0.7,
            PizzaSize::Medium => 0.85,
            PizzaSize::Large => 1.0,
        }
    }

    /// Base price multiplier
    pub fn price_multiplier(&self) -> f64 {
        match self {
            PizzaSize::Small => 0.8,
            PizzaSize::Medium => 1.0,
            PizzaSize::Large => 1.5,
        }
    }
}

/// Toppings offered on every pizza
pub static TOPPINGS: [Topping; 5] = [
    Topping { id: "basil", name: "Basil", unit_price: 2.0, variants: 10 },
    Topping { id: "broccoli", name: "Broccoli", unit_price: 2.0, variants: 10 },
    Topping { id: "onion", name: "Onion", unit_price: 2.0, variants: 10 },
    Topping { id: "mushroom", name: "Mushroom", unit_price: 2.5, variants: 10 },
    Topping { id: "sausage", name: "Sausage", unit_price: 3.0, variants: 10 },
];

/// Pizzas in pager order
pub static PIZZAS: [Pizza; 4] = [
    Pizza { id: "margherita", name: "Margherita", base_price: 17.0, base_image: 1, toppings: &TOPPINGS },
    Pizza { id: "pepperoni", name: "Pepperoni", base_price: 19.0, base_image: 2, toppings: &TOPPINGS },
    Pizza { id: "vegetarian", name: "Vegetarian", base_price: 18.0, base_image: 3, toppings: &TOPPINGS },
    Pizza { id: "hawaiian", name: "Hawaiian", base_price: 20.0, base_image: 4, toppings: &TOPPINGS },
];

/// Find a pizza by id
pub fn pizza(id: &str) -> Option<&'static Pizza> {
    PIZZAS.iter().find(|p| p.id == id)
}

/// Find a topping by id
pub fn topping(id: &str) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|t| t.id == id)
}
