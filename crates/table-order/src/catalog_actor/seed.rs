//! The house dessert menu, loaded by [`TableOrderSystem::with_seed_menu`](crate::lifecycle::TableOrderSystem::with_seed_menu).

use crate::model::CatalogItemCreate;

const MENU: [(&str, &str, &str, &str, &str); 20] = [
    ("Milk Tart", "Traditional South African custard tart", "45.00", "Desserts", "🥧"),
    ("Koeksisters", "Sweet braided pastry with syrup", "25.00", "Desserts", "🍩"),
    ("Chocolate Cake", "Rich chocolate sponge cake", "85.00", "Cakes", "🍰"),
    ("Vanilla Cupcake", "Fluffy vanilla cupcake with buttercream", "28.00", "Cakes", "🧁"),
    ("Red Velvet", "Classic red velvet with cream cheese frosting", "65.00", "Cakes", "🍰"),
    ("Macarons (6pc)", "Assorted French macarons", "95.00", "Macaroons", "🍬"),
    ("Chocolate Macarons", "Rich chocolate macarons (4pc)", "72.00", "Macaroons", "🍬"),
    ("Croissant", "Buttery French croissant", "22.00", "Croissants", "🥐"),
    ("Almond Croissant", "Croissant filled with almond cream", "35.00", "Croissants", "🥐"),
    ("Chocolate Milkshake", "Thick chocolate milkshake", "38.00", "Milkshakes", "🥤"),
    ("Vanilla Milkshake", "Classic vanilla milkshake", "38.00", "Milkshakes", "🥤"),
    ("Strawberry Milkshake", "Fresh strawberry milkshake", "41.00", "Milkshakes", "🥤"),
    ("Caramel Milkshake", "Sweet caramel milkshake", "41.00", "Milkshakes", "🥤"),
    ("Cheese Cake", "New York style cheesecake", "55.00", "Desserts", "🍰"),
    ("Tiramisu", "Classic Italian coffee dessert", "68.00", "Desserts", "🍮"),
    ("Cookies (3pc)", "Fresh baked chocolate chip cookies", "24.00", "Cookies", "🍪"),
    ("Oatmeal Cookies", "Healthy oatmeal raisin cookies (3pc)", "22.00", "Cookies", "🍪"),
    ("Brownie", "Fudgy chocolate brownie", "32.00", "Desserts", "🍫"),
    ("Apple Pie", "Warm apple pie with cinnamon", "48.00", "Desserts", "🥧"),
    ("Ice Cream Scoop", "Vanilla ice cream scoop", "18.00", "Desserts", "🍦"),
];

/// Create requests for the twenty-item menu, in menu order.
pub fn seed_menu() -> Vec<CatalogItemCreate> {
    MENU.iter()
        .map(|&(name, description, price, category, image)| {
            CatalogItemCreate::new(name, description, price)
                .with_category(category)
                .with_image(image)
        })
        .collect()
}
