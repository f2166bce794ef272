//! Built-in category hierarchy (6 roots, depth 3, globally unique ids).

use super::CategoryNode;

pub static CATEGORIES: &[CategoryNode] = &[
    category!("electronics", "Electronics", "📱", [
        category!("cell-phones", "Cell Phones & Smartphones", [
            category!("iphone", "Apple iPhone"),
            category!("samsung", "Samsung Galaxy"),
            category!("google-pixel", "Google Pixel"),
            category!("other-phones", "Other Smartphones"),
        ]),
        category!("computers", "Computers & Tablets", [
            category!("laptops", "Laptops & Netbooks"),
            category!("desktops", "Desktop Computers"),
            category!("tablets", "Tablets & eReaders"),
            category!("monitors", "Monitors"),
        ]),
        category!("cameras", "Cameras & Photo", [
            category!("digital-cameras", "Digital Cameras"),
            category!("camera-lenses", "Lenses & Filters"),
            category!("camera-accessories", "Camera Accessories"),
        ]),
        category!("video-games", "Video Games & Consoles", [
            category!("consoles", "Video Game Consoles"),
            category!("games", "Video Games"),
            category!("gaming-accessories", "Gaming Accessories"),
        ]),
    ]),
    category!("fashion", "Clothing, Shoes & Accessories", "👕", [
        category!("mens-clothing", "Men's Clothing", [
            category!("mens-shirts", "Shirts"),
            category!("mens-pants", "Pants"),
            category!("mens-jackets", "Coats & Jackets"),
            category!("mens-suits", "Suits & Blazers"),
        ]),
        category!("womens-clothing", "Women's Clothing", [
            category!("womens-dresses", "Dresses"),
            category!("womens-tops", "Tops & Blouses"),
            category!("womens-pants", "Pants & Leggings"),
            category!("womens-jackets", "Coats & Jackets"),
        ]),
        category!("shoes", "Shoes", [
            category!("mens-shoes", "Men's Shoes"),
            category!("womens-shoes", "Women's Shoes"),
            category!("kids-shoes", "Kids' Shoes"),
        ]),
    ]),
    category!("home-garden", "Home & Garden", "🏠", [
        category!("furniture", "Furniture", [
            category!("sofas", "Sofas & Couches"),
            category!("tables", "Tables"),
            category!("chairs", "Chairs"),
            category!("beds", "Beds & Bed Frames"),
        ]),
        category!("kitchen", "Kitchen, Dining & Bar", [
            category!("cookware", "Cookware"),
            category!("small-appliances", "Small Kitchen Appliances"),
            category!("dinnerware", "Dinnerware & Serveware"),
        ]),
        category!("tools", "Tools & Workshop Equipment", [
            category!("power-tools", "Power Tools"),
            category!("hand-tools", "Hand Tools"),
            category!("tool-storage", "Tool Storage"),
        ]),
    ]),
    category!("sporting-goods", "Sporting Goods", "⚽", [
        category!("outdoor-sports", "Outdoor Sports", [
            category!("cycling", "Cycling"),
            category!("camping", "Camping & Hiking"),
            category!("fishing", "Fishing"),
        ]),
        category!("fitness", "Fitness, Running & Yoga", [
            category!("cardio-equipment", "Cardio Equipment"),
            category!("strength-training", "Strength Training"),
            category!("yoga-pilates", "Yoga & Pilates"),
        ]),
        category!("team-sports", "Team Sports", [
            category!("basketball", "Basketball"),
            category!("soccer", "Soccer"),
            category!("baseball", "Baseball & Softball"),
        ]),
    ]),
    category!("collectibles", "Collectibles & Art", "🎨", [
        category!("collectibles-memorabilia", "Collectibles", [
            category!("trading-cards", "Trading Cards"),
            category!("coins", "Coins & Paper Money"),
            category!("stamps", "Stamps"),
            category!("sports-memorabilia", "Sports Memorabilia"),
        ]),
        category!("art", "Art", [
            category!("paintings", "Paintings"),
            category!("prints", "Art Prints"),
            category!("sculptures", "Sculptures"),
        ]),
        category!("antiques", "Antiques", [
            category!("antique-furniture", "Furniture"),
            category!("antique-decor", "Decorative Arts"),
            category!("antique-jewelry", "Jewelry"),
        ]),
    ]),
    category!("motors", "Motors", "🚗", [
        category!("auto-parts", "Auto Parts & Accessories", [
            category!("car-parts", "Car & Truck Parts"),
            category!("car-electronics", "Car Electronics"),
            category!("wheels-tires", "Wheels, Tires & Parts"),
        ]),
        category!("motorcycles", "Motorcycles", [
            category!("motorcycle-parts", "Motorcycle Parts"),
            category!("motorcycle-accessories", "Accessories & Gear"),
        ]),
    ]),
];
