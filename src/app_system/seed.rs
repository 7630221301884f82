//! Sample catalogue loaded into an empty product table at start-up.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::domain::Product;
use crate::store::{PersistenceContext, StoreError};

type Row = (
    &'static str,
    &'static str,
    &'static str,
    i64,
    i32,
    (i32, u32, u32),
    &'static str,
    bool,
);

#[rustfmt::skip]
const CATALOGUE: &[Row] = &[
    ("Wireless Mouse", "ELEC-0001", "Electronics", 2999, 150, (2025, 6, 1), "A-01", true),
    ("Mechanical Keyboard", "ELEC-0002", "Electronics", 8950, 75, (2025, 5, 20), "A-02", true),
    ("Stainless Steel Water Bottle", "HOME-0001", "Home", 1995, 200, (2025, 2, 10), "B-03", true),
    ("Organic Green Tea (100 bags)", "GROC-0001", "Grocery", 1200, 500, (2024, 11, 15), "C-04", true),
    ("Men's Denim Jacket", "CLOT-0001", "Clothing", 5999, 40, (2025, 3, 5), "D-05", true),
    ("Children's Building Blocks Set", "TOYS-0001", "Toys", 2499, 120, (2025, 4, 12), "E-06", true),
    ("Yoga Mat - Non Slip", "SPRT-0001", "Sports", 3400, 80, (2025, 1, 18), "F-07", true),
    ("Noise-Cancelling Headphones", "ELEC-0003", "Electronics", 19999, 25, (2024, 12, 1), "A-08", false),
    ("Hardcover Notebook - 200 pages", "BOOK-0001", "Books", 850, 300, (2025, 6, 10), "G-09", true),
    ("Vitamin D 1000IU - 120 capsules", "HLTH-0001", "Health", 1475, 60, (2024, 9, 30), "H-10", true),
    ("Smartphone Car Mount", "AUTO-0001", "Automotive", 1599, 220, (2025, 2, 2), "I-11", true),
    ("LED Desk Lamp with USB", "HOME-0002", "Home", 2749, 140, (2025, 3, 14), "B-12", true),
    ("Ceramic Coffee Mug - 12oz", "KTCH-0001", "Kitchen", 999, 360, (2024, 10, 5), "J-13", true),
    ("Wireless Charger Pad", "ELEC-0004", "Electronics", 2200, 180, (2025, 4, 1), "A-14", true),
    ("Eco-friendly Bamboo Toothbrush (4-pack)", "HLTH-0002", "Health", 750, 420, (2024, 8, 20), "H-15", true),
    ("Adjustable Laptop Stand", "OFFC-0001", "Office", 3999, 95, (2025, 1, 7), "K-16", true),
    ("Stain-Resistant Sofa Cover - Large", "HOME-0003", "Home", 6499, 50, (2025, 5, 25), "B-17", true),
    ("Kids' Puzzle 500 pcs", "TOYS-0002", "Toys", 1499, 210, (2025, 2, 28), "E-18", true),
    ("Trail Running Shoes - Men's 10", "SHOE-0001", "Shoes", 8999, 30, (2025, 3, 30), "L-19", true),
    ("Stainless Cutlery Set - 16pc", "KTCH-0002", "Kitchen", 3499, 110, (2024, 12, 18), "J-20", true),
    ("Bluetooth Speaker - Waterproof", "ELEC-0005", "Electronics", 4999, 85, (2025, 1, 25), "A-21", true),
    ("Portable Power Bank 20000mAh", "ELEC-0006", "Electronics", 3950, 130, (2024, 11, 2), "A-22", true),
    ("Non-stick Frying Pan 10 inch", "KTCH-0003", "Kitchen", 2499, 70, (2025, 4, 8), "J-23", true),
    ("Desk Organizer - Multi Compartment", "OFFC-0002", "Office", 1299, 250, (2025, 5, 2), "K-24", true),
    ("Garden Hose 50ft", "GRDN-0001", "Garden", 2995, 60, (2024, 9, 12), "M-25", true),
    ("Pet Bed - Medium", "PETS-0001", "Pet Supplies", 2200, 90, (2025, 2, 15), "N-26", true),
    ("Children's Raincoat - Age 4-6", "CLOT-0002", "Clothing", 1999, 75, (2025, 3, 20), "D-27", true),
    ("Electric Kettle 1.7L", "KTCH-0004", "Kitchen", 3499, 48, (2024, 12, 6), "J-28", true),
    ("Metal Screwdriver Set - 10pc", "TOOL-0001", "Tools", 1750, 160, (2025, 1, 12), "O-29", true),
    ("Classic Vinyl Record - Rock Hits", "MUSC-0001", "Music", 2100, 40, (2024, 10, 28), "P-30", true),
    ("Streaming Media Player", "ELEC-0007", "Electronics", 5999, 55, (2025, 6, 5), "A-31", true),
    ("Silicone Baking Mat - Set of 2", "KTCH-0005", "Kitchen", 1399, 140, (2025, 4, 20), "J-32", true),
    ("Women's Lightweight Scarf", "ACCS-0001", "Accessories", 1150, 220, (2025, 2, 27), "Q-33", true),
    ("Board Game - Strategy Edition", "GAME-0001", "Games", 4499, 65, (2025, 3, 9), "R-34", true),
    ("Reusable Grocery Tote - 3 pack", "HOME-0004", "Home", 950, 300, (2024, 11, 22), "B-35", true),
    ("Camping Lantern - LED", "OUTD-0001", "Outdoors", 1899, 95, (2025, 5, 18), "S-36", true),
    ("Leather Card Wallet", "ACCS-0002", "Accessories", 2400, 120, (2025, 1, 5), "Q-37", true),
    ("Anti-Fog Swim Goggles", "SPRT-0002", "Sports", 1299, 180, (2024, 9, 5), "F-38", true),
    ("Wireless Presentation Remote", "OFFC-0003", "Office", 1699, 85, (2025, 2, 9), "K-39", true),
    ("Aromatic Soy Candle - Lavender", "HOME-0005", "Home", 1199, 200, (2025, 4, 3), "B-40", true),
    ("4K Action Camera", "ELEC-0008", "Electronics", 29999, 3, (2024, 7, 15), "A-41", false),
    ("Ergonomic Office Chair", "FURN-0001", "Furniture", 24900, 25, (2025, 1, 20), "T-42", true),
    ("Cotton Bath Towel Set - 6pc", "HOME-0006", "Home", 3999, 180, (2024, 12, 5), "B-43", true),
    ("Protein Powder - Chocolate 2lb", "HLTH-0003", "Health", 3495, 5, (2024, 8, 18), "H-44", true),
    ("Digital Alarm Clock", "HOME-0007", "Home", 1999, 145, (2025, 3, 12), "B-45", true),
    ("Stainless Steel Cookware Set - 12pc", "KTCH-0006", "Kitchen", 18999, 8, (2024, 10, 22), "J-46", false),
    ("Women's Running Tank Top", "CLOT-0003", "Clothing", 2499, 95, (2025, 4, 7), "D-47", true),
    ("Cordless Drill Set", "TOOL-0002", "Tools", 11999, 35, (2024, 11, 30), "O-48", true),
    ("Gel Pen Set - 24 Colors", "OFFC-0004", "Office", 1550, 210, (2025, 2, 18), "K-49", true),
    ("Dog Chew Toys - 5 Pack", "PETS-0002", "Pet Supplies", 1699, 155, (2025, 1, 28), "N-50", true),
    ("Decorative Throw Pillows - Set of 4", "HOME-0008", "Home", 4499, 72, (2024, 9, 9), "B-51", true),
    ("Basketball - Official Size", "SPRT-0003", "Sports", 2999, 6, (2024, 7, 25), "F-52", false),
    ("Wall-Mounted Coat Rack", "FURN-0002", "Furniture", 3250, 88, (2025, 3, 3), "T-53", true),
    ("Organic Honey - 16oz", "GROC-0002", "Grocery", 1299, 240, (2024, 12, 12), "C-54", true),
    ("Men's Leather Belt", "ACCS-0003", "Accessories", 2999, 115, (2025, 2, 22), "Q-55", true),
    ("Tablet Stand - Adjustable", "ELEC-0009", "Electronics", 2499, 4, (2024, 8, 5), "A-56", true),
    ("Toddler Puzzle Set - Animals", "TOYS-0003", "Toys", 1899, 130, (2025, 1, 15), "E-57", true),
    ("Facial Moisturizer - SPF 30", "BEUT-0001", "Beauty", 2250, 165, (2024, 11, 8), "U-58", true),
    ("Car Phone Holder - Magnetic", "AUTO-0002", "Automotive", 1299, 7, (2024, 10, 15), "I-59", false),
    ("Microfiber Cleaning Cloths - 12 Pack", "HOME-0009", "Home", 1199, 320, (2025, 5, 5), "B-60", true),
    ("Gaming Mouse Pad - XL", "ELEC-0010", "Electronics", 1999, 98, (2025, 4, 15), "A-61", true),
    ("Hiking Backpack - 40L", "OUTD-0002", "Outdoors", 7999, 22, (2024, 9, 18), "S-62", true),
    ("Essential Oil Diffuser", "HOME-0010", "Home", 2999, 142, (2025, 3, 25), "B-63", true),
    ("Men's Wool Socks - 6 Pair", "CLOT-0004", "Clothing", 2499, 5, (2024, 7, 10), "D-64", false),
    ("Electric Toothbrush", "HLTH-0004", "Health", 4999, 68, (2025, 2, 5), "H-65", true),
    ("Non-Slip Rug Pad - 5x7", "HOME-0011", "Home", 1999, 175, (2024, 12, 28), "B-66", true),
    ("USB Flash Drive - 64GB", "ELEC-0011", "Electronics", 1499, 9, (2024, 8, 30), "A-67", true),
    ("Mixing Bowl Set - Stainless Steel", "KTCH-0007", "Kitchen", 2799, 105, (2025, 4, 18), "J-68", true),
    ("Insulated Travel Mug - 20oz", "KTCH-0008", "Kitchen", 2299, 189, (2025, 1, 9), "J-69", true),
    ("Baby Monitor with Camera", "BABY-0001", "Baby", 8999, 3, (2024, 6, 20), "V-70", false),
    ("Cordless Vacuum Cleaner", "HOME-0012", "Home", 17999, 18, (2024, 11, 25), "B-71", true),
    ("Sunglasses - Polarized", "ACCS-0004", "Accessories", 3999, 92, (2025, 5, 10), "Q-72", true),
    ("Dumbbell Set - 20lb Pair", "SPRT-0004", "Sports", 5499, 45, (2025, 3, 8), "F-73", true),
    ("Picture Frame Set - 8x10", "HOME-0013", "Home", 2999, 7, (2024, 7, 30), "B-74", true),
    ("Smart LED Light Bulbs - 4 Pack", "ELEC-0012", "Electronics", 4499, 125, (2025, 2, 12), "A-75", true),
    ("Grilling Tools Set - 3pc", "OUTD-0003", "Outdoors", 2499, 110, (2024, 10, 10), "S-76", true),
    ("Women's Crossbody Bag", "ACCS-0005", "Accessories", 4999, 6, (2024, 8, 12), "Q-77", false),
    ("Desk Calendar 2025", "OFFC-0005", "Office", 999, 200, (2024, 12, 1), "K-78", true),
    ("Inflatable Pool Float", "TOYS-0004", "Toys", 1999, 88, (2025, 4, 25), "E-79", true),
    ("Ceramic Plant Pot - Large", "GRDN-0002", "Garden", 2499, 135, (2025, 1, 22), "M-80", true),
    ("Wireless Earbuds", "ELEC-0013", "Electronics", 6999, 4, (2024, 9, 28), "A-81", true),
    ("Canvas Tote Bag", "ACCS-0006", "Accessories", 1499, 240, (2025, 3, 17), "Q-82", true),
    ("Laundry Hamper - Collapsible", "HOME-0014", "Home", 1999, 95, (2024, 11, 15), "B-83", true),
    ("Protein Bars - Variety Pack 12ct", "GROC-0003", "Grocery", 1999, 8, (2024, 6, 8), "C-84", false),
    ("Slow Cooker - 6 Quart", "KTCH-0009", "Kitchen", 4999, 32, (2025, 2, 1), "J-85", true),
    ("Exercise Resistance Bands Set", "SPRT-0005", "Sports", 1799, 170, (2025, 4, 30), "F-86", true),
    ("Men's Dress Shirt - White", "CLOT-0005", "Clothing", 3499, 62, (2024, 12, 20), "D-87", true),
    ("HDMI Cable - 6ft", "ELEC-0014", "Electronics", 999, 5, (2024, 7, 18), "A-88", true),
    ("Wooden Cutting Board - Large", "KTCH-0010", "Kitchen", 2999, 118, (2025, 5, 15), "J-89", true),
    ("Baby Blanket - Organic Cotton", "BABY-0002", "Baby", 2499, 145, (2025, 1, 30), "V-90", true),
    ("Computer Monitor Stand", "OFFC-0006", "Office", 3499, 2, (2024, 8, 22), "K-91", false),
    ("Outdoor String Lights - 48ft", "GRDN-0003", "Garden", 2999, 78, (2025, 3, 28), "M-92", true),
    ("Shampoo - Natural Formula 16oz", "BEUT-0002", "Beauty", 1299, 210, (2024, 10, 18), "U-93", true),
    ("Cat Scratching Post", "PETS-0003", "Pet Supplies", 2999, 54, (2025, 2, 14), "N-94", true),
    ("Thermal Coffee Carafe - 1L", "KTCH-0011", "Kitchen", 3499, 9, (2024, 9, 14), "J-95", true),
    ("Air Purifier - Small Room", "HOME-0015", "Home", 7999, 28, (2024, 11, 5), "B-96", true),
    ("Children's Art Supply Kit", "TOYS-0005", "Toys", 2999, 165, (2025, 4, 10), "E-97", true),
    ("Windshield Sun Shade", "AUTO-0003", "Automotive", 1499, 7, (2024, 6, 15), "I-98", false),
    ("Cooling Gel Pillow", "HOME-0016", "Home", 3999, 85, (2025, 1, 18), "B-99", true),
    ("Wireless Keyboard and Mouse Combo", "ELEC-0015", "Electronics", 4499, 112, (2025, 3, 5), "A-00", true),
    ("Stainless Steel Food Storage Set", "KTCH-0012", "Kitchen", 3299, 98, (2024, 12, 10), "J-01", true),
    ("Women's Yoga Pants", "CLOT-0006", "Clothing", 3999, 3, (2024, 7, 5), "D-02", true),
    ("Magnetic Whiteboard - 24x36", "OFFC-0007", "Office", 3499, 45, (2025, 2, 20), "K-03", true),
    ("Bike Repair Tool Kit", "SPRT-0006", "Sports", 2499, 128, (2025, 5, 22), "F-04", true),
    ("Digital Kitchen Scale", "KTCH-0013", "Kitchen", 1999, 6, (2024, 8, 8), "J-05", false),
    ("Decorative Wall Clock", "HOME-0017", "Home", 2999, 102, (2025, 4, 5), "B-06", true),
    ("Travel Backpack - 25L", "ACCS-0007", "Accessories", 5499, 58, (2024, 11, 12), "Q-07", true),
    ("Moisturizing Hand Cream - 3oz", "BEUT-0003", "Beauty", 899, 280, (2025, 1, 25), "U-08", true),
    ("Portable Bluetooth Speaker - Mini", "ELEC-0016", "Electronics", 2499, 8, (2024, 9, 1), "A-09", true),
    ("Stainless Steel Straws - 8 Pack", "KTCH-0014", "Kitchen", 1299, 195, (2025, 3, 15), "J-10", true),
    ("Men's Athletic Shorts", "CLOT-0007", "Clothing", 2499, 115, (2024, 12, 15), "D-11", true),
    ("Surge Protector Power Strip - 6 Outlet", "ELEC-0017", "Electronics", 1999, 4, (2024, 6, 25), "A-12", false),
    ("Drawer Organizers - Set of 6", "HOME-0018", "Home", 1799, 160, (2025, 2, 28), "B-13", true),
    ("Bamboo Serving Tray", "KTCH-0015", "Kitchen", 2299, 92, (2025, 5, 8), "J-14", true),
    ("Football - Youth Size", "SPRT-0007", "Sports", 1999, 72, (2024, 10, 3), "F-15", true),
    ("Wooden Toy Train Set", "TOYS-0006", "Toys", 3499, 9, (2024, 8, 28), "E-16", true),
    ("Glass Water Pitcher - 64oz", "KTCH-0016", "Kitchen", 2499, 138, (2025, 1, 10), "J-17", true),
    ("Umbrella - Compact Travel", "ACCS-0008", "Accessories", 1699, 5, (2024, 7, 22), "Q-18", false),
    ("Makeup Brush Set - 12pc", "BEUT-0004", "Beauty", 2999, 105, (2025, 4, 12), "U-19", true),
    ("Acrylic Photo Frame - 5x7", "HOME-0019", "Home", 1499, 175, (2024, 11, 28), "B-20", true),
    ("Car Tire Pressure Gauge", "AUTO-0004", "Automotive", 999, 210, (2025, 3, 1), "I-21", true),
    ("Multivitamin Gummies - 60ct", "HLTH-0005", "Health", 1499, 8, (2024, 9, 10), "H-22", true),
    ("Quilted Table Runner", "HOME-0020", "Home", 1999, 88, (2025, 2, 6), "B-23", true),
    ("Webcam - 1080p HD", "ELEC-0018", "Electronics", 4999, 42, (2024, 12, 22), "A-24", true),
    ("Ice Cube Trays - Silicone 2pk", "KTCH-0017", "Kitchen", 1199, 6, (2024, 6, 30), "J-25", false),
    ("Women's Winter Gloves", "ACCS-0009", "Accessories", 1799, 125, (2025, 1, 8), "Q-26", true),
    ("Jigsaw Puzzle - 1000 pieces", "GAME-0002", "Games", 1999, 98, (2025, 5, 1), "R-27", true),
    ("Extension Cord - 25ft Heavy Duty", "TOOL-0003", "Tools", 2499, 72, (2024, 10, 8), "O-28", true),
    ("Aquarium Starter Kit - 5 Gallon", "PETS-0004", "Pet Supplies", 5999, 3, (2024, 7, 12), "N-29", true),
    ("Dish Drying Rack - Stainless Steel", "KTCH-0018", "Kitchen", 2999, 110, (2025, 3, 22), "J-30", true),
    ("Memory Foam Bath Mat", "HOME-0021", "Home", 1999, 155, (2024, 11, 18), "B-31", true),
    ("Men's Polo Shirt", "CLOT-0008", "Clothing", 2999, 7, (2024, 8, 16), "D-32", false),
    ("Bluetooth FM Transmitter", "AUTO-0005", "Automotive", 1999, 82, (2025, 2, 25), "I-33", true),
    ("Recipe Box - Wooden", "KTCH-0019", "Kitchen", 2499, 125, (2025, 4, 28), "J-34", true),
    ("Camping Chair - Foldable", "OUTD-0004", "Outdoors", 3499, 55, (2024, 9, 22), "S-35", true),
    ("Wall-Mounted Key Holder", "HOME-0022", "Home", 1499, 9, (2024, 6, 18), "B-36", true),
    ("Printer Paper - 500 Sheets", "OFFC-0008", "Office", 1299, 340, (2025, 1, 12), "K-37", true),
    ("Baby Teething Toys - 5 Pack", "BABY-0003", "Baby", 1699, 198, (2025, 5, 20), "V-38", true),
    ("Compression Socks - 3 Pair", "HLTH-0006", "Health", 1999, 4, (2024, 7, 28), "H-39", false),
    ("WiFi Range Extender", "ELEC-0019", "Electronics", 3999, 38, (2025, 3, 10), "A-40", true),
    ("Silicone Oven Mitts - Pair", "KTCH-0020", "Kitchen", 1499, 165, (2024, 12, 3), "J-41", true),
    ("Children's Backpack - Cartoon Design", "ACCS-0010", "Accessories", 2499, 92, (2025, 2, 16), "Q-42", true),
    ("Garden Pruning Shears", "GRDN-0004", "Garden", 1799, 6, (2024, 8, 4), "M-43", true),
    ("Dry Erase Markers - 12 Pack", "OFFC-0009", "Office", 999, 275, (2025, 4, 22), "K-44", true),
    ("Bathtub Drain Stopper", "HOME-0023", "Home", 899, 180, (2024, 10, 25), "B-45", true),
    ("Smart Watch Band - Silicone", "ELEC-0020", "Electronics", 1299, 7, (2024, 6, 5), "A-46", false),
    ("Measuring Cups and Spoons Set", "KTCH-0021", "Kitchen", 1499, 220, (2025, 1, 28), "J-47", true),
    ("Basketball Hoop - Door Mount", "SPRT-0008", "Sports", 1999, 85, (2025, 5, 12), "F-48", true),
    ("Women's Tank Top - Pack of 3", "CLOT-0009", "Clothing", 2499, 5, (2024, 9, 15), "D-49", true),
    ("Shoe Rack - 4 Tier", "HOME-0024", "Home", 2999, 62, (2024, 11, 20), "B-50", true),
    ("Hand Sanitizer - 8oz Pump", "HLTH-0007", "Health", 699, 450, (2025, 3, 18), "H-51", true),
    ("LED Strip Lights - 16ft", "ELEC-0021", "Electronics", 2499, 8, (2024, 7, 8), "A-52", false),
    ("Pizza Stone - 14 inch", "KTCH-0022", "Kitchen", 2499, 98, (2025, 2, 10), "J-53", true),
    ("Pet Hair Roller", "PETS-0005", "Pet Supplies", 1199, 215, (2024, 12, 8), "N-54", true),
    ("Closet Organizer Hanging Shelves", "HOME-0025", "Home", 1999, 105, (2025, 4, 16), "B-55", true),
    ("Document Shredder - Personal", "OFFC-0010", "Office", 4999, 3, (2024, 8, 25), "K-56", true),
    ("Car Floor Mats - Universal", "AUTO-0006", "Automotive", 2999, 68, (2025, 1, 16), "I-57", true),
    ("Sewing Kit - 100 Pieces", "CRFT-0001", "Crafts", 1499, 145, (2025, 5, 28), "W-58", true),
    ("Nightlight - Motion Sensor", "HOME-0026", "Home", 1299, 9, (2024, 9, 20), "B-59", false),
    ("Coloring Book - Adult Mandalas", "BOOK-0002", "Books", 899, 190, (2025, 3, 6), "G-60", true),
    ("Nail Clipper Set - 5 Piece", "BEUT-0005", "Beauty", 1199, 6, (2024, 6, 12), "U-61", true),
    ("Spice Rack - Rotating", "KTCH-0023", "Kitchen", 2999, 78, (2025, 2, 23), "J-62", true),
    ("Meditation Cushion", "HLTH-0008", "Health", 3499, 52, (2024, 10, 12), "H-63", true),
    ("Jump Rope - Adjustable", "SPRT-0009", "Sports", 1299, 185, (2025, 4, 6), "F-64", true),
    ("Shower Curtain - Waterproof", "HOME-0027", "Home", 1699, 112, (2024, 11, 10), "B-65", true),
    ("Men's Baseball Cap", "ACCS-0011", "Accessories", 1999, 4, (2024, 7, 16), "Q-66", false),
    ("USB-C Hub - 7 in 1", "ELEC-0022", "Electronics", 3499, 48, (2025, 1, 20), "A-67", true),
    ("Cocktail Shaker Set", "KTCH-0024", "Kitchen", 2499, 95, (2025, 5, 25), "J-68", true),
    ("Dog Leash - Retractable", "PETS-0006", "Pet Supplies", 1999, 138, (2024, 12, 16), "N-69", true),
    ("Throw Blanket - Fleece", "HOME-0028", "Home", 2299, 8, (2024, 8, 10), "B-70", true),
    ("Sticky Notes - Assorted Colors", "OFFC-0011", "Office", 799, 380, (2025, 3, 12), "K-71", true),
    ("Bike Water Bottle Holder", "SPRT-0010", "Sports", 999, 7, (2024, 6, 22), "F-72", false),
    ("Lint Remover - Electric", "HOME-0029", "Home", 1499, 125, (2025, 2, 8), "B-73", true),
    ("Reading Glasses - +2.00", "HLTH-0009", "Health", 1299, 165, (2024, 10, 20), "H-74", true),
    ("Guitar Strings - Steel", "MUSC-0002", "Music", 999, 5, (2024, 7, 2), "P-75", true),
    ("Baking Sheet Set - 3 Piece", "KTCH-0025", "Kitchen", 2999, 88, (2025, 4, 24), "J-76", true),
    ("Baby Wipes - 480 Count", "BABY-0004", "Baby", 1699, 280, (2025, 1, 6), "V-77", true),
    ("Desktop Fan - USB Powered", "ELEC-0023", "Electronics", 1499, 9, (2024, 9, 8), "A-78", false),
    ("Placemats - Set of 4", "KTCH-0026", "Kitchen", 1999, 115, (2025, 5, 6), "J-79", true),
    ("Adjustable Wrench - 10 inch", "TOOL-0004", "Tools", 1299, 142, (2024, 11, 2), "O-80", true),
    ("Women's Cardigan Sweater", "CLOT-0010", "Clothing", 4499, 6, (2024, 6, 28), "D-81", true),
    ("Bath Bombs - 6 Pack", "BEUT-0006", "Beauty", 1899, 175, (2025, 3, 28), "U-82", true),
    ("Bookends - Metal Pair", "OFFC-0012", "Office", 1699, 92, (2024, 12, 25), "K-83", true),
    ("Bike Lock - Cable", "SPRT-0011", "Sports", 1499, 7, (2024, 8, 18), "F-84", false),
    ("Corkscrew - Wine Opener", "KTCH-0027", "Kitchen", 1199, 205, (2025, 2, 4), "J-85", true),
    ("Wall Hooks - 10 Pack", "HOME-0030", "Home", 899, 310, (2025, 5, 18), "B-86", true),
    ("Car Vacuum Cleaner - Handheld", "AUTO-0007", "Automotive", 3499, 3, (2024, 9, 25), "I-87", true),
    ("First Aid Kit - 100 Piece", "HLTH-0010", "Health", 2499, 85, (2025, 1, 14), "H-88", true),
    ("Phone Screen Protector - 3 Pack", "ELEC-0024", "Electronics", 999, 8, (2024, 6, 8), "A-89", true),
    ("Salad Spinner", "KTCH-0028", "Kitchen", 1999, 122, (2025, 4, 2), "J-90", true),
];

/// The sample catalogue as transient entities, in insertion order.
pub fn seed_products() -> Vec<Product> {
    CATALOGUE
        .iter()
        .map(|&(name, sku, category, cents, quantity, (y, m, d), location, is_active)| Product {
            id: 0,
            product_name: Some(name.to_string()),
            sku: Some(sku.to_string()),
            category: Some(category.to_string()),
            price: Some(Decimal::new(cents, 2)),
            quantity: Some(quantity),
            date_added: NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(0, 0, 0)),
            location: Some(location.to_string()),
            is_active,
        })
        .collect()
}

/// Insert the catalogue in one commit when the table is empty. Returns the
/// number of rows written.
#[instrument(skip(context))]
pub async fn seed_if_empty<C>(context: &mut C) -> Result<usize, StoreError>
where
    C: PersistenceContext<Product> + ?Sized,
{
    let existing = context.count().await?;
    if existing > 0 {
        info!(existing, "Product table already populated, skipping seed");
        return Ok(0);
    }

    for product in seed_products() {
        context.add(product);
    }
    let written = context.save_changes().await?;

    info!(seeded = written.len(), "Seeded product table");
    Ok(written.len())
}
