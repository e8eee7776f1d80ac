//! Sample content for the catering demo.

#[derive(Debug, Clone)]
pub struct MenuPackage {
    pub name: &'static str,
    pub price_per_guest: f64,
    pub min_guests: u32,
    pub description: &'static str,
    pub courses: &'static [&'static str],
}

pub fn packages() -> Vec<MenuPackage> {
    vec![
        MenuPackage {
            name: "Garden Luncheon",
            price_per_guest: 38.0,
            min_guests: 20,
            description: "A light daytime spread for showers, launches and long lunches.",
            courses: &[
                "Seasonal crudites and whipped feta",
                "Roast chicken with salsa verde",
                "Lemon olive-oil cake",
            ],
        },
        MenuPackage {
            name: "Harvest Table",
            price_per_guest: 62.0,
            min_guests: 40,
            description: "Family-style dinner service built around the week's market haul.",
            courses: &[
                "Sourdough and cultured butter",
                "Burrata with charred stone fruit",
                "Braised short rib or mushroom ragu",
                "Brown-butter apple tart",
            ],
        },
        MenuPackage {
            name: "Midnight Reception",
            price_per_guest: 84.0,
            min_guests: 60,
            description: "Passed canapes and stations for weddings and galas that run late.",
            courses: &[
                "Oyster and champagne station",
                "Eight passed canapes",
                "Carving and pasta stations",
                "Espresso martini cart",
            ],
        },
    ]
}
