//! Static reference data backing the mock search. Stands in for a real
//! airport/airline catalog.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

pub const AIRPORTS: &[Airport] = &[
    Airport { code: "NYC", name: "New York City", city: "New York" },
    Airport { code: "LAX", name: "Los Angeles International", city: "Los Angeles" },
    Airport { code: "LHR", name: "London Heathrow", city: "London" },
    Airport { code: "CDG", name: "Charles de Gaulle", city: "Paris" },
    Airport { code: "NRT", name: "Narita International", city: "Tokyo" },
    Airport { code: "DXB", name: "Dubai International", city: "Dubai" },
    Airport { code: "SIN", name: "Singapore Changi", city: "Singapore" },
    Airport { code: "DEL", name: "Indira Gandhi International", city: "Delhi" },
    Airport { code: "BOM", name: "Chhatrapati Shivaji International", city: "Mumbai" },
    Airport { code: "SYD", name: "Sydney Kingsford Smith", city: "Sydney" },
];

pub const AIRLINES: &[&str] = &[
    "Emirates",
    "Singapore Airlines",
    "Qatar Airways",
    "Lufthansa",
    "British Airways",
    "American Airlines",
    "Delta Air Lines",
    "United Airlines",
    "Air India",
    "IndiGo",
];

/// (city, airport code) pairs surfaced on the landing page
pub const POPULAR_DESTINATIONS: &[(&str, &str)] = &[
    ("Mumbai", "BOM"),
    ("Delhi", "DEL"),
    ("Bangalore", "BLR"),
    ("Goa", "GOI"),
    ("Kolkata", "CCU"),
    ("Hyderabad", "HYD"),
];

/// City for a known airport code; unknown codes fall back to the code itself.
pub fn airport_city(code: &str) -> &str {
    AIRPORTS
        .iter()
        .find(|a| a.code == code)
        .map(|a| a.city)
        .unwrap_or(code)
}
