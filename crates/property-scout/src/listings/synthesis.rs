use super::domain::{round_tenth, Property, PropertyType};
use super::sequence::{property_key, suburb_key, DrawStream};
use super::suburb::SuburbMetrics;

const STREET_TYPES: [&str; 8] = [
    "Street", "Road", "Avenue", "Drive", "Lane", "Terrace", "Place", "Court",
];

const STREET_NAMES: [&str; 22] = [
    "Beach", "Main", "Park", "Hill", "Ocean", "Bay", "Garden", "Forest", "Lake", "River", "Valley",
    "Ridge", "Maple", "Oak", "Pine", "Cedar", "Crown", "King", "Queen", "Victoria", "George",
    "Elizabeth",
];

const TYPE_MIX: [(PropertyType, f64); 5] = [
    (PropertyType::House, 0.45),
    (PropertyType::Apartment, 0.30),
    (PropertyType::Townhouse, 0.15),
    (PropertyType::Unit, 0.07),
    (PropertyType::Villa, 0.03),
];

const DAYS_ON_MARKET_BANDS: [((u32, u32), f64); 4] = [
    ((1, 14), 0.2),
    ((15, 45), 0.45),
    ((46, 90), 0.25),
    ((91, 180), 0.1),
];

const POPULATION_RANGE: (u32, u32) = (20, 35);
const PRICE_VARIATION: (f64, f64) = (0.85, 1.25);
const PRICE_STEP: f64 = 5_000.0;
const RENOVATION_PROBABILITY: f64 = 0.25;

/// Sampling distributions for one dwelling type.
struct TypeProfile {
    bedrooms: &'static [(u8, f64)],
    max_bathrooms: u32,
    parking: &'static [(u8, f64)],
    land: Option<(u32, u32)>,
    internal_area: (u32, u32),
    base_price_thousands: (u32, u32),
}

const HOUSE: TypeProfile = TypeProfile {
    bedrooms: &[(2, 0.1), (3, 0.4), (4, 0.35), (5, 0.15)],
    max_bathrooms: 3,
    parking: &[(0, 0.05), (1, 0.2), (2, 0.5), (3, 0.25)],
    land: Some((200, 800)),
    internal_area: (120, 350),
    base_price_thousands: (650, 2_500),
};

const TOWNHOUSE: TypeProfile = TypeProfile {
    bedrooms: &[(2, 0.3), (3, 0.5), (4, 0.2)],
    max_bathrooms: 3,
    parking: &[(1, 0.4), (2, 0.6)],
    land: Some((100, 300)),
    internal_area: (90, 200),
    base_price_thousands: (550, 1_200),
};

const VILLA: TypeProfile = TypeProfile {
    bedrooms: &[(2, 0.6), (3, 0.4)],
    max_bathrooms: 2,
    parking: &[(1, 0.5), (2, 0.5)],
    land: Some((150, 400)),
    internal_area: (80, 180),
    base_price_thousands: (500, 1_000),
};

const ATTACHED: TypeProfile = TypeProfile {
    bedrooms: &[(1, 0.3), (2, 0.5), (3, 0.2)],
    max_bathrooms: 2,
    parking: &[(0, 0.3), (1, 0.5), (2, 0.2)],
    land: None,
    internal_area: (50, 150),
    base_price_thousands: (350, 950),
};

impl TypeProfile {
    fn for_type(property_type: PropertyType) -> &'static Self {
        match property_type {
            PropertyType::House => &HOUSE,
            PropertyType::Townhouse => &TOWNHOUSE,
            PropertyType::Villa => &VILLA,
            PropertyType::Apartment | PropertyType::Unit => &ATTACHED,
        }
    }
}

/// Number of listings in a suburb, drawn from a stream keyed on the suburb alone.
pub fn population_size(suburb: &str) -> usize {
    let mut stream = DrawStream::seeded(suburb_key(suburb));
    stream.next_int(POPULATION_RANGE.0, POPULATION_RANGE.1) as usize
}

/// Synthesizes every listing for the suburb in index order.
pub fn synthesize_population(suburb: &str, metrics: &SuburbMetrics) -> Vec<Property> {
    (0..population_size(suburb))
        .map(|index| synthesize_property(suburb, index, metrics))
        .collect()
}

/// Synthesizes the listing at `index` from its own freshly seeded stream.
///
/// `_metrics` is accepted so generation can later lean on suburb quality; the
/// current distributions do not read it.
pub fn synthesize_property(suburb: &str, index: usize, _metrics: &SuburbMetrics) -> Property {
    let mut stream = DrawStream::seeded(property_key(suburb, index));

    let property_type = stream.choose_weighted(&TYPE_MIX);
    let address = street_address(&mut stream, suburb, property_type);

    let profile = TypeProfile::for_type(property_type);
    let bedrooms = stream.choose_weighted(profile.bedrooms);
    let bathrooms = (stream.next_int(1, profile.max_bathrooms) as u8).min(bedrooms);
    let parking_spaces = stream.choose_weighted(profile.parking);
    let land_size = profile
        .land
        .map(|(lo, hi)| stream.next_int(lo, hi))
        .unwrap_or(0);
    let internal_area = stream.next_int(profile.internal_area.0, profile.internal_area.1);
    let base_price = u64::from(stream.next_int(
        profile.base_price_thousands.0,
        profile.base_price_thousands.1,
    )) * 1_000;

    let variation = stream.next_float(PRICE_VARIATION.0, PRICE_VARIATION.1);
    let price = round_to_step((base_price as f64 * variation).trunc());

    let (lo, hi) = stream.choose_weighted(&DAYS_ON_MARKET_BANDS);
    let days_on_market = stream.next_int(lo, hi);

    let recently_renovated = stream.next_bool(RENOVATION_PROBABILITY);
    let distance_to_train = round_tenth(stream.next_float(0.2, 5.0));
    let distance_to_shops = round_tenth(stream.next_float(0.1, 3.0));

    Property {
        address,
        price,
        bedrooms,
        bathrooms,
        property_type,
        parking_spaces,
        land_size,
        internal_area,
        days_on_market,
        recently_renovated,
        distance_to_train,
        distance_to_shops,
    }
}

fn street_address(stream: &mut DrawStream, suburb: &str, property_type: PropertyType) -> String {
    if property_type.is_attached() {
        let unit = stream.next_int(1, 45);
        let number = stream.next_int(1, 300);
        let name = stream.pick(&STREET_NAMES);
        let kind = stream.pick(&STREET_TYPES);
        format!("Unit {unit}/{number} {name} {kind}, {suburb}")
    } else {
        let number = stream.next_int(1, 250);
        let name = stream.pick(&STREET_NAMES);
        let kind = stream.pick(&STREET_TYPES);
        format!("{number} {name} {kind}, {suburb}")
    }
}

/// Nearest multiple of 5000, ties to even.
fn round_to_step(price: f64) -> u64 {
    ((price / PRICE_STEP).round_ties_even() * PRICE_STEP).max(0.0) as u64
}
