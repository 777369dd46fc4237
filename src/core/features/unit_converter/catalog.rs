//! Built-in unit catalog
//!
//! Factors convert a quantity into the category's base unit. Currency rates
//! are fixed reference values, not live exchange rates.

use super::registry::{Category, Region, Unit, TEMPERATURE};

pub(super) fn standard_categories() -> Vec<Category> {
    vec![
        length(),
        weight(),
        temperature(),
        volume(),
        area(),
        speed(),
        time(),
        digital_storage(),
        pressure(),
        energy(),
        currency(),
    ]
}

// Length (base: meters)
fn length() -> Category {
    Category::new(
        "Length",
        vec![
            Unit::new("Nanometers", "nm", 1e-9).aliases(&["nanometre", "nanometres"]),
            Unit::new("Micrometers", "µm", 1e-6).aliases(&["um", "micron", "microns", "micrometre"]),
            Unit::new("Millimeters", "mm", 0.001).aliases(&["millimetre", "millimetres"]),
            Unit::new("Centimeters", "cm", 0.01).aliases(&["centimetre", "centimetres"]),
            Unit::new("Meters", "m", 1.0).base().aliases(&["metre", "metres"]),
            Unit::new("Kilometers", "km", 1000.0).aliases(&["kilometre", "kilometres", "kms"]),
            Unit::new("Inches", "in", 0.0254).region(Region::Imperial).aliases(&["inch", "\""]),
            Unit::new("Feet", "ft", 0.3048).region(Region::Imperial).aliases(&["foot", "'"]),
            Unit::new("Yards", "yd", 0.9144).region(Region::Imperial),
            Unit::new("Miles", "mi", 1609.344).region(Region::Imperial),
            Unit::new("Nautical Miles", "nmi", 1852.0),
            Unit::new("Gaj", "gaj", 0.9144).region(Region::Indian),
        ],
    )
}

// Weight (base: grams)
fn weight() -> Category {
    Category::new(
        "Weight",
        vec![
            Unit::new("Milligrams", "mg", 0.001),
            Unit::new("Grams", "g", 1.0).base().aliases(&["gm", "gms"]),
            Unit::new("Kilograms", "kg", 1000.0).aliases(&["kgs", "kilo", "kilos"]),
            Unit::new("Tonnes", "t", 1_000_000.0).aliases(&["tonne", "metric ton", "metric tons"]),
            Unit::new("Ounces", "oz", 28.3495).region(Region::Imperial),
            Unit::new("Pounds", "lb", 453.592).region(Region::Imperial).aliases(&["lbs"]),
            Unit::new("Stones", "st", 6350.29).region(Region::Imperial),
            Unit::new("Tola", "tola", 11.6638).region(Region::Indian).aliases(&["tolas"]),
            Unit::new("Seer", "seer", 933.105).region(Region::Indian).aliases(&["seers"]),
            Unit::new("Maund", "maund", 37324.2).region(Region::Indian).aliases(&["maunds"]),
        ],
    )
}

// Temperature (affine, converted by formula)
fn temperature() -> Category {
    Category::new(
        TEMPERATURE,
        vec![
            Unit::affine("Celsius", "°C").base().aliases(&["c", "degc", "degrees celsius", "centigrade"]),
            Unit::affine("Fahrenheit", "°F").aliases(&["f", "degf", "degrees fahrenheit"]),
            Unit::affine("Kelvin", "K").aliases(&["kelvins"]),
        ],
    )
}

// Volume (base: liters)
fn volume() -> Category {
    Category::new(
        "Volume",
        vec![
            Unit::new("Milliliters", "mL", 0.001).aliases(&["millilitre", "millilitres"]),
            Unit::new("Liters", "L", 1.0).base().aliases(&["litre", "litres", "ltr"]),
            Unit::new("Cubic Meters", "m³", 1000.0).aliases(&["m3", "cubic metre", "cubic metres"]),
            Unit::new("Teaspoons", "tsp", 0.00492892),
            Unit::new("Tablespoons", "tbsp", 0.0147868),
            Unit::new("Fluid Ounces", "fl oz", 0.0295735).region(Region::Us).aliases(&["fl-oz", "floz"]),
            Unit::new("Cups", "cup", 0.236588).region(Region::Us),
            Unit::new("Pints", "pt", 0.473176).region(Region::Us),
            Unit::new("Quarts", "qt", 0.946353).region(Region::Us),
            Unit::new("Gallons", "gal", 3.78541).region(Region::Us).aliases(&["us gallons"]),
            Unit::new("Imperial Gallons", "imp gal", 4.54609).region(Region::Imperial).aliases(&["uk gallons"]),
        ],
    )
}

// Area (base: square meters)
fn area() -> Category {
    Category::new(
        "Area",
        vec![
            Unit::new("Square Meters", "m²", 1.0).base().aliases(&["m2", "sq m", "square metres"]),
            Unit::new("Square Kilometers", "km²", 1_000_000.0).aliases(&["km2", "sq km"]),
            Unit::new("Square Feet", "ft²", 0.092903).aliases(&["ft2", "sq ft", "sqft", "square foot"]),
            Unit::new("Square Yards", "yd²", 0.836127).aliases(&["yd2", "sq yd", "square yard"]),
            Unit::new("Acres", "ac", 4046.86),
            Unit::new("Hectares", "ha", 10_000.0),
            Unit::new("Bigha", "bigha", 2529.29).region(Region::Indian).aliases(&["bighas"]),
            Unit::new("Guntha", "guntha", 101.171).region(Region::Indian).aliases(&["gunthas"]),
            Unit::new("Cents", "cent", 40.4686).region(Region::Indian),
        ],
    )
}

// Speed (base: meters per second)
fn speed() -> Category {
    Category::new(
        "Speed",
        vec![
            Unit::new("Meters per Second", "m/s", 1.0).base().aliases(&["mps"]),
            Unit::new("Kilometers per Hour", "km/h", 0.277778).aliases(&["kmh", "kph", "kmph"]),
            Unit::new("Miles per Hour", "mph", 0.44704).aliases(&["mi/h"]),
            Unit::new("Knots", "kn", 0.514444).aliases(&["knot", "kt"]),
            Unit::new("Feet per Second", "ft/s", 0.3048).aliases(&["fps"]),
        ],
    )
}

// Time (base: seconds)
fn time() -> Category {
    Category::new(
        "Time",
        vec![
            Unit::new("Milliseconds", "ms", 0.001),
            Unit::new("Seconds", "s", 1.0).base().aliases(&["sec", "secs"]),
            Unit::new("Minutes", "min", 60.0).aliases(&["mins"]),
            Unit::new("Hours", "h", 3600.0).aliases(&["hr", "hrs"]),
            Unit::new("Days", "d", 86_400.0),
            Unit::new("Weeks", "wk", 604_800.0),
            Unit::new("Months", "mo", 2_629_800.0),
            Unit::new("Years", "yr", 31_557_600.0).aliases(&["yrs"]),
        ],
    )
}

// Digital storage (base: bytes, binary multiples)
fn digital_storage() -> Category {
    Category::new(
        "Digital Storage",
        vec![
            Unit::new("Bits", "bit", 0.125),
            Unit::new("Bytes", "B", 1.0).base(),
            Unit::new("Kilobytes", "KB", 1024.0),
            Unit::new("Megabytes", "MB", 1_048_576.0),
            Unit::new("Gigabytes", "GB", 1_073_741_824.0),
            Unit::new("Terabytes", "TB", 1_099_511_627_776.0),
        ],
    )
}

// Pressure (base: pascals)
fn pressure() -> Category {
    Category::new(
        "Pressure",
        vec![
            Unit::new("Pascals", "Pa", 1.0).base(),
            Unit::new("Kilopascals", "kPa", 1000.0),
            Unit::new("Bar", "bar", 100_000.0).aliases(&["bars"]),
            Unit::new("Atmospheres", "atm", 101_325.0),
            Unit::new("PSI", "psi", 6894.76),
            Unit::new("Millimeters of Mercury", "mmHg", 133.322),
        ],
    )
}

// Energy (base: joules)
fn energy() -> Category {
    Category::new(
        "Energy",
        vec![
            Unit::new("Joules", "J", 1.0).base(),
            Unit::new("Kilojoules", "kJ", 1000.0),
            Unit::new("Calories", "cal", 4.184),
            Unit::new("Kilocalories", "kcal", 4184.0),
            Unit::new("Watt-hours", "Wh", 3600.0),
            Unit::new("Kilowatt-hours", "kWh", 3_600_000.0),
        ],
    )
}

// Currency (base: US dollar, fixed reference rates)
fn currency() -> Category {
    Category::new(
        "Currency",
        vec![
            Unit::new("US Dollar", "USD", 1.0).base().aliases(&["$", "dollar", "dollars"]),
            Unit::new("Euro", "EUR", 1.08).aliases(&["€", "euros"]),
            Unit::new("British Pound", "GBP", 1.27).aliases(&["£", "sterling"]),
            Unit::new("Indian Rupee", "INR", 0.012).aliases(&["₹", "rs", "rupee", "rupees"]),
            Unit::new("Japanese Yen", "JPY", 0.0067).aliases(&["¥", "yen"]),
            Unit::new("Canadian Dollar", "CAD", 0.74),
            Unit::new("Australian Dollar", "AUD", 0.66),
        ],
    )
}
