//! Zodiac tables and sign/house arithmetic.
//!
//! Signs are fixed 30° divisions numbered 1-12 from Aries. Houses are numbered
//! 1-12 starting from the ascendant sign and rotate with it.

/// Number of signs, and of houses.
pub const SIGN_COUNT: u8 = 12;

pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

pub const SIGN_ABBREVIATIONS: [&str; 12] = [
    "Ari", "Tau", "Gem", "Can", "Leo", "Vir", "Lib", "Sco", "Sag", "Cap", "Aqu", "Pis",
];

// (display_name, vimshottari lord)
pub const NAKSHATRA_NAMES: [(&str, &str); 27] = [
    ("Ashwini", "KETU"),
    ("Bharani", "VENUS"),
    ("Krittika", "SUN"),
    ("Rohini", "MOON"),
    ("Mrigashira", "MARS"),
    ("Ardra", "RAHU"),
    ("Punarvasu", "JUPITER"),
    ("Pushya", "SATURN"),
    ("Ashlesha", "MERCURY"),
    ("Magha", "KETU"),
    ("Purva Phalguni", "VENUS"),
    ("Uttara Phalguni", "SUN"),
    ("Hasta", "MOON"),
    ("Chitra", "MARS"),
    ("Swati", "RAHU"),
    ("Vishakha", "JUPITER"),
    ("Anuradha", "SATURN"),
    ("Jyeshtha", "MERCURY"),
    ("Mula", "KETU"),
    ("Purva Ashadha", "VENUS"),
    ("Uttara Ashadha", "SUN"),
    ("Shravana", "MOON"),
    ("Dhanishta", "MARS"),
    ("Shatabhisha", "RAHU"),
    ("Purva Bhadrapada", "JUPITER"),
    ("Uttara Bhadrapada", "SATURN"),
    ("Revati", "MERCURY"),
];

/// True when `index` is a valid sign or house number.
pub fn is_valid_index(index: u8) -> bool {
    (1..=SIGN_COUNT).contains(&index)
}

/// House occupied by `sign` for a chart rising in `ascendant_sign`.
pub fn house_for_sign(sign: u8, ascendant_sign: u8) -> u8 {
    let offset = (i32::from(sign) - i32::from(ascendant_sign)).rem_euclid(12);
    offset as u8 + 1
}

/// Sign on the cusp of `house` for a chart rising in `ascendant_sign`.
pub fn sign_for_house(house: u8, ascendant_sign: u8) -> u8 {
    let offset = (i32::from(ascendant_sign) + i32::from(house) - 2).rem_euclid(12);
    offset as u8 + 1
}

/// Sign (1-12) containing the given ecliptic longitude.
pub fn sign_from_longitude(longitude: f64) -> u8 {
    let segment = (longitude / 30.0).floor() as i64;
    segment.rem_euclid(12) as u8 + 1
}

pub fn sign_name(sign: u8) -> Option<&'static str> {
    if !is_valid_index(sign) {
        return None;
    }
    SIGN_NAMES.get(usize::from(sign) - 1).copied()
}

pub fn sign_abbreviation(sign: u8) -> Option<&'static str> {
    if !is_valid_index(sign) {
        return None;
    }
    SIGN_ABBREVIATIONS.get(usize::from(sign) - 1).copied()
}

/// Display name of a nakshatra numbered 1-27.
pub fn nakshatra_name(nakshatra: u8) -> Option<&'static str> {
    let idx = usize::from(nakshatra).checked_sub(1)?;
    NAKSHATRA_NAMES.get(idx).map(|(name, _)| *name)
}
