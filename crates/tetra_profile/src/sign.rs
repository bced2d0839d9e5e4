//! Zodiac sign and element mapping.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Signs map onto the four classical elements in the fixed repeating order
//! fire, earth, air, water: `element = ELEMENT_CYCLE[sign_index % 4]`.
//! That cyclic-by-4 rule is the system's defining table and is pinned by
//! tests for all 12 indices.

use tetra_orbit::normalize_deg;

/// The 12 zodiac signs starting from Aries at 0 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Element of this sign under the cyclic-by-4 rule.
    pub const fn element(self) -> Element {
        ELEMENT_CYCLE[(self.index() % 4) as usize]
    }
}

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The repeating element order over sign indices.
pub const ELEMENT_CYCLE: [Element; 4] =
    [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    /// Lowercase name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }

    /// 0-based index into [`ELEMENT_CYCLE`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Earth => 1,
            Self::Air => 2,
            Self::Water => 3,
        }
    }
}

/// Sign position derived from an ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    /// The zodiac sign.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Determine the zodiac sign from an ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// and so on. Input outside [0, 360) is normalized first.
pub fn sign_from_longitude(lon_deg: f64) -> SignInfo {
    let lon = normalize_deg(lon_deg);
    let sign_index = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_index = sign_index.min(11);
    let degrees_in_sign = lon - (sign_index as f64) * 30.0;
    SignInfo {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        degrees_in_sign,
    }
}
