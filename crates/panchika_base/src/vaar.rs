//! Vaar (weekday) determination from the Julian Day.

/// The seven vaars in Sunday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All seven vaars in order (0 = Ravivara/Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    /// 0-based index, Sunday first.
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivara => 0,
            Self::Somavara => 1,
            Self::Mangalavara => 2,
            Self::Budhavara => 3,
            Self::Guruvara => 4,
            Self::Shukravara => 5,
            Self::Shanivara => 6,
        }
    }
}

/// Weekday of a JD (UT) instant.
///
/// JD 0 falls on a Monday noon; `floor(jd + 1.5) mod 7` therefore maps
/// 0 to Sunday for the civil day containing the instant.
pub fn vaar_from_jd(jd_ut: f64) -> Vaar {
    let idx = ((jd_ut + 1.5).floor() as i64).rem_euclid(7);
    ALL_VAARS[idx as usize]
}
