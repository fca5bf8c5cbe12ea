//! Display-name tables for the panchang elements.
//!
//! Names are immutable static data selected through a [`NameProfile`],
//! which callers inject into the classifier. There is no hidden global
//! language state; switching languages is picking a different profile.
//!
//! The transliterated Sanskrit element names are shared across profiles.
//! English differs where a conventional translation exists: zodiac signs
//! (Aries..Pisces) and weekdays (Sunday..Saturday).

use crate::vaar::Vaar;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Sanskrit,
    English,
}

/// One language's complete set of element name tables.
///
/// The karana table is 11 entries addressed through
/// [`crate::karana::karana_name_slot`]: Kimstughna, the seven movable
/// names, then Shakuni, Chatushpada, Naga.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameProfile {
    pub tithi: &'static [&'static str; 30],
    pub nakshatra: &'static [&'static str; 27],
    pub yoga: &'static [&'static str; 27],
    pub karana: &'static [&'static str; 11],
    pub rashi: &'static [&'static str; 12],
    pub vaar: &'static [&'static str; 7],
}

impl NameProfile {
    /// The immutable profile for a display language.
    pub const fn for_language(language: Language) -> &'static NameProfile {
        match language {
            Language::Sanskrit => &SANSKRIT,
            Language::English => &ENGLISH,
        }
    }

    /// Weekday display name.
    pub const fn vaar_name(&self, vaar: Vaar) -> &'static str {
        self.vaar[vaar.index() as usize]
    }
}

const TITHI_NAMES: [&str; 30] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

const KARANA_NAMES: [&str; 11] = [
    "Kimstughna",
    "Bava",
    "Balava",
    "Kaulava",
    "Taitila",
    "Garija",
    "Vanija",
    "Vishti",
    "Shakuni",
    "Chatushpada",
    "Naga",
];

const RASHI_NAMES_SANSKRIT: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrishchika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

const RASHI_NAMES_ENGLISH: [&str; 12] = [
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

const VAAR_NAMES_SANSKRIT: [&str; 7] = [
    "Ravivara",
    "Somavara",
    "Mangalavara",
    "Budhavara",
    "Guruvara",
    "Shukravara",
    "Shanivara",
];

const VAAR_NAMES_ENGLISH: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

static SANSKRIT: NameProfile = NameProfile {
    tithi: &TITHI_NAMES,
    nakshatra: &NAKSHATRA_NAMES,
    yoga: &YOGA_NAMES,
    karana: &KARANA_NAMES,
    rashi: &RASHI_NAMES_SANSKRIT,
    vaar: &VAAR_NAMES_SANSKRIT,
};

static ENGLISH: NameProfile = NameProfile {
    tithi: &TITHI_NAMES,
    nakshatra: &NAKSHATRA_NAMES,
    yoga: &YOGA_NAMES,
    karana: &KARANA_NAMES,
    rashi: &RASHI_NAMES_ENGLISH,
    vaar: &VAAR_NAMES_ENGLISH,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    #[test]
    fn all_names_nonempty() {
        for profile in [
            NameProfile::for_language(Language::Sanskrit),
            NameProfile::for_language(Language::English),
        ] {
            assert!(profile.tithi.iter().all(|n| !n.is_empty()));
            assert!(profile.nakshatra.iter().all(|n| !n.is_empty()));
            assert!(profile.yoga.iter().all(|n| !n.is_empty()));
            assert!(profile.karana.iter().all(|n| !n.is_empty()));
            assert!(profile.rashi.iter().all(|n| !n.is_empty()));
            assert!(profile.vaar.iter().all(|n| !n.is_empty()));
        }
    }

    #[test]
    fn english_translates_rashi_and_vaar() {
        let en = NameProfile::for_language(Language::English);
        assert_eq!(en.rashi[0], "Aries");
        assert_eq!(en.vaar_name(Vaar::Ravivara), "Sunday");
        // Element names stay transliterated.
        assert_eq!(en.tithi[14], "Purnima");
    }

    #[test]
    fn vaar_names_align_with_indices() {
        let sa = NameProfile::for_language(Language::Sanskrit);
        for v in ALL_VAARS {
            assert_eq!(sa.vaar_name(v), sa.vaar[v.index() as usize]);
        }
    }

    #[test]
    fn paksha_halves_mirror() {
        // Shukla 1-14 and Krishna 16-29 share names; 15/30 differ.
        for i in 0..14 {
            assert_eq!(TITHI_NAMES[i], TITHI_NAMES[i + 15]);
        }
        assert_ne!(TITHI_NAMES[14], TITHI_NAMES[29]);
    }
}
