//! Language filter for the `+lang:` clause.
//!
//! Languages are identified by their ISO 639-1 code. The numeric ordinal of a
//! language is the base-26 value of its two-letter code plus one, so `aa` is
//! 1, `az` is 26 and `ba` is 27. Ordinal 0 means "any language".

use serde::{Deserialize, Serialize};

macro_rules! languages {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// A search language. `Any` disables the language filter.
        #[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum Language {
            #[default]
            Any,
            $($variant),+
        }

        impl Language {
            /// Every concrete language with its two-letter code.
            pub const TABLE: &'static [(Language, &'static str)] = &[
                $((Language::$variant, $code)),+
            ];
        }
    };
}

languages! {
    Afar => "aa", Abkhazian => "ab", Avestan => "ae", Afrikaans => "af", Akan => "ak",
    Amharic => "am", Aragonese => "an", Arabic => "ar", Assamese => "as", Avaric => "av",
    Aymara => "ay", Azerbaijani => "az",
    Bashkir => "ba", Belarusian => "be", Bulgarian => "bg", Bislama => "bi", Bambara => "bm",
    Bengali => "bn", Tibetan => "bo", Breton => "br", Bosnian => "bs",
    Catalan => "ca", Chechen => "ce", Chamorro => "ch", Corsican => "co", Cree => "cr",
    Czech => "cs", ChurchSlavic => "cu", Chuvash => "cv", Welsh => "cy",
    Danish => "da", German => "de", Divehi => "dv", Dzongkha => "dz",
    Ewe => "ee", Greek => "el", English => "en", Esperanto => "eo", Spanish => "es",
    Estonian => "et", Basque => "eu",
    Persian => "fa", Fulah => "ff", Finnish => "fi", Fijian => "fj", Faroese => "fo",
    French => "fr", WesternFrisian => "fy",
    Irish => "ga", ScottishGaelic => "gd", Galician => "gl", Guarani => "gn", Gujarati => "gu",
    Manx => "gv",
    Hausa => "ha", Hebrew => "he", Hindi => "hi", HiriMotu => "ho", Croatian => "hr",
    Haitian => "ht", Hungarian => "hu", Armenian => "hy", Herero => "hz",
    Interlingua => "ia", Indonesian => "id", Interlingue => "ie", Igbo => "ig",
    SichuanYi => "ii", Inupiaq => "ik", Ido => "io", Icelandic => "is", Italian => "it",
    Inuktitut => "iu",
    Japanese => "ja", Javanese => "jv",
    Georgian => "ka", Kongo => "kg", Kikuyu => "ki", Kuanyama => "kj", Kazakh => "kk",
    Kalaallisut => "kl", Khmer => "km", Kannada => "kn", Korean => "ko", Kanuri => "kr",
    Kashmiri => "ks", Kurdish => "ku", Komi => "kv", Cornish => "kw", Kirghiz => "ky",
    Latin => "la", Luxembourgish => "lb", Ganda => "lg", Limburgan => "li", Lingala => "ln",
    Lao => "lo", Lithuanian => "lt", LubaKatanga => "lu", Latvian => "lv",
    Malagasy => "mg", Marshallese => "mh", Maori => "mi", Macedonian => "mk",
    Malayalam => "ml", Mongolian => "mn", Marathi => "mr", Malay => "ms", Maltese => "mt",
    Burmese => "my",
    Nauru => "na", NorwegianBokmal => "nb", NorthNdebele => "nd", Nepali => "ne",
    Ndonga => "ng", Dutch => "nl", NorwegianNynorsk => "nn", Norwegian => "no",
    SouthNdebele => "nr", Navajo => "nv", Chichewa => "ny",
    Occitan => "oc", Ojibwa => "oj", Oromo => "om", Oriya => "or", Ossetian => "os",
    Punjabi => "pa", Pali => "pi", Polish => "pl", Pashto => "ps", Portuguese => "pt",
    Quechua => "qu",
    Romansh => "rm", Rundi => "rn", Romanian => "ro", Russian => "ru", Kinyarwanda => "rw",
    Sanskrit => "sa", Sardinian => "sc", Sindhi => "sd", NorthernSami => "se", Sango => "sg",
    Sinhala => "si", Slovak => "sk", Slovenian => "sl", Samoan => "sm", Shona => "sn",
    Somali => "so", Albanian => "sq", Serbian => "sr", Swati => "ss", SouthernSotho => "st",
    Sundanese => "su", Swedish => "sv", Swahili => "sw",
    Tamil => "ta", Telugu => "te", Tajik => "tg", Thai => "th", Tigrinya => "ti",
    Turkmen => "tk", Tagalog => "tl", Tswana => "tn", Tonga => "to", Turkish => "tr",
    Tsonga => "ts", Tatar => "tt", Twi => "tw", Tahitian => "ty",
    Uighur => "ug", Ukrainian => "uk", Urdu => "ur", Uzbek => "uz",
    Venda => "ve", Vietnamese => "vi", Volapuk => "vo",
    Walloon => "wa", Wolof => "wo",
    Xhosa => "xh",
    Yiddish => "yi", Yoruba => "yo",
    Zhuang => "za", Chinese => "zh", Zulu => "zu",
}

const ALPHABET_LEN: u16 = 26;

impl Language {
    /// Two-letter code, or `None` for `Any`.
    pub fn code(self) -> Option<&'static str> {
        Self::TABLE
            .iter()
            .find(|(language, _)| *language == self)
            .map(|(_, code)| *code)
    }

    /// Numeric ordinal of the language; 0 for `Any`.
    pub fn ordinal(self) -> u16 {
        self.code().and_then(ordinal_from_code).unwrap_or(0)
    }

    /// Look up a language by its two-letter code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Language> {
        Self::TABLE
            .iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(code))
            .map(|(language, _)| *language)
    }

    /// Resolve an ordinal to a defined language. Ordinal 0 is `Any`; ordinals
    /// that decode to a code without a language return `None`.
    pub fn from_ordinal(ordinal: u16) -> Option<Language> {
        if ordinal == 0 {
            return Some(Language::Any);
        }
        code_from_ordinal(ordinal).and_then(|code| Self::from_code(&code))
    }
}

/// Decode a 1-based ordinal into its two lowercase letters.
pub fn code_from_ordinal(ordinal: u16) -> Option<String> {
    let n = ordinal.checked_sub(1)?;
    if n >= ALPHABET_LEN * ALPHABET_LEN {
        return None;
    }
    let first = char::from(b'a' + (n / ALPHABET_LEN) as u8);
    let second = char::from(b'a' + (n % ALPHABET_LEN) as u8);
    Some([first, second].iter().collect())
}

/// Encode two lowercase letters into their 1-based ordinal.
pub fn ordinal_from_code(code: &str) -> Option<u16> {
    match code.as_bytes() {
        [a @ b'a'..=b'z', b @ b'a'..=b'z'] => {
            Some(u16::from(a - b'a') * ALPHABET_LEN + u16::from(b - b'a') + 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_decoding() {
        assert_eq!(code_from_ordinal(1).as_deref(), Some("aa"));
        assert_eq!(code_from_ordinal(26).as_deref(), Some("az"));
        assert_eq!(code_from_ordinal(27).as_deref(), Some("ba"));
        assert_eq!(code_from_ordinal(676).as_deref(), Some("zz"));
        assert_eq!(code_from_ordinal(0), None);
        assert_eq!(code_from_ordinal(677), None);
    }

    #[test]
    fn test_ordinal_encoding() {
        assert_eq!(ordinal_from_code("aa"), Some(1));
        assert_eq!(ordinal_from_code("zz"), Some(676));
        assert_eq!(ordinal_from_code("Aa"), None);
        assert_eq!(ordinal_from_code("abc"), None);
    }

    #[test]
    fn test_table_agrees_with_arithmetic() {
        for (language, code) in Language::TABLE {
            let ordinal = language.ordinal();
            assert!(ordinal > 0, "{:?} has no ordinal", language);
            assert_eq!(code_from_ordinal(ordinal).as_deref(), Some(*code));
            assert_eq!(Language::from_ordinal(ordinal), Some(*language));
        }
    }

    #[test]
    fn test_spot_values() {
        assert_eq!(Language::Afar.code(), Some("aa"));
        assert_eq!(Language::Spanish.code(), Some("es"));
        assert_eq!(Language::Chinese.code(), Some("zh"));
        assert_eq!(Language::Zulu.code(), Some("zu"));
        assert_eq!(Language::Any.code(), None);
        assert_eq!(Language::Any.ordinal(), 0);
    }

    #[test]
    fn test_undefined_ordinal() {
        // "ac" is not an ISO 639-1 code.
        assert_eq!(Language::from_ordinal(3), None);
        assert_eq!(Language::from_ordinal(1000), None);
        assert_eq!(Language::from_ordinal(0), Some(Language::Any));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ES"), Some(Language::Spanish));
        assert_eq!(Language::from_code("xx"), None);
    }
}
