//! Parsing of filter arguments such as `50MB`, `2W` and `movies`.

use zooqle_core::{Categories, Language, Size, SizeUnit, TimeUnit};

/// An amount of time such as `2W`, before it is turned into an age filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub amount: i32,
    pub unit: TimeUnit,
}

/// Split `50MB` into its leading number and trailing unit text.
fn split_amount(value: &str) -> Result<(i32, &str), String> {
    let value = value.trim();
    let digits = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    if digits == 0 {
        return Err(format!("'{}' does not start with a number", value));
    }

    let (amount, unit) = value.split_at(digits);
    let amount = amount
        .parse::<i32>()
        .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;
    if amount <= 0 {
        return Err(format!("amount must be positive, got {}", amount));
    }
    Ok((amount, unit.trim()))
}

/// Parse a size bound: a positive number followed by KB, MB or GB.
pub fn parse_size(value: &str) -> Result<Size, String> {
    let (amount, unit) = split_amount(value)?;
    let unit = match unit.to_ascii_uppercase().as_str() {
        "KB" | "K" => SizeUnit::Kb,
        "MB" | "M" => SizeUnit::Mb,
        "GB" | "G" => SizeUnit::Gb,
        other => return Err(format!("unknown size unit '{}' (expected KB, MB or GB)", other)),
    };
    Ok(Size::new(amount, unit))
}

/// Parse an age: a positive number followed by H, D, W or M.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let (amount, unit) = split_amount(value)?;
    let unit = match unit.to_ascii_uppercase().as_str() {
        "H" => TimeUnit::Hour,
        "D" => TimeUnit::Day,
        "W" => TimeUnit::Week,
        "M" => TimeUnit::Month,
        other => return Err(format!("unknown time unit '{}' (expected H, D, W or M)", other)),
    };
    Ok(Duration { amount, unit })
}

pub fn parse_category(value: &str) -> Result<Categories, String> {
    Categories::from_name(value.trim()).ok_or_else(|| {
        let known: Vec<&str> = Categories::all().names().collect();
        format!("unknown category '{}' (expected one of {})", value, known.join(", "))
    })
}

pub fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_code(value.trim())
        .ok_or_else(|| format!("unknown language code '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("50MB").unwrap(), Size::new(50, SizeUnit::Mb));
        assert_eq!(parse_size("1gb").unwrap(), Size::new(1, SizeUnit::Gb));
        assert_eq!(parse_size("700K").unwrap(), Size::new(700, SizeUnit::Kb));
        assert_eq!(parse_size(" 2 GB ").unwrap(), Size::new(2, SizeUnit::Gb));
    }

    #[test]
    fn test_parse_size_rejects_bad_input() {
        assert!(parse_size("MB").is_err());
        assert!(parse_size("0MB").is_err());
        assert!(parse_size("50TB").is_err());
        assert!(parse_size("50").is_err());
        assert!(parse_size("99999999999GB").is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(
            parse_duration("2W").unwrap(),
            Duration {
                amount: 2,
                unit: TimeUnit::Week
            }
        );
        assert_eq!(parse_duration("12h").unwrap().unit, TimeUnit::Hour);
        assert_eq!(parse_duration("3D").unwrap().unit, TimeUnit::Day);
        assert_eq!(parse_duration("6M").unwrap().unit, TimeUnit::Month);
    }

    #[test]
    fn test_parse_duration_rejects_bad_input() {
        assert!(parse_duration("2Y").is_err());
        assert!(parse_duration("W").is_err());
        assert!(parse_duration("-1D").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("movies").unwrap(), Categories::MOVIES);
        assert_eq!(parse_category("TV").unwrap(), Categories::TV);
        assert!(parse_category("podcasts").unwrap_err().contains("Movies"));
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language("es").unwrap(), Language::from_code("es").unwrap());
        assert!(parse_language("zz").is_err());
    }
}
