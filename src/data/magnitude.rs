use thiserror::Error;

// ---------------------------------------------------------------------------
// Magnitude strings: "<integer><unit>", e.g. "10g" or "12µg"
// ---------------------------------------------------------------------------

/// Unit suffix of the `gRange` column.
pub const G_SUFFIX: &str = "g";

/// Unit suffix of the `biasInrun` column.
pub const MICRO_G_SUFFIX: &str = "µg";

/// Why a magnitude string could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MagnitudeError {
    #[error("expected unit suffix '{suffix}'")]
    MissingSuffix { suffix: String },

    #[error("no digits before the unit suffix")]
    Empty,

    #[error("'{digits}' is not an integer")]
    NotAnInteger { digits: String },
}

/// Parse a magnitude such as `"10g"` into its integer part.
///
/// Surrounding whitespace is ignored and the suffix is mandatory. For the
/// micro prefix both MICRO SIGN (U+00B5) and GREEK SMALL LETTER MU (U+03BC)
/// are accepted, since both show up in hand-edited data files.
pub fn parse_magnitude(raw: &str, suffix: &str) -> Result<i64, MagnitudeError> {
    let trimmed = raw.trim();

    let digits = strip_unit(trimmed, suffix).ok_or_else(|| MagnitudeError::MissingSuffix {
        suffix: suffix.to_string(),
    })?;
    let digits = digits.trim_end();

    if digits.is_empty() {
        return Err(MagnitudeError::Empty);
    }

    digits
        .parse::<i64>()
        .map_err(|_| MagnitudeError::NotAnInteger {
            digits: digits.to_string(),
        })
}

fn strip_unit<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    if let Some(rest) = value.strip_suffix(suffix) {
        return Some(rest);
    }
    // µ (U+00B5) vs μ (U+03BC)
    let alternate = suffix.replace('\u{00B5}', "\u{03BC}");
    if alternate != suffix {
        return value.strip_suffix(alternate.as_str());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_g_and_micro_g() {
        assert_eq!(parse_magnitude("10g", G_SUFFIX), Ok(10));
        assert_eq!(parse_magnitude("400g", G_SUFFIX), Ok(400));
        assert_eq!(parse_magnitude("12µg", MICRO_G_SUFFIX), Ok(12));
    }

    #[test]
    fn accepts_greek_mu_and_whitespace() {
        assert_eq!(parse_magnitude("30\u{03BC}g", MICRO_G_SUFFIX), Ok(30));
        assert_eq!(parse_magnitude("  25g ", G_SUFFIX), Ok(25));
        assert_eq!(parse_magnitude("25 g", G_SUFFIX), Ok(25));
    }

    #[test]
    fn negative_values_parse() {
        assert_eq!(parse_magnitude("-5g", G_SUFFIX), Ok(-5));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_magnitude("abc", G_SUFFIX),
            Err(MagnitudeError::MissingSuffix {
                suffix: "g".to_string()
            })
        );
        assert_eq!(
            parse_magnitude("abcg", G_SUFFIX),
            Err(MagnitudeError::NotAnInteger {
                digits: "abc".to_string()
            })
        );
        assert_eq!(parse_magnitude("g", G_SUFFIX), Err(MagnitudeError::Empty));
        assert_eq!(
            parse_magnitude("1.5g", G_SUFFIX),
            Err(MagnitudeError::NotAnInteger {
                digits: "1.5".to_string()
            })
        );
    }

    #[test]
    fn micro_suffix_is_not_satisfied_by_plain_g() {
        // "12g" ends in "g" but not in "µg"
        assert!(matches!(
            parse_magnitude("12g", MICRO_G_SUFFIX),
            Err(MagnitudeError::MissingSuffix { .. })
        ));
    }
}
