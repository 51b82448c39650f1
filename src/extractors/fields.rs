//! Text normalization for the regions of one listing item.
//!
//! Every function here works on plain text already pulled out of the markup, so the
//! rules can be exercised without building HTML.

use std::fmt;

pub const DIRECTOR_LABEL: &str = "导演:";

/// Why a field fell back to its default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWarning {
    MalformedYear { token: String },
    MissingDirectorLabel,
    EmptyDirector,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWarning::MalformedYear { token } => {
                write!(f, "non-numeric year {:?}, using 0", token)
            }
            FieldWarning::MissingDirectorLabel => {
                write!(f, "credits have no '{}' line, using empty director", DIRECTOR_LABEL)
            }
            FieldWarning::EmptyDirector => {
                write!(f, "nothing follows '{}', using empty director", DIRECTOR_LABEL)
            }
        }
    }
}

/// Result of a best-effort parse: the value read from the text, or a default plus the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Value(T),
    Defaulted { value: T, warning: FieldWarning },
}

impl<T> Parsed<T> {
    pub fn value(&self) -> &T {
        match self {
            Parsed::Value(value) | Parsed::Defaulted { value, .. } => value,
        }
    }

    pub fn into_parts(self) -> (T, Option<FieldWarning>) {
        match self {
            Parsed::Value(value) => (value, None),
            Parsed::Defaulted { value, warning } => (value, Some(warning)),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Parsed::Defaulted { .. })
    }
}

pub fn extract_title(text: &str) -> String {
    text.trim().to_string()
}

/// First name after the director label. Actors listed on the same line are dropped.
pub fn extract_director(credits_text: &str) -> Parsed<String> {
    let labelled = credits_text
        .lines()
        .find_map(|line| line.split_once(DIRECTOR_LABEL).map(|(_, rest)| rest));

    match labelled.map(|rest| rest.split_whitespace().next()) {
        Some(Some(director)) => Parsed::Value(director.to_string()),
        Some(None) => Parsed::Defaulted {
            value: String::new(),
            warning: FieldWarning::EmptyDirector,
        },
        None => Parsed::Defaulted {
            value: String::new(),
            warning: FieldWarning::MissingDirectorLabel,
        },
    }
}

/// Reads the year from the last non-empty line of the credits (`year / region / genre`).
///
/// The year segment is the first `/` segment holding an ASCII digit, or the first segment
/// when none does. Anything but a plain run of digits defaults to 0.
pub fn extract_year(credits_text: &str) -> Parsed<u32> {
    let year_line = credits_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .unwrap_or_default();

    let segments: Vec<&str> = year_line.split('/').map(str::trim).collect();
    let token = segments
        .iter()
        .find(|segment| segment.chars().any(|c| c.is_ascii_digit()))
        .or_else(|| segments.first())
        .copied()
        .unwrap_or_default();

    let parsed = if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse::<u32>().ok()
    } else {
        None
    };

    match parsed {
        Some(year) => Parsed::Value(year),
        None => Parsed::Defaulted {
            value: 0,
            warning: FieldWarning::MalformedYear {
                token: token.to_string(),
            },
        },
    }
}

pub fn extract_rating(text: &str) -> Result<f64, std::num::ParseFloatError> {
    text.trim().parse::<f64>()
}

pub fn extract_quote(text: Option<&str>) -> String {
    text.map(|t| t.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAWSHANK_CREDITS: &str = "
                            导演: 弗兰克·德拉邦特 Frank Darabont\u{a0}\u{a0}\u{a0}主演: 蒂姆·罗宾斯 Tim Robbins /...
                            1994\u{a0}/\u{a0}美国\u{a0}/\u{a0}犯罪 剧情
                        ";

    #[test]
    fn title_is_trimmed() {
        assert_eq!(extract_title("\n  肖申克的救赎 \n"), "肖申克的救赎");
    }

    #[test]
    fn director_keeps_first_token_after_label() {
        let credits = "导演: 张艺谋 主演: 巩俐\n中国大陆 / 1994 / 剧情";
        assert_eq!(extract_director(credits), Parsed::Value("张艺谋".to_string()));
    }

    #[test]
    fn director_found_on_second_line_of_real_markup() {
        assert_eq!(
            extract_director(SHAWSHANK_CREDITS).value(),
            "弗兰克·德拉邦特"
        );
    }

    #[test]
    fn missing_director_label_defaults_to_empty() {
        let parsed = extract_director("张艺谋 主演: 巩俐\n中国大陆 / 1994 / 剧情");
        assert_eq!(
            parsed,
            Parsed::Defaulted {
                value: String::new(),
                warning: FieldWarning::MissingDirectorLabel,
            }
        );
    }

    #[test]
    fn label_without_name_defaults_with_warning() {
        let parsed = extract_director("导演:   \n中国大陆 / 1994 / 剧情");
        assert_eq!(
            parsed,
            Parsed::Defaulted {
                value: String::new(),
                warning: FieldWarning::EmptyDirector,
            }
        );
    }

    #[test]
    fn year_from_region_first_line() {
        let credits = "导演: 张艺谋 主演: 巩俐\n中国大陆 / 1994 / 剧情";
        assert_eq!(extract_year(credits), Parsed::Value(1994));
    }

    #[test]
    fn year_from_real_markup_with_nbsp_separators() {
        assert_eq!(extract_year(SHAWSHANK_CREDITS), Parsed::Value(1994));
    }

    #[test]
    fn unknown_year_defaults_to_zero() {
        let credits = "导演: 某人\n中国大陆 / 未知 / 剧情";
        let (year, warning) = extract_year(credits).into_parts();
        assert_eq!(year, 0);
        assert!(matches!(warning, Some(FieldWarning::MalformedYear { .. })));
    }

    // Rejected rule: third-from-last segment of the whole text, last 4 chars. It reads
    // "中国大陆" for the line above and cannot see the year when the region comes first.
    // Rejected rule: leading digits of the first segment. It would turn "1961(中国大陆)"
    // into 1961, silently accepting a token that is not a plain year.
    #[test]
    fn annotated_year_segment_is_malformed() {
        let credits = "导演: 谢晋\n1961(中国大陆) / 中国大陆 / 剧情";
        assert_eq!(
            extract_year(credits),
            Parsed::Defaulted {
                value: 0,
                warning: FieldWarning::MalformedYear {
                    token: "1961(中国大陆)".to_string(),
                },
            }
        );
    }

    #[test]
    fn empty_credits_never_panic() {
        assert_eq!(extract_year("").value(), &0);
        assert_eq!(extract_director("").value(), "");
    }

    #[test]
    fn oversized_digit_run_defaults_to_zero() {
        assert!(extract_year("99999999999 / 美国").is_defaulted());
    }

    #[test]
    fn well_formed_years_stay_in_plausible_range() {
        for year in [1888u32, 1931, 1994, 2024] {
            let credits = format!("导演: 某人\n{} / 美国 / 剧情", year);
            let parsed = *extract_year(&credits).value();
            assert!((1888..=2100).contains(&parsed));
            assert_eq!(parsed, year);
        }
    }

    #[test]
    fn rating_is_trimmed_and_parsed() {
        assert_eq!(extract_rating(" 9.7 ").unwrap(), 9.7);
        assert!(extract_rating("n/a").is_err());
    }

    #[test]
    fn quote_absent_or_present() {
        assert_eq!(extract_quote(None), "");
        assert_eq!(extract_quote(Some("  希望让人自由。 ")), "希望让人自由。");
    }
}
