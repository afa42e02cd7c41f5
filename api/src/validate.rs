//! Declarative parameter validation.
//!
//! Each endpoint owns a static slice of [`Rule`]s. [`validate`] walks the
//! slice in declaration order and stops at the first violation. Rules only
//! look at the keys they name; anything else in the bag passes through.
use crate::params::{ParamValue, Params};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The key must be present.
    Required(&'static str),
    /// At least one of the keys must be present.
    AtLeastOneOf(&'static [&'static str]),
    /// When `field` is present, at least one of `any_of` must be too.
    Requires { field: &'static str, any_of: &'static [&'static str] },
    /// Whole number within `min..=max`. Whole floats are accepted.
    Integer { field: &'static str, min: i64, max: i64 },
    /// Four digit year.
    Season(&'static str),
    /// String of at least `min_chars` characters.
    Text { field: &'static str, min_chars: usize },
    /// String of exactly `len` characters, optionally letters only.
    Code { field: &'static str, len: usize, alphabetic: bool },
    /// Calendar date `YYYY-MM-DD`, checked by parsing it.
    Date(&'static str),
    /// `YYYY-MM-DD` shaped string, checked by pattern only.
    DatePattern(&'static str),
    /// One of a fixed set of strings.
    Choice { field: &'static str, allowed: &'static [&'static str] },
    /// Dash separated integer ids, between `min` and `max` of them. When
    /// `wildcard` is set that literal is accepted as well.
    IdList { field: &'static str, min: usize, max: usize, wildcard: Option<&'static str> },
    /// Dash separated tokens drawn from `allowed`.
    Tokens { field: &'static str, allowed: &'static [&'static str] },
}

impl Rule {
    /// The key this rule reads as free text, if any.
    pub fn text_field(&self) -> Option<&'static str> {
        match *self {
            Rule::Text { field, .. } | Rule::Code { field, .. } => Some(field),
            _ => None,
        }
    }
}

const fn id(field: &'static str) -> Rule {
    Rule::Integer { field, min: 1, max: i64::MAX }
}

const fn text(field: &'static str) -> Rule {
    Rule::Text { field, min_chars: 1 }
}

const fn search(min_chars: usize) -> Rule {
    Rule::Text { field: "search", min_chars }
}

const fn last_next(field: &'static str) -> Rule {
    Rule::Integer { field, min: 0, max: 99 }
}

const fn requires_season(field: &'static str) -> Rule {
    Rule::Requires { field, any_of: &["season"] }
}

const BOOLEAN: &[&str] = &["true", "false"];
const FIXTURE_STATUS: &[&str] = &["NS", "PST", "FT"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing { field: &'static str },
    AtLeastOneOf { fields: &'static [&'static str] },
    Requires { field: &'static str, any_of: &'static [&'static str] },
    NotInteger { field: &'static str },
    NotString { field: &'static str },
    OutOfRange { field: &'static str, min: i64, max: i64 },
    Season { field: &'static str },
    TooShort { field: &'static str, min_chars: usize },
    WrongLength { field: &'static str, len: usize },
    NotAlphabetic { field: &'static str },
    InvalidDate { field: &'static str },
    NotAllowed { field: &'static str, allowed: &'static [&'static str] },
    InvalidList { field: &'static str, reason: String },
}

impl ValidationError {
    /// The parameter the violated rule is about. Group rules report their
    /// first key.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::AtLeastOneOf { fields } => fields.first().copied().unwrap_or_default(),
            ValidationError::Missing { field }
            | ValidationError::Requires { field, .. }
            | ValidationError::NotInteger { field }
            | ValidationError::NotString { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Season { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::WrongLength { field, .. }
            | ValidationError::NotAlphabetic { field }
            | ValidationError::InvalidDate { field }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::InvalidList { field, .. } => field,
        }
    }
}

fn quoted_list(fields: &[&str], last_sep: &str) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{f}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}{last_sep}{last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing { field } => write!(f, "'{field}' is required"),
            ValidationError::AtLeastOneOf { fields } => {
                write!(f, "at least one of {} must be provided", quoted_list(fields, " or "))
            }
            ValidationError::Requires { field, any_of } => write!(
                f,
                "{} is required when '{field}' is provided",
                quoted_list(any_of, " or ")
            ),
            ValidationError::NotInteger { field } => write!(f, "'{field}' must be an integer"),
            ValidationError::NotString { field } => write!(f, "'{field}' must be a string"),
            ValidationError::OutOfRange { field, min, max } if *max == i64::MAX => {
                write!(f, "'{field}' must be at least {min}")
            }
            ValidationError::OutOfRange { field, min, max } => {
                write!(f, "'{field}' must be between {min} and {max}")
            }
            ValidationError::Season { field } => write!(f, "'{field}' must be 4 digits"),
            ValidationError::TooShort { field, min_chars: 1 } => {
                write!(f, "'{field}' must not be empty")
            }
            ValidationError::TooShort { field, min_chars } => {
                write!(f, "'{field}' must be at least {min_chars} characters long")
            }
            ValidationError::WrongLength { field, len } => {
                write!(f, "'{field}' must be {len} characters long")
            }
            ValidationError::NotAlphabetic { field } => {
                write!(f, "'{field}' must contain only letters")
            }
            ValidationError::InvalidDate { field } => {
                write!(f, "'{field}' must be in the format 'YYYY-MM-DD'")
            }
            ValidationError::NotAllowed { field, allowed } => {
                write!(f, "'{field}' must be one of {}", quoted_list(allowed, " or "))
            }
            ValidationError::InvalidList { field, reason } => write!(f, "invalid '{field}': {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check `params` against `rules`, returning the first violation.
pub fn validate(rules: &[Rule], params: &Params) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| check(rule, params))
}

fn check(rule: &Rule, params: &Params) -> Result<(), ValidationError> {
    match *rule {
        Rule::Required(field) => {
            if params.contains(field) {
                Ok(())
            } else {
                Err(ValidationError::Missing { field })
            }
        }
        Rule::AtLeastOneOf(fields) => {
            if fields.iter().any(|f| params.contains(f)) {
                Ok(())
            } else {
                Err(ValidationError::AtLeastOneOf { fields })
            }
        }
        Rule::Requires { field, any_of } => {
            if !params.contains(field) || any_of.iter().any(|f| params.contains(f)) {
                Ok(())
            } else {
                Err(ValidationError::Requires { field, any_of })
            }
        }
        Rule::Integer { field, min, max } => {
            let Some(value) = params.get(field) else { return Ok(()) };
            let n = integer(field, value)?;
            if (min..=max).contains(&n) {
                Ok(())
            } else {
                Err(ValidationError::OutOfRange { field, min, max })
            }
        }
        Rule::Season(field) => {
            let Some(value) = params.get(field) else { return Ok(()) };
            let n = integer(field, value)?;
            if (1000..=9999).contains(&n) {
                Ok(())
            } else {
                Err(ValidationError::Season { field })
            }
        }
        Rule::Text { field, min_chars } => {
            let Some(value) = params.get(field) else { return Ok(()) };
            if string(field, value)?.chars().count() >= min_chars {
                Ok(())
            } else {
                Err(ValidationError::TooShort { field, min_chars })
            }
        }
        Rule::Code { field, len, alphabetic } => {
            let Some(value) = params.get(field) else { return Ok(()) };
            let s = string(field, value)?;
            if s.chars().count() != len {
                return Err(ValidationError::WrongLength { field, len });
            }
            if alphabetic && !s.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ValidationError::NotAlphabetic { field });
            }
            Ok(())
        }
        Rule::Date(field) => {
            let Some(value) = params.get(field) else { return Ok(()) };
            let s = string(field, value)?;
            // chrono accepts "2023-1-5"; the shape check keeps the format strict.
            if DATE_PATTERN.is_match(s) && NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok() {
                Ok(())
            } else {
                Err(ValidationError::InvalidDate { field })
            }
        }
        Rule::DatePattern(field) => {
            let Some(value) = params.get(field) else { return Ok(()) };
            if DATE_PATTERN.is_match(string(field, value)?) {
                Ok(())
            } else {
                Err(ValidationError::InvalidDate { field })
            }
        }
        Rule::Choice { field, allowed } => {
            let Some(value) = params.get(field) else { return Ok(()) };
            if allowed.contains(&string(field, value)?) {
                Ok(())
            } else {
                Err(ValidationError::NotAllowed { field, allowed })
            }
        }
        Rule::IdList { field, min, max, wildcard } => {
            let Some(value) = params.get(field) else { return Ok(()) };
            id_list(field, value, min, max, wildcard)
        }
        Rule::Tokens { field, allowed } => {
            let Some(value) = params.get(field) else { return Ok(()) };
            if string(field, value)?.split('-').all(|t| allowed.contains(&t)) {
                Ok(())
            } else {
                Err(ValidationError::NotAllowed { field, allowed })
            }
        }
    }
}

/// Whole-number view of a value. Floats qualify when they have no fraction.
fn integer(field: &'static str, value: &ParamValue) -> Result<i64, ValidationError> {
    match *value {
        ParamValue::Int(n) => Ok(n),
        ParamValue::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            Ok(f as i64)
        }
        _ => Err(ValidationError::NotInteger { field }),
    }
}

fn string<'a>(field: &'static str, value: &'a ParamValue) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or(ValidationError::NotString { field })
}

/// Plain decimal digits naming an id of 1 or more.
fn is_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.parse::<u64>().is_ok_and(|n| n >= 1)
}

fn id_list(
    field: &'static str,
    value: &ParamValue,
    min: usize,
    max: usize,
    wildcard: Option<&'static str>,
) -> Result<(), ValidationError> {
    // A lone id may arrive as a number.
    if min <= 1 {
        if let Ok(n) = integer(field, value) {
            return if n >= 1 {
                Ok(())
            } else {
                Err(ValidationError::InvalidList { field, reason: format!("'{n}' is not an id") })
            };
        }
    }
    let s = string(field, value)?;
    if wildcard == Some(s) {
        return Ok(());
    }

    let ids: Vec<&str> = s.split('-').collect();
    if ids.len() < min || ids.len() > max {
        let reason = if min == max {
            format!("expected exactly {min} ids separated by '-'")
        } else {
            format!("expected between {min} and {max} ids separated by '-'")
        };
        return Err(ValidationError::InvalidList { field, reason });
    }
    if let Some(bad) = ids.iter().find(|id| !is_id(id)) {
        return Err(ValidationError::InvalidList { field, reason: format!("'{bad}' is not an id") });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-endpoint rule tables
// ---------------------------------------------------------------------------

pub mod rules {
    use super::*;

    pub const LEAGUES: &[Rule] = &[
        id("id"),
        text("name"),
        text("country"),
        Rule::Season("season"),
        id("team"),
        Rule::Choice { field: "type", allowed: &["league", "cup", "League", "Cup"] },
        Rule::Choice { field: "current", allowed: BOOLEAN },
        search(3),
        last_next("last"),
        Rule::Code { field: "code", len: 2, alphabetic: true },
    ];

    pub const TEAMS: &[Rule] = &[
        Rule::AtLeastOneOf(&["id", "name", "league", "season", "country", "code", "venue", "search"]),
        id("id"),
        text("name"),
        id("league"),
        Rule::Season("season"),
        text("country"),
        Rule::Code { field: "code", len: 3, alphabetic: false },
        id("venue"),
        search(3),
    ];

    pub const TEAMS_STATISTICS: &[Rule] = &[
        Rule::Required("league"),
        id("league"),
        Rule::Required("season"),
        Rule::Season("season"),
        Rule::Required("team"),
        id("team"),
        Rule::DatePattern("date"),
    ];

    pub const VENUES: &[Rule] = &[
        Rule::AtLeastOneOf(&["id", "name", "city", "country", "search"]),
        id("id"),
        text("name"),
        text("city"),
        text("country"),
        search(3),
    ];

    pub const STANDINGS: &[Rule] = &[
        Rule::Required("season"),
        Rule::Required("league"),
        Rule::Season("season"),
        id("league"),
        id("team"),
    ];

    pub const FIXTURES: &[Rule] = &[
        id("id"),
        Rule::IdList { field: "ids", min: 1, max: 20, wildcard: None },
        Rule::IdList { field: "live", min: 1, max: usize::MAX, wildcard: Some("all") },
        Rule::Date("date"),
        id("league"),
        Rule::Season("season"),
        id("team"),
        last_next("last"),
        last_next("next"),
        Rule::Date("from"),
        Rule::Date("to"),
        text("round"),
        Rule::Tokens { field: "status", allowed: FIXTURE_STATUS },
        id("venue"),
        text("timezone"),
    ];

    pub const FIXTURES_ROUNDS: &[Rule] = &[
        Rule::Required("league"),
        id("league"),
        Rule::Required("season"),
        Rule::Season("season"),
        Rule::Choice { field: "current", allowed: BOOLEAN },
    ];

    pub const FIXTURES_HEAD_TO_HEAD: &[Rule] = &[
        Rule::Required("h2h"),
        Rule::IdList { field: "h2h", min: 2, max: 2, wildcard: None },
        Rule::Date("date"),
        id("league"),
        Rule::Season("season"),
        last_next("last"),
        last_next("next"),
        Rule::Date("from"),
        Rule::Date("to"),
        id("venue"),
        Rule::Tokens { field: "status", allowed: FIXTURE_STATUS },
    ];

    pub const FIXTURES_BY_DATE: &[Rule] = &[
        id("league"),
        Rule::Season("season"),
        Rule::Date("from"),
        Rule::Date("to"),
    ];

    pub const FIXTURE_STATISTICS_PLAYERS: &[Rule] = &[
        Rule::Required("fixture"),
        id("fixture"),
        id("team"),
        text("type"),
    ];

    pub const FIXTURE_EVENTS_LINEUPS: &[Rule] = &[
        Rule::Required("fixture"),
        id("fixture"),
        id("team"),
        id("player"),
        text("type"),
    ];

    pub const INJURIES: &[Rule] = &[
        id("league"),
        requires_season("league"),
        Rule::Season("season"),
        id("fixture"),
        id("team"),
        requires_season("team"),
        id("player"),
        requires_season("player"),
        Rule::DatePattern("date"),
    ];

    pub const PLAYERS: &[Rule] = &[
        id("id"),
        id("team"),
        id("league"),
        Rule::Season("season"),
        Rule::Requires { field: "season", any_of: &["id", "league", "team"] },
        search(4),
        Rule::Requires { field: "search", any_of: &["league", "team"] },
        id("page"),
    ];

    pub const PLAYERS_SEASONS: &[Rule] = &[Rule::Required("player"), id("player")];

    pub const PLAYERS_SQUADS: &[Rule] = &[
        Rule::AtLeastOneOf(&["team", "player"]),
        id("team"),
        id("player"),
    ];

    pub const PLAYERS_TOP: &[Rule] = &[
        Rule::Required("league"),
        id("league"),
        Rule::Required("season"),
        Rule::Season("season"),
    ];

    pub const COACHES: &[Rule] = &[
        Rule::AtLeastOneOf(&["team", "id", "search"]),
        id("team"),
        id("id"),
        search(3),
    ];

    pub const SIDELINED: &[Rule] = &[
        Rule::AtLeastOneOf(&["player", "coach"]),
        id("player"),
        id("coach"),
    ];

    pub const TRANSFERS: &[Rule] = &[
        Rule::AtLeastOneOf(&["player", "team"]),
        id("player"),
        id("team"),
    ];

    pub const TROPHIES: &[Rule] = &[
        Rule::AtLeastOneOf(&["player", "coach"]),
        id("player"),
        id("coach"),
    ];

    pub const SEARCH: &[Rule] = &[Rule::Required("search"), search(3)];
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[test]
    fn teams_rejects_an_empty_bag() {
        let err = validate(TEAMS, &Params::new()).unwrap_err();
        assert!(matches!(err, ValidationError::AtLeastOneOf { .. }));
        assert!(err.to_string().starts_with("at least one of 'id', 'name'"), "{err}");
    }

    #[test]
    fn teams_accepts_any_single_filter() {
        let bags = [
            Params::new().with("id", 33),
            Params::new().with("name", "Arsenal"),
            Params::new().with("league", 39),
            Params::new().with("season", 2023),
            Params::new().with("country", "England"),
            Params::new().with("code", "ARS"),
            Params::new().with("venue", 494),
            Params::new().with("search", "Manch"),
        ];
        for bag in bags {
            assert_eq!(validate(TEAMS, &bag), Ok(()), "{bag:?}");
        }
    }

    #[test]
    fn unknown_keys_pass_through() {
        let bag = Params::new().with("league", 39).with("not_a_filter", "x");
        assert_eq!(validate(TEAMS, &bag), Ok(()));
    }

    #[test]
    fn injuries_requires_season_with_league() {
        let err = validate(INJURIES, &Params::new().with("league", 39)).unwrap_err();
        assert_eq!(err, ValidationError::Requires { field: "league", any_of: &["season"] });
        assert_eq!(err.to_string(), "'season' is required when 'league' is provided");

        let ok = Params::new().with("league", 39).with("season", 2023);
        assert_eq!(validate(INJURIES, &ok), Ok(()));
    }

    #[test]
    fn injuries_requires_season_with_team_or_player() {
        for key in ["team", "player"] {
            let err = validate(INJURIES, &Params::new().with(key, 5)).unwrap_err();
            assert!(matches!(err, ValidationError::Requires { field, .. } if field == key));
        }
        assert_eq!(validate(INJURIES, &Params::new().with("fixture", 686314)), Ok(()));
    }

    #[test]
    fn whole_floats_count_as_integers() {
        let bag = Params::new().with("league", 39.0).with("season", 2023.0);
        assert_eq!(validate(PLAYERS_TOP, &bag), Ok(()));

        let err = validate(PLAYERS_TOP, &Params::new().with("league", 39.5).with("season", 2023))
            .unwrap_err();
        assert_eq!(err, ValidationError::NotInteger { field: "league" });
    }

    #[test]
    fn strings_are_not_integers() {
        let err = validate(SIDELINED, &Params::new().with("player", "276")).unwrap_err();
        assert_eq!(err, ValidationError::NotInteger { field: "player" });
    }

    #[test]
    fn season_must_have_four_digits() {
        for season in [999, 10000, -2023] {
            let err = validate(STANDINGS, &Params::new().with("league", 39).with("season", season))
                .unwrap_err();
            assert_eq!(err, ValidationError::Season { field: "season" });
        }
    }

    #[test]
    fn top_endpoints_need_league_and_season() {
        let err = validate(PLAYERS_TOP, &Params::new().with("season", 2023)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "league" });
        let err = validate(PLAYERS_TOP, &Params::new().with("league", 39)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "season" });
    }

    #[test]
    fn players_search_needs_league_or_team() {
        let err = validate(PLAYERS, &Params::new().with("search", "Ronaldo")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'league' or 'team' is required when 'search' is provided"
        );
        let short = Params::new().with("search", "Ron").with("team", 33);
        assert_eq!(
            validate(PLAYERS, &short),
            Err(ValidationError::TooShort { field: "search", min_chars: 4 })
        );
        let ok = Params::new().with("search", "Ronaldo").with("league", 39);
        assert_eq!(validate(PLAYERS, &ok), Ok(()));
    }

    #[test]
    fn players_search_length_counts_characters() {
        let bag = Params::new().with("search", "Özil").with("league", 78);
        assert_eq!(validate(PLAYERS, &bag), Ok(()));
    }

    #[test]
    fn fixtures_last_and_next_are_bounded() {
        assert_eq!(validate(FIXTURES, &Params::new().with("last", 99)), Ok(()));
        assert_eq!(
            validate(FIXTURES, &Params::new().with("next", 100)),
            Err(ValidationError::OutOfRange { field: "next", min: 0, max: 99 })
        );
    }

    #[test]
    fn fixtures_dates_are_parsed() {
        assert_eq!(validate(FIXTURES, &Params::new().with("date", "2024-02-29")), Ok(()));
        for bad in ["2023-02-30", "2023-1-05", "05/01/2023"] {
            assert_eq!(
                validate(FIXTURES, &Params::new().with("from", bad)),
                Err(ValidationError::InvalidDate { field: "from" }),
                "{bad}"
            );
        }
    }

    #[test]
    fn injuries_date_is_only_pattern_checked() {
        let bag = Params::new().with("date", "2023-02-30");
        assert_eq!(validate(INJURIES, &bag), Ok(()));
        let bag = Params::new().with("date", "yesterday");
        assert_eq!(validate(INJURIES, &bag), Err(ValidationError::InvalidDate { field: "date" }));
    }

    #[test]
    fn fixture_ids_are_capped_at_twenty() {
        let twenty = (1..=20).map(|i| i.to_string()).collect::<Vec<_>>().join("-");
        assert_eq!(validate(FIXTURES, &Params::new().with("ids", twenty)), Ok(()));

        let twenty_one = (1..=21).map(|i| i.to_string()).collect::<Vec<_>>().join("-");
        let err = validate(FIXTURES, &Params::new().with("ids", twenty_one)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidList { field: "ids", .. }));

        let err = validate(FIXTURES, &Params::new().with("ids", "1-x-3")).unwrap_err();
        assert_eq!(err.to_string(), "invalid 'ids': 'x' is not an id");
    }

    #[test]
    fn id_lists_reject_zero_and_signs() {
        for bad in ["0-0", "0-34", "33-+34", "33--34", " 33-34"] {
            let err = validate(FIXTURES_HEAD_TO_HEAD, &Params::new().with("h2h", bad)).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidList { field: "h2h", .. }), "{bad}");
        }

        let err = validate(FIXTURES, &Params::new().with("ids", "0-+5")).unwrap_err();
        assert_eq!(err.to_string(), "invalid 'ids': '0' is not an id");
        let err = validate(FIXTURES, &Params::new().with("ids", "5-+6")).unwrap_err();
        assert_eq!(err.to_string(), "invalid 'ids': '+6' is not an id");
        assert!(validate(FIXTURES, &Params::new().with("ids", 0)).is_err());
        assert_eq!(validate(FIXTURES, &Params::new().with("ids", 7)), Ok(()));
        assert_eq!(validate(FIXTURES, &Params::new().with("ids", "007-12")), Ok(()));
    }

    #[test]
    fn fixture_live_accepts_all_or_ids() {
        assert_eq!(validate(FIXTURES, &Params::new().with("live", "all")), Ok(()));
        assert_eq!(validate(FIXTURES, &Params::new().with("live", "39-61")), Ok(()));
        assert!(validate(FIXTURES, &Params::new().with("live", "some")).is_err());
    }

    #[test]
    fn fixture_status_tokens() {
        assert_eq!(validate(FIXTURES, &Params::new().with("status", "NS-PST-FT")), Ok(()));
        let err = validate(FIXTURES, &Params::new().with("status", "NS-XX")).unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { field: "status", .. }));
    }

    #[test]
    fn head_to_head_needs_exactly_two_ids() {
        assert_eq!(
            validate(FIXTURES_HEAD_TO_HEAD, &Params::new()),
            Err(ValidationError::Missing { field: "h2h" })
        );
        assert_eq!(validate(FIXTURES_HEAD_TO_HEAD, &Params::new().with("h2h", "33-34")), Ok(()));
        for bad in ["33", "33-34-35", "33-abc"] {
            let err = validate(FIXTURES_HEAD_TO_HEAD, &Params::new().with("h2h", bad)).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidList { field: "h2h", .. }), "{bad}");
        }
    }

    #[test]
    fn league_code_is_two_letters() {
        assert_eq!(validate(LEAGUES, &Params::new().with("code", "FR")), Ok(()));
        assert_eq!(
            validate(LEAGUES, &Params::new().with("code", "F1")),
            Err(ValidationError::NotAlphabetic { field: "code" })
        );
        assert_eq!(
            validate(LEAGUES, &Params::new().with("code", "FRA")),
            Err(ValidationError::WrongLength { field: "code", len: 2 })
        );
    }

    #[test]
    fn text_fields_are_reported() {
        assert_eq!(search(3).text_field(), Some("search"));
        assert_eq!(Rule::Code { field: "code", len: 3, alphabetic: false }.text_field(), Some("code"));
        assert_eq!(id("team").text_field(), None);
        assert_eq!(Rule::Season("season").text_field(), None);
    }

    #[test]
    fn league_code_is_checked_last() {
        let params = Params::new().with("season", 23).with("code", "F1");
        assert_eq!(validate(LEAGUES, &params), Err(ValidationError::Season { field: "season" }));

        let params = Params::new().with("last", 100).with("code", "F1");
        assert!(matches!(
            validate(LEAGUES, &params),
            Err(ValidationError::OutOfRange { field: "last", .. })
        ));
    }

    #[test]
    fn leagues_current_is_a_boolean_string() {
        assert_eq!(validate(LEAGUES, &Params::new().with("current", true)), Ok(()));
        assert!(validate(LEAGUES, &Params::new().with("current", "yes")).is_err());
    }

    #[test]
    fn first_violation_wins_in_declaration_order() {
        // Both 'id' and 'search' are invalid; 'id' is declared first.
        let bag = Params::new().with("id", 0).with("search", "ab");
        assert_eq!(
            validate(COACHES, &bag),
            Err(ValidationError::OutOfRange { field: "id", min: 1, max: i64::MAX })
        );
    }

    #[test]
    fn at_least_one_of_message_lists_every_key() {
        let err = validate(COACHES, &Params::new()).unwrap_err();
        assert_eq!(err.to_string(), "at least one of 'team', 'id' or 'search' must be provided");
        assert_eq!(err.field(), "team");
    }
}
