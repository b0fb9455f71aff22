//! The built-in rule registry.
//!
//! A rule spec is a colon-delimited string: the first token names the rule,
//! the remaining tokens are positional arguments. Parsing resolves the name
//! against the closed set of variants below, so an unknown name or a
//! malformed argument surfaces as a [`RuleError`] at the parse boundary and
//! evaluation itself is infallible.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::RuleError;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    // Dotted domain with a final label of at least two letters, so
    // `test@a` and `test@a.b` are both rejected.
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@([A-Za-z0-9-]+\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]*\.)?[0-9]+$").expect("numeric pattern compiles"));

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(0|[1-9][0-9]*)$").expect("integer pattern compiles"));

/// A parsed, runnable validation rule.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must look like an email address.
    IsEmail,
    /// Value must parse as an http/https/ftp URL; the scheme may be omitted.
    IsUrl,
    /// Character count must be at least `min` and, when given, at most `max`.
    IsLength { min: u64, max: Option<u64> },
    /// Value must equal the literal exactly.
    Equals(String),
    /// Value must contain a match of the pattern.
    Matches(Regex),
    /// Value must be a decimal number, optionally signed or fractional.
    IsNumeric,
    /// Value must be an integer without leading zeroes.
    IsInt,
    /// Value must be non-empty ASCII letters and digits only.
    IsAlphanumeric,
    /// Value must not change when lowercased.
    IsLowercase,
    /// Value must not change when uppercased.
    IsUppercase,
}

impl Rule {
    /// Parses one colon-delimited rule spec.
    ///
    /// `equals` rejoins every remaining token with `:` so compared literals
    /// may contain colons; `matches` consumes a pattern token and an
    /// optional flags token; every other rule parses its argument tokens as
    /// JSON, which is how numeric parameters like `isLength:3:15` arrive.
    pub fn parse(spec: &str) -> Result<Rule, RuleError> {
        let mut tokens = spec.split(':');
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match name {
            "required" => parse_plain(Rule::Required, "required", &args),
            "isEmail" => parse_plain(Rule::IsEmail, "isEmail", &args),
            "isURL" => parse_plain(Rule::IsUrl, "isURL", &args),
            "isNumeric" => parse_plain(Rule::IsNumeric, "isNumeric", &args),
            "isInt" => parse_plain(Rule::IsInt, "isInt", &args),
            "isAlphanumeric" => parse_plain(Rule::IsAlphanumeric, "isAlphanumeric", &args),
            "isLowercase" => parse_plain(Rule::IsLowercase, "isLowercase", &args),
            "isUppercase" => parse_plain(Rule::IsUppercase, "isUppercase", &args),
            "isLength" => parse_is_length(&args),
            "equals" => Ok(Rule::Equals(args.join(":"))),
            "matches" => parse_matches(&args),
            unknown => Err(RuleError::UnknownRule(unknown.to_string())),
        }
    }

    /// The registry name this rule reports into `errors` when it fails.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::IsEmail => "isEmail",
            Rule::IsUrl => "isURL",
            Rule::IsLength { .. } => "isLength",
            Rule::Equals(_) => "equals",
            Rule::Matches(_) => "matches",
            Rule::IsNumeric => "isNumeric",
            Rule::IsInt => "isInt",
            Rule::IsAlphanumeric => "isAlphanumeric",
            Rule::IsLowercase => "isLowercase",
            Rule::IsUppercase => "isUppercase",
        }
    }

    /// Runs the rule's predicate against a raw value.
    pub fn evaluate(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::IsEmail => EMAIL.is_match(value),
            Rule::IsUrl => is_url(value),
            Rule::IsLength { min, max } => {
                let length = value.chars().count() as u64;
                length >= *min && max.map_or(true, |max| length <= max)
            }
            Rule::Equals(literal) => value == literal,
            Rule::Matches(pattern) => pattern.is_match(value),
            Rule::IsNumeric => NUMERIC.is_match(value),
            Rule::IsInt => INTEGER.is_match(value),
            Rule::IsAlphanumeric => {
                !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
            }
            Rule::IsLowercase => value == value.to_lowercase(),
            Rule::IsUppercase => value == value.to_uppercase(),
        }
    }
}

/// Zero-argument rules still JSON-parse any stray argument tokens, so a
/// malformed token fails the same way regardless of which rule carries it.
fn parse_plain(rule: Rule, name: &'static str, args: &[&str]) -> Result<Rule, RuleError> {
    for arg in args {
        parse_json_argument(name, arg)?;
    }
    Ok(rule)
}

fn parse_is_length(args: &[&str]) -> Result<Rule, RuleError> {
    let mut bounds = [None, None];

    for (slot, arg) in args.iter().enumerate() {
        let parsed = parse_json_argument("isLength", arg)?;
        if slot >= bounds.len() {
            continue;
        }
        bounds[slot] = Some(parsed.as_u64().ok_or_else(|| RuleError::NonNumericArgument {
            rule: "isLength",
            argument: (*arg).to_string(),
        })?);
    }

    Ok(Rule::IsLength {
        min: bounds[0].unwrap_or(0),
        max: bounds[1],
    })
}

fn parse_matches(args: &[&str]) -> Result<Rule, RuleError> {
    let pattern = args.first().ok_or(RuleError::MissingPattern)?;
    let flags = args.get(1).copied().unwrap_or_default();

    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            // A boolean match has no use for "global" and patterns are
            // already Unicode-aware.
            'g' | 'u' => &mut builder,
            other => return Err(RuleError::UnsupportedFlag(other)),
        };
    }

    Ok(Rule::Matches(builder.build()?))
}

fn parse_json_argument(rule: &'static str, argument: &str) -> Result<Value, RuleError> {
    serde_json::from_str(argument).map_err(|source| RuleError::MalformedArgument {
        rule,
        argument: argument.to_string(),
        source,
    })
}

fn is_url(value: &str) -> bool {
    if value.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }

    // Protocol-less values like `www.website.com` count as URLs.
    let candidate = if value.contains("://") {
        value.to_string()
    } else {
        format!("http://{value}")
    };

    match url::Url::parse(&candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https" | "ftp")
                && parsed
                    .host_str()
                    .map_or(false, |host| host.contains('.') || host == "localhost")
        }
        Err(_) => false,
    }
}
