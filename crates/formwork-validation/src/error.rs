//! Fatal rule-spec configuration errors.

use thiserror::Error;

/// Raised when a rule spec string cannot be turned into a runnable rule.
///
/// These are programmer errors in the form configuration, not invalid user
/// input: a value failing a rule is reported through
/// [`Validation::errors`](crate::Validation), never through this type.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The leading token of a rule spec named no known rule.
    #[error("unknown validation rule `{0}`")]
    UnknownRule(String),

    /// A positional argument was not valid JSON.
    #[error("malformed argument `{argument}` for rule `{rule}`")]
    MalformedArgument {
        rule: &'static str,
        argument: String,
        #[source]
        source: serde_json::Error,
    },

    /// A rule expected a numeric argument and got something else.
    #[error("rule `{rule}` expects a numeric argument, got `{argument}`")]
    NonNumericArgument {
        rule: &'static str,
        argument: String,
    },

    /// A `matches` spec carried no pattern token.
    #[error("rule `matches` is missing its pattern")]
    MissingPattern,

    /// The `matches` pattern failed to compile.
    #[error("invalid pattern for rule `matches`")]
    InvalidPattern(#[from] regex::Error),

    /// The `matches` flags token carried an unsupported flag character.
    #[error("unsupported flag `{0}` for rule `matches`")]
    UnsupportedFlag(char),
}
