//! Response assertions.
//!
//! What a test expects of a response. Evaluation lives in the
//! infrastructure `TestRunner`.

use std::fmt;

use serde_json::Value;

/// Acceptable status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusExpectation {
    /// One exact code.
    Exact(u16),
    /// Inclusive range.
    Range {
        /// Lowest accepted code.
        min: u16,
        /// Highest accepted code.
        max: u16,
    },
    /// Any of the listed codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Any 2xx.
    #[must_use]
    pub const fn success() -> Self {
        Self::Range { min: 200, max: 299 }
    }

    /// Whether `status` is accepted.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(code) => status == *code,
            Self::Range { min, max } => (*min..=*max).contains(&status),
            Self::OneOf(codes) => codes.contains(&status),
        }
    }
}

impl fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(code) => write!(f, "= {code}"),
            Self::Range { min, max } => write!(f, "in {min}-{max}"),
            Self::OneOf(codes) => {
                let codes: Vec<String> = codes.iter().map(ToString::to_string).collect();
                write!(f, "in [{}]", codes.join(", "))
            }
        }
    }
}

/// A single check against a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    /// Status code is accepted by the expectation.
    Status(StatusExpectation),
    /// Body contains the text, case-sensitively.
    BodyContains(String),
    /// Body does not contain the text.
    BodyNotContains(String),
    /// Body has at least one byte.
    BodyNotEmpty,
    /// Body is JSON with a value at a dotted path (`$.json.name`,
    /// `data.0.id`), optionally equal to `expected`.
    JsonPath {
        /// Dotted path; array elements are addressed by index.
        path: String,
        /// Required value, or `None` to check presence only.
        expected: Option<Value>,
    },
}

impl Assertion {
    /// Status equals `code`.
    #[must_use]
    pub const fn status(code: u16) -> Self {
        Self::Status(StatusExpectation::Exact(code))
    }

    /// Body contains `text`.
    #[must_use]
    pub fn contains(text: impl Into<String>) -> Self {
        Self::BodyContains(text.into())
    }

    /// Body does not contain `text`.
    #[must_use]
    pub fn not_contains(text: impl Into<String>) -> Self {
        Self::BodyNotContains(text.into())
    }

    /// JSON value at `path` equals `expected`.
    #[must_use]
    pub fn json_eq(path: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::JsonPath {
            path: path.into(),
            expected: Some(expected.into()),
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(expected) => write!(f, "status {expected}"),
            Self::BodyContains(text) => write!(f, "body contains '{text}'"),
            Self::BodyNotContains(text) => write!(f, "body lacks '{text}'"),
            Self::BodyNotEmpty => f.write_str("body not empty"),
            Self::JsonPath {
                path,
                expected: Some(value),
            } => write!(f, "json {path} = {value}"),
            Self::JsonPath {
                path,
                expected: None,
            } => write!(f, "json {path} exists"),
        }
    }
}

/// Outcome of one assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    /// The assertion that ran.
    pub assertion: Assertion,
    /// Why it failed; `None` when it passed.
    pub error: Option<String>,
}

impl AssertionResult {
    /// A pass.
    #[must_use]
    pub const fn pass(assertion: Assertion) -> Self {
        Self {
            assertion,
            error: None,
        }
    }

    /// A failure with its reason.
    #[must_use]
    pub fn fail(assertion: Assertion, error: impl Into<String>) -> Self {
        Self {
            assertion,
            error: Some(error.into()),
        }
    }

    /// Whether the assertion held.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Named list of assertions run together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    /// Name shown in failure reports.
    pub name: String,
    /// Assertions in run order.
    pub assertions: Vec<Assertion>,
    /// Skip the remaining assertions after the first failure.
    pub stop_on_failure: bool,
}

impl TestSuite {
    /// Empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assertions: Vec::new(),
            stop_on_failure: false,
        }
    }

    /// Appends an assertion.
    #[must_use]
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Stops at the first failed assertion.
    #[must_use]
    pub const fn stop_on_failure(mut self) -> Self {
        self.stop_on_failure = true;
        self
    }
}

/// Results of a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResults {
    /// Suite that produced them.
    pub suite_name: String,
    /// One entry per assertion that ran.
    pub results: Vec<AssertionResult>,
}

impl TestResults {
    /// Collects results under a suite name.
    #[must_use]
    pub fn new(suite_name: impl Into<String>, results: Vec<AssertionResult>) -> Self {
        Self {
            suite_name: suite_name.into(),
            results,
        }
    }

    /// Assertions that ran.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Assertions that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Whether nothing failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(AssertionResult::passed)
    }

    /// The failed results, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}
