//! API version resolution from request headers

use crate::error::StarterError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Version served when a request does not ask for one.
///
/// Bump this when a new response schema revision ships.
pub const LATEST_API_VERSION: u64 = 2;

/// Media-type parameter carrying the version inside an `Accept` header
const VERSION_PARAMETER: &str = "api-version=";

/// A response schema revision requested by a client.
///
/// Always at least 1: every constructor clamps, so handlers never see 0 or
/// a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ApiVersion(u64);

impl ApiVersion {
    /// The version used as fallback
    pub const LATEST: ApiVersion = ApiVersion(LATEST_API_VERSION);

    /// Create a version, raising anything below 1 up to 1
    pub fn new(requested: i64) -> Self {
        Self(requested.max(1).unsigned_abs())
    }

    /// Numeric value of the version
    pub fn get(self) -> u64 {
        self.0
    }

    /// Parse version text, clamping the result. `None` if it isn't an integer.
    ///
    /// Integers outside `i64` still resolve: large negatives clamp to 1 and
    /// large positives saturate at `u64::MAX`.
    fn parse(text: &str) -> Option<Self> {
        let digits = strip_digit_separators(text.trim())?;
        match digits.parse::<i64>() {
            Ok(requested) => Some(Self::new(requested)),
            Err(e) => match e.kind() {
                IntErrorKind::NegOverflow => Some(Self(1)),
                IntErrorKind::PosOverflow => Some(Self(digits.parse().unwrap_or(u64::MAX))),
                _ => None,
            },
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remove `_` separators between digits, as in `1_000`.
///
/// `None` when an underscore isn't surrounded by digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    separated.then(|| Cow::Owned(text.replace('_', "")))
}

/// Resolve the version from an `Accept` header value.
///
/// Expects a parameter on the media range, e.g.
/// `application/json; api-version=1`. Only the first `api-version=` parameter
/// is considered; if its value isn't an integer the latest version is used.
pub fn resolve_version(accept: Option<&str>) -> ApiVersion {
    accept
        .into_iter()
        .flat_map(|value| value.split(';').skip(1))
        .map(str::trim)
        .find(|segment| segment.starts_with(VERSION_PARAMETER))
        .and_then(|segment| segment.split('=').nth(1))
        .and_then(ApiVersion::parse)
        .unwrap_or(ApiVersion::LATEST)
}

/// Resolve the version from a dedicated `api-version` header value.
///
/// Anything that isn't an integer is treated like a missing header.
pub fn resolve_dedicated(value: Option<&str>) -> ApiVersion {
    value
        .and_then(ApiVersion::parse)
        .unwrap_or(ApiVersion::LATEST)
}

/// Where a deployment reads the requested version from.
///
/// Only one strategy is active at a time; it is chosen at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionStrategy {
    /// `Accept: application/json; api-version=<int>`
    #[default]
    AcceptParameter,

    /// `api-version: <int>`
    DedicatedHeader,
}

impl VersionStrategy {
    /// Name of the request header this strategy reads
    pub fn header_name(self) -> &'static str {
        match self {
            Self::AcceptParameter => "accept",
            Self::DedicatedHeader => "api-version",
        }
    }

    /// Resolve a version from the raw value of [`Self::header_name`]
    pub fn resolve(self, header_value: Option<&str>) -> ApiVersion {
        match self {
            Self::AcceptParameter => resolve_version(header_value),
            Self::DedicatedHeader => resolve_dedicated(header_value),
        }
    }
}

impl fmt::Display for VersionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AcceptParameter => f.write_str("accept"),
            Self::DedicatedHeader => f.write_str("header"),
        }
    }
}

impl FromStr for VersionStrategy {
    type Err = StarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" | "accept-parameter" => Ok(Self::AcceptParameter),
            "header" | "dedicated" | "dedicated-header" => Ok(Self::DedicatedHeader),
            _ => Err(StarterError::UnknownStrategy(s.to_string())),
        }
    }
}
