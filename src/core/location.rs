//! Object-storage address parsing.
//!
//! S3 has accumulated several URL shapes over the years. Consumers of this
//! tool still hand us all of them, so each shape is kept as its own
//! [`AddressStyle`] and tried in a fixed order.
//!
//! | Style                 | Shape                                          | Region        |
//! |-----------------------|------------------------------------------------|---------------|
//! | `VirtualHost`         | `https://{bucket}.s3.amazonaws.com/{key}`          | empty         |
//! | `VirtualHostRegional` | `https://{bucket}.s3-{region}.amazonaws.com/{key}` | from host     |
//! | `Path`                | `https://s3.amazonaws.com/{bucket}/{key}`          | `us-east-1`   |
//! | `PathRegional`        | `https://s3-{region}.amazonaws.com/{bucket}/{key}` | from host     |
//!
//! See <http://docs.aws.amazon.com/AmazonS3/latest/dev/UsingBucket.html>.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::core::constants::CLASSIC_S3_REGION;
use crate::error::LocationError;

/// Canonical `(bucket, key, region)` triple.
///
/// Only produced by [`parse`]. An empty region means the ambient default
/// applies; an empty key addresses the bucket root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    bucket: String,
    key: String,
    region: String,
}

impl StorageLocation {
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Region, or `None` when the ambient default should be used.
    pub fn explicit_region(&self) -> Option<&str> {
        if self.region.is_empty() {
            None
        } else {
            Some(&self.region)
        }
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

impl FromStr for StorageLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Recognized S3 address shapes, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressStyle {
    /// `https://{bucket}.s3.amazonaws.com/{key}`
    VirtualHost,
    /// `https://{bucket}.s3-{region}.amazonaws.com/{key}`
    VirtualHostRegional,
    /// `https://s3.amazonaws.com/{bucket}/{key}`
    Path,
    /// `https://s3-{region}.amazonaws.com/{bucket}/{key}`
    PathRegional,
}

impl AddressStyle {
    /// Every style, in the order they are tried.
    pub const ALL: [AddressStyle; 4] = [
        AddressStyle::VirtualHost,
        AddressStyle::VirtualHostRegional,
        AddressStyle::Path,
        AddressStyle::PathRegional,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Self::VirtualHost => r"^https?://([^.]+)\.s3\.amazonaws\.com(?:/?$|/(.*))",
            Self::VirtualHostRegional => {
                r"^https?://([^.]+)\.s3-([^.]+)\.amazonaws\.com(?:/?$|/(.*))"
            }
            Self::Path => r"^https?://s3\.amazonaws\.com/([^/]+)(?:/?$|/(.*))",
            Self::PathRegional => r"^https?://s3-([^.]+)\.amazonaws\.com/([^/]+)(?:/?$|/(.*))",
        }
    }

    fn regex(self) -> &'static Regex {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        let compiled = COMPILED.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|style| Regex::new(style.pattern()).expect("static address pattern"))
                .collect()
        });
        &compiled[self as usize]
    }

    /// Match `url` against this style.
    pub fn extract(self, url: &str) -> Option<StorageLocation> {
        let caps = self.regex().captures(url)?;
        let (bucket, key, region) = match self {
            Self::VirtualHost => (group(&caps, 1), group(&caps, 2), ""),
            Self::VirtualHostRegional => (group(&caps, 1), group(&caps, 3), group(&caps, 2)),
            Self::Path => (group(&caps, 1), group(&caps, 2), CLASSIC_S3_REGION),
            Self::PathRegional => (group(&caps, 2), group(&caps, 3), group(&caps, 1)),
        };

        Some(StorageLocation {
            bucket: bucket.to_string(),
            key: key.to_string(),
            region: region.to_string(),
        })
    }
}

fn group<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Parse an S3 URL into its canonical location.
///
/// # Errors
///
/// Returns `LocationError::Unrecognized` if no style matches.
pub fn parse(url: &str) -> Result<StorageLocation, LocationError> {
    AddressStyle::ALL
        .iter()
        .find_map(|style| {
            let location = style.extract(url)?;
            trace!(style = ?style, %location, "matched address style");
            Some(location)
        })
        .ok_or_else(|| LocationError::Unrecognized(url.to_string()))
}
