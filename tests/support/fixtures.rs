//! Test fixtures and constants.

/// Regional virtual-host URL.
pub const REGIONAL_URL: &str = "https://secrets.s3-us-west-2.amazonaws.com/app/prod.env";

/// URL in a scheme no address style accepts.
pub const UNSUPPORTED_URL: &str = "s3://secrets/app/prod.env";

/// KMS key ARN that never resolves.
pub const TEST_KEY_ARN: &str = "arn:aws:kms:us-west-2:123456789012:key/00000000-0000-0000-0000-000000000000";

/// Sample env file with comments, blanks and a rejected key.
pub const SAMPLE_ENV: &str = "# app settings\n\nDATABASE_URL=postgres://db/app\n1BAD=skip\nGREETING=it's fine\n";
