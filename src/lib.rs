//! secure-environment - envelope-encrypted environment files in S3.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── export        # Fetch, decrypt, print `export` lines
//! │   ├── import        # Encrypt a local file and upload it
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── location      # S3 URL styles -> (bucket, key, region)
//!     ├── cipher/       # Envelope encryption
//!     │   ├── mod       # EnvelopeCipher / KeyService traits
//!     │   ├── envelope  # ChaCha20-Poly1305 JSON envelope
//!     │   └── aws       # AWS KMS key service
//!     ├── store/        # Blob storage
//!     │   ├── mod       # BlobStore trait
//!     │   └── s3        # S3 implementation
//!     ├── env           # .env parsing and shell rendering
//!     ├── settings      # url / key / env-type validation
//!     └── flow          # import and export
//! ```
//!
//! # Example
//!
//! ```
//! use secure_environment::core::{env, location};
//!
//! let loc = location::parse("https://s3-eu-west-1.amazonaws.com/bucket/app.env").unwrap();
//! assert_eq!(loc.region(), "eu-west-1");
//!
//! let entry = env::parse("A=1\nB=it's\n").nth(1).unwrap();
//! assert_eq!(env::render(&entry).as_slice(), b"export B='it'\"'\"'s'");
//! ```

pub mod cli;
pub mod core;
pub mod error;
