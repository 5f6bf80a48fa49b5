//! Thumbor URL assembly
//!
//! Combines a server base, an optional secret, the original image locator
//! and serialized command tokens into the final proxy URL:
//!
//! ```text
//! {server}/unsafe/[{segment}/]{original}
//! {server}/{signature}/[{segment}/]{original}
//! ```

pub mod signing;

use crate::constants::{PATH_SEPARATOR, UNSAFE_MARKER};

/// A fully specified, immutable Thumbor URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    server: String,
    secret: Option<String>,
    original: String,
    commands: Vec<String>,
}

impl Url {
    /// Create a URL; an empty secret selects unsigned mode
    pub fn new(
        server: impl Into<String>,
        secret: Option<String>,
        original: impl Into<String>,
        commands: Vec<String>,
    ) -> Self {
        let server: String = server.into();
        Self {
            server: server.trim_end_matches(PATH_SEPARATOR).to_string(),
            secret: secret.filter(|s| !s.is_empty()),
            original: original.into(),
            commands,
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// Command tokens joined by `/`
    pub fn segment(&self) -> String {
        self.commands.join(PATH_SEPARATOR)
    }

    /// The signed part of the path: `segment/original`, or just `original`
    pub fn payload(&self) -> String {
        let segment = self.segment();
        if segment.is_empty() {
            self.original.clone()
        } else {
            format!("{}{}{}", segment, PATH_SEPARATOR, self.original)
        }
    }

    /// HMAC signature of the payload, or `None` in unsigned mode
    pub fn signature(&self) -> Option<String> {
        let secret = self.secret.as_ref()?;
        Some(signing::sign(secret.as_bytes(), &self.payload()))
    }

    /// The final URL string
    pub fn render(&self) -> String {
        let payload = self.payload();
        let marker = match &self.secret {
            Some(secret) => {
                tracing::trace!(payload = %payload, "Signing Thumbor URL");
                signing::sign(secret.as_bytes(), &payload)
            }
            None => UNSAFE_MARKER.to_string(),
        };

        format!(
            "{}{sep}{}{sep}{}",
            self.server,
            marker,
            payload,
            sep = PATH_SEPARATOR
        )
    }
}
