//! Builder for incrementally constructing Thumbor URLs
//!
//! ```
//! use thumbor_url::Builder;
//!
//! let url = Builder::construct(
//!     "http://thumbor.example.com",
//!     "",
//!     "http://images.example.com/llamas.jpg",
//! )
//! .fit_in(320, 240)
//! .add_filter("brightness", [42])
//! .render();
//!
//! assert_eq!(
//!     url,
//!     "http://thumbor.example.com/unsafe/fit-in/320x240/filters:brightness(42)/http://images.example.com/llamas.jpg"
//! );
//! ```
//!
//! Every transformation method consumes the builder and returns it, so
//! branching from a shared prefix is done with `clone()`, which copies the
//! command set.

pub mod dynamic;
pub mod filetype;

use crate::command::{CommandSet, FilterArg, HAlign, TrimSource, VAlign};
use crate::url::Url;

/// Result of [`Builder::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutput {
    /// The original is routed through the proxy
    Proxied(Url),
    /// The original's filetype is not proxyable and is returned as is
    PassThrough(String),
}

impl BuildOutput {
    pub fn render(&self) -> String {
        match self {
            BuildOutput::Proxied(url) => url.render(),
            BuildOutput::PassThrough(original) => original.clone(),
        }
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            BuildOutput::Proxied(url) => Some(url),
            BuildOutput::PassThrough(_) => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, BuildOutput::PassThrough(_))
    }
}

/// Request facade: server, secret and original are fixed at construction,
/// the command set grows with each call
#[derive(Debug, Clone)]
pub struct Builder {
    server: String,
    secret: Option<String>,
    original: String,
    filetypes: Vec<String>,
    commands: CommandSet,
}

impl Builder {
    /// Start a builder; pass an empty `secret` for unsigned URLs
    pub fn construct(
        server: impl Into<String>,
        secret: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        let secret: String = secret.into();
        Self {
            server: server.into(),
            secret: if secret.is_empty() { None } else { Some(secret) },
            original: original.into(),
            filetypes: filetype::default_filetypes(),
            commands: CommandSet::new(),
        }
    }

    /// Replace the whitelist of extensions routed through the proxy
    pub fn with_filetypes<I, S>(mut self, filetypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filetypes = filetypes.into_iter().map(Into::into).collect();
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn filetypes(&self) -> &[String] {
        &self.filetypes
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    pub(crate) fn commands_mut(&mut self) -> &mut CommandSet {
        &mut self.commands
    }

    pub fn trim(mut self, source: Option<TrimSource>) -> Self {
        self.commands.trim(source);
        self
    }

    pub fn crop(
        mut self,
        top_left_x: u32,
        top_left_y: u32,
        bottom_right_x: u32,
        bottom_right_y: u32,
    ) -> Self {
        self.commands
            .crop(top_left_x, top_left_y, bottom_right_x, bottom_right_y);
        self
    }

    pub fn fit_in(mut self, width: i32, height: i32) -> Self {
        self.commands.fit_in(width, height);
        self
    }

    pub fn resize(mut self, width: i32, height: i32) -> Self {
        self.commands.resize(width, height);
        self
    }

    pub fn halign(mut self, halign: HAlign) -> Self {
        self.commands.halign(halign);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.commands.valign(valign);
        self
    }

    pub fn smart_crop(mut self, enabled: bool) -> Self {
        self.commands.smart_crop(enabled);
        self
    }

    pub fn add_filter<I, A>(mut self, name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<FilterArg>,
    {
        self.commands.add_filter(name, args);
        self
    }

    pub fn metadata_only(mut self, enabled: bool) -> Self {
        self.commands.metadata_only(enabled);
        self
    }

    /// Decide pass-through and assemble the URL
    ///
    /// Idempotent: the builder is not modified.
    pub fn build(&self) -> BuildOutput {
        if !filetype::is_proxyable(&self.original, &self.filetypes) {
            tracing::debug!(
                original = %self.original,
                "Filetype not proxyable, passing original through"
            );
            return BuildOutput::PassThrough(self.original.clone());
        }

        BuildOutput::Proxied(Url::new(
            self.server.clone(),
            self.secret.clone(),
            self.original.clone(),
            self.commands.to_tokens(),
        ))
    }

    /// The final URL string, or the original when it is passed through
    pub fn render(&self) -> String {
        self.build().render()
    }
}
