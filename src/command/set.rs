//! Command accumulation and segment serialization
//!
//! Operations live in fixed slots so repeated calls overwrite each other
//! and the emitted order never depends on call order. Filters are the one
//! exception: they append, and their order is preserved.

use crate::constants::{
    FILTERS_PREFIX, FILTER_SEPARATOR, FIT_IN_TOKEN, META_TOKEN, PATH_SEPARATOR, SMART_TOKEN,
    TRIM_TOKEN,
};

use super::filter::{Filter, FilterArg};
use super::params::{CropBox, Dimensions, HAlign, ResizeMode, TrimSource, VAlign};

/// Trim slot: set with or without an explicit colour source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Trim(Option<TrimSource>);

/// Ordered set of Thumbor commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandSet {
    metadata_only: bool,
    trim: Option<Trim>,
    crop: Option<CropBox>,
    dimensions: Option<Dimensions>,
    halign: Option<HAlign>,
    valign: Option<VAlign>,
    smart_crop: bool,
    filters: Vec<Filter>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim surrounding space; `None` lets the proxy pick the colour source
    pub fn trim(&mut self, source: Option<TrimSource>) -> &mut Self {
        self.trim = Some(Trim(source));
        self
    }

    pub fn crop(
        &mut self,
        top_left_x: u32,
        top_left_y: u32,
        bottom_right_x: u32,
        bottom_right_y: u32,
    ) -> &mut Self {
        self.crop = Some(CropBox {
            top_left_x,
            top_left_y,
            bottom_right_x,
            bottom_right_y,
        });
        self
    }

    /// Scale to fit inside `width`x`height`; replaces any earlier `resize`
    pub fn fit_in(&mut self, width: i32, height: i32) -> &mut Self {
        self.dimensions = Some(Dimensions {
            mode: ResizeMode::FitIn,
            width,
            height,
        });
        self
    }

    /// Resize to `width`x`height`; replaces any earlier `fit_in`
    pub fn resize(&mut self, width: i32, height: i32) -> &mut Self {
        self.dimensions = Some(Dimensions {
            mode: ResizeMode::Resize,
            width,
            height,
        });
        self
    }

    pub fn halign(&mut self, halign: HAlign) -> &mut Self {
        self.halign = Some(halign);
        self
    }

    pub fn valign(&mut self, valign: VAlign) -> &mut Self {
        self.valign = Some(valign);
        self
    }

    pub fn smart_crop(&mut self, enabled: bool) -> &mut Self {
        self.smart_crop = enabled;
        self
    }

    pub fn add_filter<I, A>(&mut self, name: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<FilterArg>,
    {
        self.filters.push(Filter::new(name, args));
        self
    }

    pub fn metadata_only(&mut self, enabled: bool) -> &mut Self {
        self.metadata_only = enabled;
        self
    }

    /// Drop every filter added so far
    pub fn clear_filters(&mut self) -> &mut Self {
        self.filters.clear();
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.to_tokens().is_empty()
    }

    /// Path tokens in the order the proxy parses them
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        if self.metadata_only {
            tokens.push(META_TOKEN.to_string());
        }

        if let Some(Trim(source)) = self.trim {
            match source {
                Some(source) => tokens.push(format!("{}:{}", TRIM_TOKEN, source.as_str())),
                None => tokens.push(TRIM_TOKEN.to_string()),
            }
        }

        if let Some(crop) = self.crop {
            tokens.push(crop.to_string());
        }

        if let Some(dims) = self.dimensions {
            if dims.mode == ResizeMode::FitIn {
                tokens.push(FIT_IN_TOKEN.to_string());
            }
            tokens.push(dims.to_string());
        }

        if let Some(halign) = self.halign {
            tokens.push(halign.as_str().to_string());
        }

        if let Some(valign) = self.valign {
            tokens.push(valign.as_str().to_string());
        }

        if self.smart_crop {
            tokens.push(SMART_TOKEN.to_string());
        }

        if !self.filters.is_empty() {
            let filters: Vec<String> = self.filters.iter().map(ToString::to_string).collect();
            tokens.push(format!(
                "{}{}",
                FILTERS_PREFIX,
                filters.join(FILTER_SEPARATOR)
            ));
        }

        tokens
    }

    /// The command segment, tokens joined by `/`
    pub fn to_segment(&self) -> String {
        self.to_tokens().join(PATH_SEPARATOR)
    }
}
