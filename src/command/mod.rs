//! Thumbor command set
//!
//! Accumulates transformation operations and filters and serializes them
//! into the proxy's path grammar:
//!
//! ```text
//! [meta/][trim[:source]/][x1xy1:x2xy2/][fit-in/][WxH/][halign/][valign/][smart/][filters:f(a):g(b)]
//! ```

pub mod filter;
pub mod params;
pub mod set;

pub use filter::{Filter, FilterArg};
pub use params::{CropBox, Dimensions, HAlign, ResizeMode, TrimSource, VAlign};
pub use set::CommandSet;
