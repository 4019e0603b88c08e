//! Portfolio content, the windowed carousel behind the career journey and
//! skills pager, and the view transforms that turn them into render
//! commands.
//!
//! [`cms`] is the dashboard-facing half: mutation descriptors and form
//! drafts for an editing front end. The bundled shells are read-only
//! browsers and do not call it.

pub mod carousel;
pub mod cms;
pub mod format;
pub mod model;
pub mod parsers;
pub mod rotator;
pub mod skills;
pub mod svg;
pub mod views;

pub use carousel::{Carousel, CarouselState, Nav, Stride, WindowConfig};
pub use parsers::{Content, ContentError, parse_auto, parse_listing, parse_portfolio};
pub use rotator::Rotator;
pub use skills::{CategoryFilter, SkillBrowser};
