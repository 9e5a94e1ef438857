// Peripheral outputs derived from the resume content: sitemap, robots.txt,
// JSON-LD, page metadata and the Open Graph card.

pub mod handlers;
pub mod metadata;
pub mod og;
pub mod robots;
pub mod sitemap;
pub mod structured_data;

pub use metadata::PageMetadata;
