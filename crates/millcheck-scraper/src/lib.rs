pub mod discover;
pub mod error;
pub mod inspect;
pub mod markup;
pub mod render;

pub use discover::{dedupe_product_urls, discover_product_links, extract_product_links};
pub use error::ScraperError;
pub use inspect::{extract_product_record, inspect_product, parse_product_page};
pub use markup::{HtmlSnapshot, MarkupElement, MarkupQuery};
pub use render::{HttpRenderer, PageRenderer};
