//! Pure formatting and validation helpers shared by the public site and the admin panel.

pub mod date;
pub mod text;
pub mod tech;
pub mod validate;

pub use date::{format_date, format_date_str, DateLocale};
pub use tech::{format_technologies, technologies_to_string, TechDecode};
pub use text::truncate_text;
pub use validate::{validate_email, validate_url};
