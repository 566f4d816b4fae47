pub mod age;
pub mod config;
pub mod elapsed;
pub mod error;
pub mod locale;
pub mod logger;
pub mod request;
pub mod shortcode;

pub use age::{DateSpec, today_utc, whole_years, year_span};
pub use elapsed::{Rendered, compute_total, format_elapsed_years};
pub use error::{ErrorKind, Result, TimelessError};
pub use locale::{Catalog, EnglishCatalog, TomlCatalog};
pub use request::FormatRequest;
pub use shortcode::render_content;
