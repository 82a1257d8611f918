mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_date_iso, fmt_number, fmt_pct};
pub(crate) use locales::load_translations;
pub use locales::{LocaleMeta, locales, normalize_lang};
pub use render::{t, tr, tr_with};
