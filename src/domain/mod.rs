//! Domain layer - Filenames, titles, templates and front matter

pub mod datetime;
pub mod entry;
pub mod filename;
pub mod front_matter;
pub mod template;
pub mod title;

pub use datetime::{get_date, get_date_time};
pub use entry::EntryKind;
pub use filename::{format_filename, slugify};
pub use front_matter::{extract_title, update_date};
pub use template::{load_template, replace_template_variables, Template, TemplateVariables};
pub use title::format_title;
