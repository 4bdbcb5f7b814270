//! Application layer - Use cases and orchestration

pub mod create_file;
pub mod find_template;
pub mod manage_config;
pub mod new_entry;
pub mod publish_draft;

pub use create_file::{create_file, CreateOutcome};
pub use find_template::TemplateResolver;
pub use manage_config::ConfigService;
pub use new_entry::NewEntryService;
pub use publish_draft::{process_draft, process_draft_with, PublishDraftService, PublishOutcome};

#[cfg(test)]
pub(crate) mod testing;
