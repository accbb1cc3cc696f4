use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("contact link `{label}` has malformed href `{href}`")]
    MalformedHref { label: String, href: String },
    #[error("skill group `{0}` has no skills")]
    EmptySkillGroup(String),
    #[error("project `{0}` has an empty tag")]
    EmptyTag(String),
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),
    #[error("couldn't start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
    #[error("invalid page content: {0}")]
    Content(#[from] ContentError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
