mod client_utils;
pub mod config;
mod errors;
pub mod google;
mod language_model;
mod opentelemetry;
pub mod prompt;
pub mod sdk_test;
mod service;
mod types;
mod validator;
mod view;

pub use config::{Config, ConfigError};
pub use errors::*;
pub use language_model::LanguageModel;
pub use prompt::{build_prompt, build_request, response_schema, AdviceRequest};
pub use service::{generate_response, AdviceService};
pub use types::*;
pub use validator::validate_response;
pub use view::ViewState;
