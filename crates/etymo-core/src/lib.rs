pub mod controller;
pub mod error;
pub mod preprocess;
pub mod provider;
pub mod suggest;
pub mod view;

#[cfg(test)]
mod testutil;

pub use controller::QueryController;
pub use error::ProviderError;
pub use provider::DatasetProvider;
pub use suggest::{SuggestionEngine, SuggestionInput};
