pub mod config;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod project;
pub mod stream;

pub use config::{load_defaults, Defaults};
pub use error::TailError;
pub use filter::{Filter, FilterSet};
pub use pipeline::{Action, Pipeline};
pub use project::Projector;
pub use stream::{JsonObject, ObjectStream};
