mod errors;
mod resolver;

pub use errors::ConfigError;
pub use resolver::ResolverConfig;
