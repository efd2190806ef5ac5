pub mod access;
pub mod application;
pub mod error_chain;

pub use access::AccessEvent;
pub use application::ApplicationEvent;
pub use error_chain::ErrorChain;
