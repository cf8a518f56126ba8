pub mod link_resolver;

pub use link_resolver::LinkResolver;
