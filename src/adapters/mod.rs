// Adapters layer: translate external protocols into calls on the core.

pub mod http;
