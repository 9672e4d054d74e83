pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Logs,
        }
    }
}
