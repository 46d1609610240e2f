pub mod builder;
pub mod exchanger;
pub mod message_builder;
pub mod response_parser;
pub mod transport;

pub use builder::SrvResolverBuilder;
pub use exchanger::HickoryExchanger;
pub use message_builder::MessageBuilder;
pub use response_parser::{DecodedResponse, ResponseParser};
