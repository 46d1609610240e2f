pub mod resolv_conf;

pub use resolv_conf::{read_nameservers, DEFAULT_RESOLV_CONF_PATH};
