//! Runtime configuration.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::middleware::SetHeader;

/// Address used when neither `--addr` nor `BLOG_ADDR` is given.
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8070));

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const REQUEST_ID_VALUE: &str = "12345";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    /// Header stamped on every response.
    pub response_header: SetHeader,
}

impl Config {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr, response_header: SetHeader::new(REQUEST_ID_HEADER, REQUEST_ID_VALUE) }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ADDR)
    }
}
