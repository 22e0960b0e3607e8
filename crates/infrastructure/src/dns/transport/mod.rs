pub mod udp;

pub use udp::{UdpTransport, MAX_DATAGRAM_SIZE};
