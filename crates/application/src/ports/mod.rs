mod datagram_transport;

pub use datagram_transport::{Datagram, DatagramTransport};
