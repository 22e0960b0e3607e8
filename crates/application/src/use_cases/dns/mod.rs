mod handle_datagram;

pub use handle_datagram::{DatagramOutcome, HandleDatagramUseCase, ResponseKind};
