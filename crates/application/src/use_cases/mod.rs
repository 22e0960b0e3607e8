pub mod dns;

pub use dns::{DatagramOutcome, HandleDatagramUseCase, ResponseKind};
