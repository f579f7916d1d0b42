//! Telemetry streaming over best-effort UDP

mod emitter;

pub use emitter::UdpEmitter;
