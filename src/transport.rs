use std::any::Any;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Outcome of an accepted open request, reported through [`OnOpenComplete`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpenResult {
    Ok,
    Error,
    Cancelled,
}

/// Outcome of an accepted send request, reported through [`OnSendComplete`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SendResult {
    Ok,
    Error,
    Cancelled,
}

/// Opaque logging hook handed to [`Driver::create`].
///
/// The adapter never invokes it and attaches no meaning to it; whether and how
/// a concrete transport logs through it is entirely the transport's business.
pub type LoggerLog = Arc<dyn Fn(fmt::Arguments<'_>) + Send + Sync>;

/// Completion callback for an accepted open request.
pub type OnOpenComplete = Box<dyn FnOnce(OpenResult) + Send>;

/// Completion callback for an accepted close request.
///
/// Close carries no outcome: only the initiation of a close can fail, the
/// completion is a plain notification.
pub type OnCloseComplete = Box<dyn FnOnce() + Send>;

/// Completion callback for an accepted send request.
pub type OnSendComplete = Box<dyn FnOnce(SendResult) + Send>;

/// Completion callback for an accepted receive request.
///
/// Receives the delivered bytes; the delivered length is the slice length.
/// Unlike open and send there is no outcome enumeration on this path.
pub type OnReceiveComplete = Box<dyn FnOnce(&[u8]) + Send>;

/// Callback for transports which report unsolicited, out-of-band failures.
///
/// Not used by the adapter itself; part of the callback vocabulary so that
/// concrete transports and their callers agree on a single type for it.
pub type OnError = Box<dyn FnOnce() + Send>;

/// Contract of a concrete transport plugged into the [`crate::Pio`] adapter.
///
/// Every operation is two-phase: the synchronous return value only reports
/// whether the request was *accepted* (`Ok(())`) or rejected (`Err`, with the
/// transport's own error passed through the adapter verbatim). The eventual
/// outcome of an accepted request arrives later through the completion
/// callback, invoked by the transport from whatever execution context it
/// chooses. A rejected request must never invoke its completion callback.
///
/// The adapter performs no call-order or thread-safety enforcement; if a
/// transport requires open-before-send or single-threaded access, that is the
/// transport's contract with its caller.
pub trait Transport: Send {
    /// Initiates opening the transport.
    fn open(&mut self, on_open_complete: OnOpenComplete) -> io::Result<()>;

    /// Initiates closing the transport.
    fn close(&mut self, on_close_complete: OnCloseComplete) -> io::Result<()>;

    /// Requests transmission of `buffer`.
    ///
    /// `params` is transport-specific out-of-band metadata (destination info
    /// and the like), opaque to the adapter.
    fn send(
        &mut self,
        params: Option<&dyn Any>,
        buffer: &[u8],
        on_send_complete: OnSendComplete,
    ) -> io::Result<()>;

    /// Requests delivery of up to `max_size` bytes.
    fn receive(
        &mut self,
        params: Option<&dyn Any>,
        max_size: usize,
        on_receive_complete: OnReceiveComplete,
    ) -> io::Result<()>;
}

/// Factory for a concrete [`Transport`], selected at adapter construction.
///
/// A driver is read-only shared state: any number of adapter instances may be
/// built from the same driver, each owning its own transport instance.
pub trait Driver: Send + Sync {
    /// Instantiates a concrete transport from transport-specific creation
    /// parameters.
    ///
    /// `params` is opaque to the adapter; drivers downcast it to whatever
    /// creation type they expect. Returning `None` signals that no transport
    /// could be instantiated.
    fn create(
        &self,
        params: Option<&dyn Any>,
        logger: Option<LoggerLog>,
    ) -> Option<Box<dyn Transport>>;
}
