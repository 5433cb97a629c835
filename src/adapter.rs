// Transport-agnostic polymorphic I/O adapter library.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! The uniform adapter handle forwarding to a concrete transport.

use std::any::Any;
use std::io;

use crate::transport::{
    Driver, LoggerLog, OnCloseComplete, OnOpenComplete, OnReceiveComplete, OnSendComplete,
    Transport,
};

/// Errors during the construction of a [`Pio`] adapter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum CreateError {
    /// driver was unable to instantiate a concrete transport from the provided creation parameters.
    Transport,
}

/// Uniform handle performing asynchronous I/O against an arbitrary underlying
/// transport.
///
/// The handle owns exactly one concrete transport instance, produced by the
/// [`Driver`] it was constructed from, and forwards every operation to it.
/// It adds nothing else: no buffering, no queues, no locking, no call-order
/// tracking. All asynchrony, ordering and thread-safety contracts are those of
/// the concrete transport.
///
/// Every I/O operation follows the two-phase contract of [`Transport`]: the
/// returned [`io::Result`] reports acceptance only, with the transport's
/// rejection error passed through verbatim; the outcome of an accepted request
/// is reported later through the completion callback. A rejection guarantees
/// the completion callback will never fire for that call.
pub struct Pio {
    transport: Box<dyn Transport>,
}

impl Pio {
    /// Constructs an adapter by asking `driver` to instantiate its concrete
    /// transport from `params`.
    ///
    /// The `logger` hook is forwarded to [`Driver::create`] untouched.
    ///
    /// # Error
    ///
    /// Errors if the driver yields no transport instance; in that case nothing
    /// is retained and no completion callback will ever be seen.
    pub fn create(
        driver: &dyn Driver,
        params: Option<&dyn Any>,
        logger: Option<LoggerLog>,
    ) -> Result<Self, CreateError> {
        #[cfg(feature = "log")]
        log::debug!(target: "pio", "Instantiating concrete transport");

        let transport = driver.create(params, logger).ok_or(CreateError::Transport)?;
        Ok(Pio { transport })
    }

    /// Initiates opening the transport. The outcome arrives later through
    /// `on_open_complete`.
    pub fn open(&mut self, on_open_complete: OnOpenComplete) -> io::Result<()> {
        #[cfg(feature = "log")]
        log::trace!(target: "pio", "Forwarding open request to the concrete transport");

        self.transport.open(on_open_complete)
    }

    /// Initiates closing the transport. Completion arrives later through
    /// `on_close_complete`, which carries no status.
    pub fn close(&mut self, on_close_complete: OnCloseComplete) -> io::Result<()> {
        #[cfg(feature = "log")]
        log::trace!(target: "pio", "Forwarding close request to the concrete transport");

        self.transport.close(on_close_complete)
    }

    /// Requests transmission of `buffer`, with transport-specific `params`
    /// forwarded opaquely. The outcome arrives later through
    /// `on_send_complete`.
    pub fn send(
        &mut self,
        params: Option<&dyn Any>,
        buffer: &[u8],
        on_send_complete: OnSendComplete,
    ) -> io::Result<()> {
        #[cfg(feature = "log")]
        log::trace!(target: "pio", "Forwarding send request for {} byte(s)", buffer.len());

        self.transport.send(params, buffer, on_send_complete)
    }

    /// Requests delivery of up to `max_size` bytes; the delivered bytes arrive
    /// later through `on_receive_complete`.
    pub fn receive(
        &mut self,
        params: Option<&dyn Any>,
        max_size: usize,
        on_receive_complete: OnReceiveComplete,
    ) -> io::Result<()> {
        #[cfg(feature = "log")]
        log::trace!(target: "pio", "Forwarding receive request for up to {max_size} byte(s)");

        self.transport.receive(params, max_size, on_receive_complete)
    }

    /// Destroys the adapter, running the concrete transport's destructor
    /// exactly once.
    ///
    /// Equivalent to dropping the handle; provided for callers who want the
    /// teardown to read as an operation. Ownership makes reuse after
    /// destruction a compile error.
    pub fn destroy(self) {
        #[cfg(feature = "log")]
        log::debug!(target: "pio", "Destroying adapter together with its concrete transport");
    }
}
