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

#![deny(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    unused_mut,
    unused_imports,
    dead_code,
    //missing_docs
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Polymorphic I/O adapter: asynchronous open/close/send/receive against an
//! arbitrary underlying transport (socket, serial port, TLS channel etc.)
//! through one uniform handle, [`Pio`], with no dependency on any concrete
//! transport type.
//!
//! A concrete transport plugs in by implementing [`Transport`] and exposing a
//! [`Driver`] which instantiates it from transport-specific creation
//! parameters. The adapter owns the transport instance it was built with and
//! forwards each call to it; every operation is two-phase, returning an
//! immediate accept/reject status and reporting the eventual outcome through a
//! caller-supplied completion callback invoked by the transport itself.
//!
//! The adapter introduces no execution machinery of its own: no threads, no
//! queues, no buffers and no locking. Whether completions fire synchronously
//! or from some reactor thread is a property of the concrete transport.

#[macro_use]
extern crate amplify;

mod adapter;
mod transport;

pub use adapter::{CreateError, Pio};
pub use transport::{
    Driver, LoggerLog, OnCloseComplete, OnError, OnOpenComplete, OnReceiveComplete,
    OnSendComplete, OpenResult, SendResult, Transport,
};
