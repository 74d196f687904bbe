// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `io` module implements the byte source and tokenizer abstractions: a uniform read/peek/skip
//! interface over either an in-memory slice or a one-shot stream, and a position-tracked cursor
//! layered on top of it.

mod memory;
mod source;
mod stream;
mod token;
mod tokenizer;

pub use memory::MemorySource;
pub use source::ByteSource;
pub use stream::StreamSource;
pub use token::{
    decode_ascii_lossy, I16Be, I16Le, I32Be, I32Le, I64Be, I64Le, I8, SyncSafeU32, Token, U16Be,
    U16Le, U32Be, U32Le, U64Be, U64Le, U8,
};
pub use tokenizer::{
    from_buffer, from_stream, MemoryTokenizer, ReadOptions, StreamTokenizer, Tokenizer,
};
