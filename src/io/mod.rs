// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - raw, face-index and directed-edge text formats

mod directed_edge;
mod face_index;
mod header;
mod raw;
mod record;

pub use directed_edge::{
    parse_directed_edge, read_directed_edge_file, write_directed_edge, write_directed_edge_file,
};
pub use face_index::{
    parse_face_index, read_face_index_file, write_face_index, write_face_index_file,
};
pub use header::{Header, BANNER_LINES, HEADER_LINES};
pub use raw::{format_raw, parse_raw, read_raw_file};
