// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Eight-line comment header carried by face and directed-edge files

use crate::error::{MeshError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Number of header lines in every face or directed-edge file
pub const HEADER_LINES: usize = 8;

/// Banner lines available at the top of the header
pub const BANNER_LINES: usize = 4;

/// Opaque header lines, passed through unchanged between stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    lines: Vec<String>,
}

impl Header {
    /// Header for a freshly converted object
    pub fn for_object(banner: &[String], name: &str, vertices: usize, faces: usize) -> Self {
        let mut lines: Vec<String> = banner
            .iter()
            .take(BANNER_LINES)
            .map(|line| {
                if line.starts_with('#') {
                    line.clone()
                } else {
                    format!("# {}", line)
                }
            })
            .collect();
        lines.resize(BANNER_LINES, "#".to_string());

        lines.push("#".to_string());
        lines.push(format!("# Object name: {}", name));
        lines.push(format!("# Vertices={} Faces={}", vertices, faces));
        lines.push("#".to_string());

        Self { lines }
    }

    /// Take the first eight lines of a file as its header
    pub fn take_from<'a, I>(lines: &mut I) -> Result<Self>
    where
        I: Iterator<Item = &'a str>,
    {
        let lines: Vec<String> = lines.take(HEADER_LINES).map(str::to_string).collect();
        if lines.len() < HEADER_LINES {
            return Err(MeshError::parse(
                lines.len(),
                format!(
                    "expected a {}-line header, file has only {} lines",
                    HEADER_LINES,
                    lines.len()
                ),
            ));
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_always_has_eight_lines() {
        let banner = vec!["diredge 0.1.0".to_string(), "# Mesh lab".to_string()];
        let header = Header::for_object(&banner, "cube", 8, 12);
        assert_eq!(header.lines().len(), HEADER_LINES);
        assert_eq!(header.lines()[0], "# diredge 0.1.0");
        assert_eq!(header.lines()[1], "# Mesh lab");
        assert_eq!(header.lines()[2], "#");
        assert_eq!(header.lines()[5], "# Object name: cube");
        assert_eq!(header.lines()[6], "# Vertices=8 Faces=12");
    }

    #[test]
    fn test_long_banner_is_truncated() {
        let banner: Vec<String> = (0..6).map(|i| format!("line {}", i)).collect();
        let header = Header::for_object(&banner, "x", 0, 0);
        assert_eq!(header.lines().len(), HEADER_LINES);
        assert_eq!(header.lines()[3], "# line 3");
    }

    #[test]
    fn test_short_file_is_rejected() {
        let mut lines = "# a\n# b\n".lines();
        assert!(Header::take_from(&mut lines).is_err());
    }
}
