// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Keyword records (`Vertex 0 1 2 3`) shared by the face and directed-edge formats

use crate::error::{MeshError, Result};
use nalgebra::Point3;
use std::str::FromStr;

/// One whitespace-separated record line
pub(crate) struct Record<'a> {
    pub line: usize,
    pub keyword: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Split a line into keyword and fields, `None` for blank lines
    pub fn parse(line: usize, text: &'a str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let keyword = tokens.next()?;
        Some(Self {
            line,
            keyword,
            fields: tokens.collect(),
        })
    }

    pub fn expect_fields(&self, count: usize) -> Result<()> {
        if self.fields.len() != count {
            return Err(MeshError::parse(
                self.line,
                format!(
                    "{} record needs {} fields, found {}",
                    self.keyword,
                    count,
                    self.fields.len()
                ),
            ));
        }
        Ok(())
    }

    fn field<T: FromStr>(&self, index: usize, what: &str) -> Result<T> {
        let token = self.fields[index];
        token.parse().map_err(|_| {
            MeshError::parse(self.line, format!("invalid {} '{}'", what, token))
        })
    }

    pub fn index(&self, index: usize) -> Result<usize> {
        self.field(index, "index")
    }

    pub fn coordinate(&self, index: usize) -> Result<f64> {
        self.field(index, "coordinate")
    }

    /// Leading record ID, which must equal `expected`
    pub fn sequential_id(&self, expected: usize) -> Result<()> {
        let id = self.index(0)?;
        if id != expected {
            return Err(MeshError::parse(
                self.line,
                format!("{} {} is out of order, expected {}", self.keyword, id, expected),
            ));
        }
        Ok(())
    }

    /// `Vertex <id> <x> <y> <z>`
    pub fn vertex(&self, expected_id: usize) -> Result<Point3<f64>> {
        self.expect_fields(4)?;
        self.sequential_id(expected_id)?;
        Ok(Point3::new(
            self.coordinate(1)?,
            self.coordinate(2)?,
            self.coordinate(3)?,
        ))
    }

    /// `Face <id> <v0> <v1> <v2>`
    pub fn face(&self, expected_id: usize) -> Result<[usize; 3]> {
        self.expect_fields(4)?;
        self.sequential_id(expected_id)?;
        Ok([self.index(1)?, self.index(2)?, self.index(3)?])
    }

    pub fn unknown(&self) -> MeshError {
        MeshError::parse(self.line, format!("unknown record '{}'", self.keyword))
    }
}
