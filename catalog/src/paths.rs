//! Asset path conventions.
//!
//! Every asset of a board lives under a directory named after the board. The
//! paths produced here are relative; the asset source decides what they are
//! relative to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    FrontScan,
    BackScan,
    Schematic,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::FrontScan => "front scan",
            AssetKind::BackScan => "back scan",
            AssetKind::Schematic => "schematic",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn path_for(identifier: &str, kind: AssetKind) -> String {
    match kind {
        AssetKind::FrontScan => format!("{identifier}/scans/front.png"),
        AssetKind::BackScan => format!("{identifier}/scans/back.png"),
        AssetKind::Schematic => format!("{identifier}/{identifier}.schematic"),
    }
}
