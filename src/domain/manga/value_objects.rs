//! Manga Context - Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 漫画唯一标识（由 API 分配的整数 ID）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MangaId(u32);

impl MangaId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MangaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for MangaId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for MangaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单卷标识
///
/// 只在所属漫画内唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeId(u32);

impl VolumeId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VolumeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for VolumeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
