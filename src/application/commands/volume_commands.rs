//! Volume Commands

use crate::domain::manga::{MangaId, VolumeId};

/// 修改单卷购买状态
#[derive(Debug, Clone)]
pub struct UpdateVolumeStatus {
    pub manga_id: MangaId,
    pub volume_id: VolumeId,
    pub purchased: bool,
}

/// 批量修改购买状态
#[derive(Debug, Clone)]
pub struct UpdateVolumesStatus {
    pub manga_id: MangaId,
    pub volume_ids: Vec<VolumeId>,
    pub purchased: bool,
}
