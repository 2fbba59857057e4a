//! 特效定义缓存
//!
//! 按路径缓存解析好的特效模板，命中时克隆实例返回，
//! 同一份定义只做一次磁盘读取和解析。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::effect::ParticleEffect;
use crate::error::ParticleResult;

/// 特效模板缓存
#[derive(Default)]
pub struct EffectCache {
    templates: HashMap<PathBuf, ParticleEffect>,
}

impl EffectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取一个独立的特效实例；首次访问时从磁盘加载定义
    pub fn obtain(&mut self, path: impl AsRef<Path>) -> ParticleResult<ParticleEffect> {
        let path = path.as_ref();
        if !self.templates.contains_key(path) {
            log::debug!("loading particle effect definition: {}", path.display());
            let text = std::fs::read_to_string(path)?;
            let template = ParticleEffect::load(&text)?;
            self.templates.insert(path.to_path_buf(), template);
        }
        let template = &self.templates[path];
        Ok(template.instantiate())
    }

    /// 丢弃全部模板，下一次 obtain 重新从磁盘加载
    pub fn clear(&mut self) {
        self.templates.clear();
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ============================================================================
// 测试
// ============================================================================
