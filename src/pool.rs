//! 粒子对象池 - 避免每帧分配/释放的开销
//!
//! 句柄由组合发射器的一方持有并显式传入，没有全局单例。
//! 单线程使用；acquire/release 均为 O(1) 且不阻塞。

use crate::particle::Particle;

/// 固定容量的后进先出空闲列表
///
/// 容量只约束池内空闲记录的数量，不约束存活记录总数。
#[derive(Debug)]
pub struct ParticlePool {
    free: Vec<Particle>,
    capacity: usize,
}

impl ParticlePool {
    /// 创建对象池
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 清空并重设容量，应在任何发射器运行前调用一次
    pub fn init(&mut self, capacity: usize) {
        self.free.clear();
        self.free.shrink_to(capacity);
        self.capacity = capacity;
        log::debug!("Particle pool initialized, capacity {capacity}");
    }

    /// 取出最近归还的记录；池空时新建
    pub fn acquire(&mut self) -> Particle {
        self.free.pop().unwrap_or_default()
    }

    /// 归还记录；池满时直接丢弃 (不是泄漏，也不是错误)
    pub fn release(&mut self, particle: Particle) {
        if self.free.len() < self.capacity {
            self.free.push(particle);
        }
    }

    /// 池中可复用记录的数量
    pub fn available(&self) -> usize {
        self.free.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 清空池
    pub fn clear(&mut self) {
        self.free.clear();
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release_reuse() {
        let mut pool = ParticlePool::new(8);
        // 打上标记以验证归还的是同一批记录
        let mut taken: Vec<Particle> = (0..5)
            .map(|i| {
                let mut p = pool.acquire();
                p.life = i;
                p
            })
            .collect();
        assert_eq!(pool.available(), 0);

        for p in taken.drain(..) {
            pool.release(p);
        }
        assert_eq!(pool.available(), 5);

        let mut lives: Vec<i32> = (0..5).map(|_| pool.acquire().life).collect();
        lives.sort_unstable();
        assert_eq!(lives, vec![0, 1, 2, 3, 4]);
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn test_release_over_capacity_discards() {
        let mut pool = ParticlePool::new(2);
        for _ in 0..5 {
            pool.release(Particle::default());
        }
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_acquire_lifo_order() {
        let mut pool = ParticlePool::new(4);
        let mut a = Particle::default();
        a.life = 1;
        let mut b = Particle::default();
        b.life = 2;
        pool.release(a);
        pool.release(b);
        // 最近归还的先出
        assert_eq!(pool.acquire().life, 2);
        assert_eq!(pool.acquire().life, 1);
    }

    #[test]
    fn test_init_clears_and_resizes() {
        let mut pool = ParticlePool::new(4);
        pool.release(Particle::default());
        pool.init(16);
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.capacity(), 16);
    }

    #[test]
    fn test_acquire_from_empty_constructs() {
        let mut pool = ParticlePool::new(0);
        let p = pool.acquire();
        assert_eq!(p.current_life, 0);
        pool.release(p);
        // 容量 0：归还即丢弃
        assert_eq!(pool.available(), 0);
    }
}
