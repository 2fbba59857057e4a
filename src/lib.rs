//! # Particle Engine
//!
//! A libGDX-compatible 2D particle simulation engine built with Rust.
//!
//! ## Features
//!
//! - **Parameter Curves**: Randomized low/high ranges scaled by percent-of-life timelines
//! - **Spawn Shapes**: Point, line, square and ellipse emission areas with edge sampling
//! - **Emitter State Machine**: Millisecond-accurate delay, duration and continuous looping
//! - **Object Pooling**: Particle records recycled through an explicit LIFO pool
//! - **Effects**: Multi-emitter aggregation with completion callbacks and free mode
//! - **Text Format**: Byte-faithful save/load of the libGDX particle definition format
//!
//! ### Example
//!
//! ```ignore
//! use particle_engine::{EffectCache, ParticlePool};
//!
//! let mut pool = ParticlePool::new(512);
//! let mut cache = EffectCache::new();
//! let mut effect = cache.obtain("assets/flame.p")?;
//! effect.start();
//! effect.update(&mut pool, 1.0 / 60.0);
//! ```
//!
//! ## Modules
//!
//! - [`curve`]: Randomized parameter curves and color gradients
//! - [`spawn`]: Emission area sampling
//! - [`particle`]: Per-particle simulation record
//! - [`pool`]: Particle object pool
//! - [`emitter`]: The emitter state machine
//! - [`effect`]: Multi-emitter effects
//! - [`cache`]: Effect definition cache
//! - [`error`]: Error types

/// Randomized parameter curves and color gradients
pub mod curve;
/// Particle effect definition cache
pub mod cache;
/// Multi-emitter particle effects
pub mod effect;
/// Particle emitter state machine
pub mod emitter;
/// Error types for loading particle definitions
pub mod error;
mod format;
/// Per-particle simulation record
pub mod particle;
/// Particle object pool
pub mod pool;
/// Emission area sampling
pub mod spawn;

pub use cache::EffectCache;
pub use curve::{GradientValue, RangedValue, ScaledValue};
pub use effect::ParticleEffect;
pub use emitter::ParticleEmitter;
pub use error::{FormatError, ParticleError, ParticleResult};
pub use particle::Particle;
pub use pool::ParticlePool;
pub use spawn::{EllipseSide, SpawnShape, SpawnShapeValue};
