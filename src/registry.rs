//! Handle based ownership for hosts that cannot hold a Rust value.
//!
//! A [`Handle`] is an index plus a generation; releasing a generator bumps the
//! slot's generation, so a stale handle never reaches a generator created later
//! in the same slot.

use core::fmt;

use crate::config::SeedSource;
use crate::error::{Result, SfmtError};
use crate::Sfmt;

/// Opaque reference to a generator owned by a [`Registry`].
///
/// Handles are never reissued: a slot whose generation counter is exhausted is
/// retired rather than reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    rng: Option<Box<Sfmt>>,
}

/// Owns every generator handed out through a [`Handle`].
#[derive(Debug, Default)]
pub struct Registry {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live generators.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.rng.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn create(&mut self, source: &SeedSource) -> Result<Handle> {
        let rng = source.build()?;
        Ok(self.insert(rng))
    }

    pub fn create_from_seed(&mut self, seed: u32) -> Handle {
        self.insert(Sfmt::from_seed(seed))
    }

    pub fn create_from_array(&mut self, key: &[u32]) -> Result<Handle> {
        let rng = Sfmt::from_key(key)?;
        Ok(self.insert(rng))
    }

    fn insert(&mut self, rng: Sfmt) -> Handle {
        let rng = Some(Box::new(rng));

        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.rng = rng;

                Handle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, rng });

                Handle { index, generation: 0 }
            }
        };

        log::debug!("sfmt generator {handle} created");
        handle
    }

    pub fn get(&self, handle: Handle) -> Result<&Sfmt> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.rng.as_deref())
            .ok_or(SfmtError::UnknownHandle(handle))
    }

    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut Sfmt> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.rng.as_deref_mut())
            .ok_or(SfmtError::UnknownHandle(handle))
    }

    /// Drops the generator immediately; the handle is dead afterwards.
    pub fn release(&mut self, handle: Handle) -> Result<()> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.rng.is_some())
            .ok_or(SfmtError::UnknownHandle(handle))?;

        slot.rng = None;

        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                self.free.push(handle.index);
            }
            None => log::debug!("sfmt slot {} retired, generations exhausted", handle.index),
        }

        log::debug!("sfmt generator {handle} released");
        Ok(())
    }

    pub fn identifier(&self, handle: Handle) -> Result<&'static str> {
        Ok(self.get(handle)?.id_string())
    }

    pub fn min_block_size32(&self, handle: Handle) -> Result<usize> {
        Ok(self.get(handle)?.min_array_size32())
    }

    pub fn min_block_size64(&self, handle: Handle) -> Result<usize> {
        Ok(self.get(handle)?.min_array_size64())
    }

    pub fn fill32(&mut self, handle: Handle, buf: &mut [u32]) -> Result<()> {
        self.get_mut(handle)?.fill_u32(buf)
    }

    pub fn fill64(&mut self, handle: Handle, buf: &mut [u64]) -> Result<()> {
        self.get_mut(handle)?.fill_u64(buf)
    }
}

macro_rules! delegate_draws {
    ($($name:ident -> $ty:ty),* $(,)?) => {
        impl Registry {
            $(
                #[doc = concat!("[`Sfmt::", stringify!($name), "`] on the generator behind `handle`.")]
                pub fn $name(&mut self, handle: Handle) -> Result<$ty> {
                    Ok(self.get_mut(handle)?.$name())
                }
            )*
        }
    };
}

delegate_draws! {
    next_u32 -> u32,
    next_u64 -> u64,
    real1 -> f64,
    real2 -> f64,
    real3 -> f64,
    res53 -> f64,
    res53_mix -> f64,
    d4 -> u32,
    d6 -> u32,
    d8 -> u32,
    d10 -> u32,
    d12 -> u32,
    d20 -> u32,
    toss -> u32,
    card -> u32,
    card2 -> (u32, u32),
}
