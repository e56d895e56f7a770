//! Measured layout of the platform's libc types.

use std::mem::size_of;

use crate::width::Signedness;

/// A libc typedef and the width it has on this platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformType {
    /// The C typedef name, reused as the D alias name.
    pub name: &'static str,
    /// Byte width.
    pub width: usize,
    pub signedness: Signedness,
}

impl PlatformType {
    pub const fn unsigned(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            signedness: Signedness::Unsigned,
        }
    }

    pub const fn signed(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            signedness: Signedness::Signed,
        }
    }
}

/// Number of typedefs emitted at module level.
pub const TYPE_COUNT: usize = 11;

/// Everything the generated module depends on.
///
/// `types` is in emission order: mode, inode, device, link count, uid, gid,
/// offset, large offset, block size, block count, time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformLayout {
    pub types: [PlatformType; TYPE_COUNT],
    /// `sizeof(struct stat)`.
    pub stat_size: usize,
    /// Width of C `unsigned int`.
    pub unsigned_int: usize,
    /// Width of C `unsigned long`.
    pub unsigned_long: usize,
}

impl PlatformLayout {
    /// The layout of the target this crate was compiled for.
    pub fn host() -> Self {
        Self {
            types: [
                PlatformType::unsigned("mode_t", size_of::<libc::mode_t>()),
                PlatformType::unsigned("ino_t", size_of::<libc::ino_t>()),
                PlatformType::unsigned("dev_t", size_of::<libc::dev_t>()),
                PlatformType::unsigned("nlink_t", size_of::<libc::nlink_t>()),
                PlatformType::unsigned("uid_t", size_of::<libc::uid_t>()),
                PlatformType::unsigned("gid_t", size_of::<libc::gid_t>()),
                PlatformType::unsigned("off_t", size_of::<libc::off_t>()),
                PlatformType::unsigned("loff_t", loff_t_size()),
                PlatformType::unsigned("blksize_t", size_of::<libc::blksize_t>()),
                PlatformType::unsigned("blkcnt_t", size_of::<libc::blkcnt_t>()),
                PlatformType::signed("time_t", size_of::<libc::time_t>()),
            ],
            stat_size: size_of::<libc::stat>(),
            unsigned_int: size_of::<libc::c_uint>(),
            unsigned_long: size_of::<libc::c_ulong>(),
        }
    }

    /// Replace the width of the named type. Returns `false` if no such type.
    pub fn set_width(&mut self, name: &str, width: usize) -> bool {
        match self.types.iter_mut().find(|t| t.name == name) {
            Some(ty) => {
                ty.width = width;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PlatformType> {
        self.types.iter().find(|t| t.name == name)
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn loff_t_size() -> usize {
    size_of::<libc::loff_t>()
}

// loff_t is a Linux name; elsewhere the large offset is plain off_t.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn loff_t_size() -> usize {
    size_of::<libc::off_t>()
}
