use std::path::Path;
use std::path::PathBuf;

/// Types that can be written to and loaded from a binary file.
pub trait Disk: Sized {
    /// Name of the entity, used as the file stem.
    fn name() -> &'static str;
    /// Magic bytes opening every file of this type.
    fn header() -> &'static [u8];
    /// Write to disk.
    fn save(&self, path: &Path) -> anyhow::Result<()>;
    /// Read from disk.
    fn load(path: &Path) -> anyhow::Result<Self>;
    /// Default location inside `dir`.
    fn path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.bin", Self::name()))
    }
    /// Check if a file exists at the default location.
    fn done(dir: &Path) -> bool {
        std::fs::metadata(Self::path(dir)).is_ok()
    }
    /// Signature closing every file.
    fn footer() -> u16 {
        0xFFFF
    }
    /// Consume and check the header.
    fn verify<R: std::io::Read>(reader: &mut R) -> anyhow::Result<()> {
        let mut header = vec![0u8; Self::header().len()];
        reader.read_exact(&mut header)?;
        anyhow::ensure!(header == Self::header(), "bad header {:?}", header);
        Ok(())
    }
}
