/// Catalog entry; higher brightness is a brighter dye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fluorochrome {
    pub name: &'static str,
    pub brightness: u8,
}
