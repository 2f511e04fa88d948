use bitfield_struct::bitfield;

#[bitfield(u8, debug = true)]
#[derive(PartialEq, Eq)]
pub struct AttrFlags {
    #[bits(4)]
    pub resvd: u8,
    pub extended: bool,
    pub partial: bool,
    pub transitive: bool,
    pub optional: bool,
}
