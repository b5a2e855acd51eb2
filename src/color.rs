#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    red: T,
    green: T,
    blue: T,
}

impl<T: Copy> RGBColorFormat<T> {
    pub const fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }

    pub fn red(&self) -> T {
        self.red
    }

    pub fn green(&self) -> T {
        self.green
    }

    pub fn blue(&self) -> T {
        self.blue
    }
}

impl RGBColorFormat<u8> {
    /// Byte order of a 24-bit bitmap dot.
    pub fn to_bgr_bytes(&self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

impl Default for RGBColorFormat<u8> {
    fn default() -> Self {
        RGBColorFormat::new(0, 0, 0)
    }
}

/// The only colors a grid file can select, indexed by their two-bit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Yellow = 0b00,
    Black = 0b01,
    Blue = 0b10,
    Green = 0b11,
}

pub const COLOR_TABLE: [RGBColorFormat<u8>; 4] = [
    RGBColorFormat::new(255, 255, 0),
    RGBColorFormat::new(0, 0, 0),
    RGBColorFormat::new(0, 0, 255),
    RGBColorFormat::new(0, 255, 0),
];

impl PaletteColor {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for PaletteColor {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0b00 => Ok(Self::Yellow),
            0b01 => Ok(Self::Black),
            0b10 => Ok(Self::Blue),
            0b11 => Ok(Self::Green),
            _ => Err(code),
        }
    }
}

impl From<PaletteColor> for RGBColorFormat<u8> {
    fn from(value: PaletteColor) -> Self {
        COLOR_TABLE[value.code() as usize]
    }
}
