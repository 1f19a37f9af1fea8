//! Clamped RGB color arithmetic
//!
//! Every operation saturates at the channel bounds instead of wrapping or
//! failing, so a derived color is always a valid color.

/// Amount added to a base color to get its gradient highlight
pub const HIGHLIGHT_AMOUNT: u8 = 60;

/// Amount removed from a base color to get its gradient shadow
pub const SHADOW_AMOUNT: u8 = 40;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Add `amount` to every channel, saturating at 255
    #[inline]
    pub fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Subtract `amount` from every channel, saturating at 0
    #[inline]
    pub fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Canonical gradient highlight, `lighten(base, 60)`
    #[inline]
    pub fn highlight(self) -> Self {
        self.lighten(HIGHLIGHT_AMOUNT)
    }

    /// Canonical gradient shadow, `darken(base, 40)`
    #[inline]
    pub fn shadow(self) -> Self {
        self.darken(SHADOW_AMOUNT)
    }

    /// Add a signed offset to each channel independently, clamping to [0, 255]
    #[inline]
    pub fn offset(self, dr: i32, dg: i32, db: i32) -> Self {
        Self::new(
            clamp_channel(self.r as i32 + dr),
            clamp_channel(self.g as i32 + dg),
            clamp_channel(self.b as i32 + db),
        )
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1]
    #[inline]
    pub fn mix(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Clamp an integer channel value into the u8 range
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
