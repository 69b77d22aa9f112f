#![doc = include_str!("../README.md")]

use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its red, green and blue channels.
    ///
    /// ```
    /// use staff_palette::Color;
    ///
    /// let pink = Color::new(0xFF, 0x6B, 0x9D);
    /// assert_eq!(pink.channels(), [0xFF, 0x6B, 0x9D]);
    /// ```
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get the channels as an array, in RGB order.
    ///
    /// ```
    /// use staff_palette::Color;
    ///
    /// assert_eq!(Color::new(1, 2, 3).channels(), [1, 2, 3]);
    /// ```
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Debug for Color {
    /// ```
    /// use staff_palette::Color;
    ///
    /// assert_eq!(format!("{:?}", Color::new(0xFF, 0x6B, 0x9D)), "#FF6B9D");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The fixed palette staff colors are drawn from.
///
/// The order is significant: a staff member's color is the palette entry at
/// their lexicographic rank modulo the palette length.
pub const PALETTE: [Color; 15] = [
    Color::new(0xFF, 0x6B, 0x9D), // pink
    Color::new(0xC0, 0x84, 0xFC), // purple
    Color::new(0x60, 0xA5, 0xFA), // blue
    Color::new(0x34, 0xD3, 0x99), // green
    Color::new(0xFB, 0xBF, 0x24), // yellow
    Color::new(0xFB, 0x92, 0x3C), // orange
    Color::new(0xF8, 0x71, 0x71), // red
    Color::new(0xA7, 0x8B, 0xFA), // violet
    Color::new(0x2D, 0xD4, 0xBF), // teal
    Color::new(0xE8, 0x79, 0xF9), // magenta
    Color::new(0xFC, 0xA5, 0xA5), // light red
    Color::new(0x86, 0xEF, 0xAC), // light green
    Color::new(0x93, 0xC5, 0xFD), // light blue
    Color::new(0xFD, 0xE6, 0x8A), // light yellow
    Color::new(0xFD, 0xBA, 0x74), // light orange
];

/// A deterministic assignment from staff names to palette colors.
///
/// Names are kept sorted and deduplicated, so the assignment only depends on
/// the set of names, never on the order they were supplied in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StaffColors {
    names: Vec<String>,
}

impl StaffColors {
    /// Build an assignment for every distinct name in the input.
    ///
    /// ```
    /// use staff_palette::StaffColors;
    ///
    /// let colors = StaffColors::assign(["さな", "なの", "さな"]);
    /// assert_eq!(colors.len(), 2);
    /// ```
    pub fn assign<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut names: Vec<String> = names.into_iter().map(str::to_owned).collect();
        names.sort_unstable();
        names.dedup();
        Self { names }
    }

    /// Get the color assigned to a name, if it is part of the assignment.
    ///
    /// The same name always gets the same color within one assignment, and
    /// supplying names in a different order does not change anything:
    ///
    /// ```
    /// use staff_palette::{StaffColors, PALETTE};
    ///
    /// let colors = StaffColors::assign(["bob", "alice"]);
    /// assert_eq!(colors.get("alice"), Some(PALETTE[0]));
    /// assert_eq!(colors.get("bob"), Some(PALETTE[1]));
    /// assert_eq!(colors.get("carol"), None);
    ///
    /// let reordered = StaffColors::assign(["alice", "bob"]);
    /// assert_eq!(colors.get("alice"), reordered.get("alice"));
    /// ```
    ///
    /// Past the palette length, colors cycle:
    ///
    /// ```
    /// use staff_palette::{StaffColors, PALETTE};
    ///
    /// let names: Vec<String> = (0..20).map(|i| format!("staff-{i:02}")).collect();
    /// let colors = StaffColors::assign(names.iter().map(String::as_str));
    /// assert_eq!(colors.get("staff-00"), colors.get("staff-15"));
    /// ```
    pub fn get(&self, name: &str) -> Option<Color> {
        let rank = self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()?;
        Some(PALETTE[rank % PALETTE.len()])
    }

    /// Iterate over `(name, color)` pairs in lexicographic name order.
    ///
    /// ```
    /// use staff_palette::{StaffColors, PALETTE};
    ///
    /// let colors = StaffColors::assign(["bob", "alice"]);
    /// let pairs: Vec<_> = colors.iter().collect();
    /// assert_eq!(pairs, [("alice", PALETTE[0]), ("bob", PALETTE[1])]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        (self.names.iter())
            .enumerate()
            .map(|(rank, name)| (name.as_str(), PALETTE[rank % PALETTE.len()]))
    }

    /// Number of distinct names in the assignment.
    ///
    /// ```
    /// use staff_palette::StaffColors;
    ///
    /// assert_eq!(StaffColors::assign(["a", "b", "a"]).len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the assignment holds no names at all.
    ///
    /// ```
    /// use staff_palette::StaffColors;
    ///
    /// assert!(StaffColors::assign([]).is_empty());
    /// assert!(!StaffColors::assign(["a"]).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
