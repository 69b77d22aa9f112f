use ab_glyph::{FontArc, FontVec};

/// Paths where a CJK-capable typeface usually lives. Shift labels are
/// Japanese, so these are tried before the bundled latin fallback.
const PREFERRED_BOLD: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKjp-Bold.otf",
];

const PREFERRED_REGULAR: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKjp-Regular.otf",
];

const FALLBACK_BOLD: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");
const FALLBACK_REGULAR: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");

/// The two typefaces one render draws with.
///
/// Loading never fails: when no preferred face is found on disk the bundled
/// DejaVu Sans faces take over, and glyphs they do not cover degrade to a
/// blank advance instead of an error.
#[derive(Clone, Debug)]
pub struct FontSet {
    pub bold: FontArc,
    pub regular: FontArc,
}

impl FontSet {
    /// Load the preferred typefaces, falling back to the bundled ones.
    pub fn load() -> Self {
        Self {
            bold: load_first(PREFERRED_BOLD).unwrap_or_else(|| fallback(FALLBACK_BOLD, "bold")),
            regular: load_first(PREFERRED_REGULAR)
                .unwrap_or_else(|| fallback(FALLBACK_REGULAR, "regular")),
        }
    }
}

fn load_first(paths: &[&str]) -> Option<FontArc> {
    paths.iter().find_map(|path| {
        let bytes = std::fs::read(path).ok()?;
        let font = FontVec::try_from_vec(bytes).ok()?;
        Some(FontArc::from(font))
    })
}

fn fallback(bytes: &'static [u8], style: &str) -> FontArc {
    log::warn!("no preferred {style} typeface found, using the bundled fallback");
    FontArc::try_from_slice(bytes).expect("bundled font should always parse")
}
