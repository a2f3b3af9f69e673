pub(crate) mod compass;
pub(crate) mod glyph;
