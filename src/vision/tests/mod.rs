mod glyph;
