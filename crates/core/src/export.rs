//! Static SVG export and download filenames.
//!
//! The exported document is a lightweight approximation of the interactive
//! renderers: it always draws a circle and reads only the name, the four
//! palette colors, and `letterSpacing` from the configuration.

use std::fmt::Write as _;

use crate::config::LogoConfiguration;

/// Width and height of the exported document.
pub const EXPORT_SIZE: u32 = 400;

/// Tagline drawn under the name.
pub const TAGLINE: &str = "BRAND";

/// Output format of a saved logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Download filename for `name`: lowercased, whitespace runs and path
/// separators replaced by `-`, suffixed `-logo.<ext>`.
///
/// The result never contains `/` or `\`, so joining it onto a directory
/// stays inside that directory.
pub fn export_filename(name: &str, format: ExportFormat) -> String {
    let stem = name
        .split(|c: char| c.is_whitespace() || c == '/' || c == '\\')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{stem}-logo.{}", format.extension())
}

/// Renders the static vector document for `config`.
pub fn export_svg(config: &LogoConfiguration) -> String {
    let palette = config.palette();
    let bg = palette.background.to_hex();
    let primary = palette.primary.to_hex();
    let secondary = palette.secondary.to_hex();
    let accent = palette.accent.to_hex();
    let spacing = config.params().letter_spacing;
    let title = escape_xml(&config.name().to_uppercase());
    let size = EXPORT_SIZE;

    let mut svg = String::with_capacity(1536);
    // Writing to a String cannot fail.
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <defs>
    <linearGradient id="lf-fill" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{primary}"/>
      <stop offset="100%" stop-color="{secondary}"/>
    </linearGradient>
    <filter id="lf-glow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="6" result="blur"/>
      <feMerge>
        <feMergeNode in="blur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
  </defs>
  <rect width="{size}" height="{size}" rx="40" ry="40" fill="{bg}"/>
  <circle cx="200" cy="150" r="70" fill="url(#lf-fill)" filter="url(#lf-glow)"/>
  <circle cx="200" cy="150" r="85" fill="none" stroke="{accent}" stroke-width="2" opacity="0.6"/>
  <text x="200" y="290" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="36" font-weight="700" letter-spacing="{spacing:.2}" fill="{primary}" filter="url(#lf-glow)">{title}</text>
  <text x="200" y="330" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="14" letter-spacing="6" fill="{accent}">{TAGLINE}</text>
</svg>
"##
    );
    svg
}

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterSelection;
    use crate::generator::generate_with;
    use crate::prng::Xorshift64;
    use crate::style::Shape;

    fn config(name: &str) -> LogoConfiguration {
        generate_with(name, &FilterSelection::random(), &mut Xorshift64::new(3)).unwrap()
    }

    #[test]
    fn filename_lowercases_and_hyphenates() {
        assert_eq!(export_filename("Nexus Labs", ExportFormat::Png), "nexus-labs-logo.png");
        assert_eq!(export_filename("  Blue   Sky\tCo ", ExportFormat::Svg), "blue-sky-co-logo.svg");
        assert_eq!(export_filename("acme", ExportFormat::Svg), "acme-logo.svg");
    }

    #[test]
    fn filename_never_contains_path_separators() {
        let name = export_filename("../../tmp/x", ExportFormat::Svg);
        assert_eq!(name, "..-..-tmp-x-logo.svg");
        let name = export_filename(r"..\evil\ co", ExportFormat::Png);
        assert_eq!(name, "..-evil-co-logo.png");
        let joined = std::path::Path::new("out").join(&name);
        assert_eq!(joined.parent(), Some(std::path::Path::new("out")));
    }

    #[test]
    fn svg_contains_name_and_tagline_once() {
        let svg = export_svg(&config("Acme"));
        assert_eq!(svg.matches("ACME").count(), 1);
        assert_eq!(svg.matches("BRAND").count(), 1);
    }

    #[test]
    fn svg_uses_palette_colors() {
        let c = config("Acme");
        let svg = export_svg(&c);
        let p = c.palette();
        for color in [p.primary, p.secondary, p.accent, p.background] {
            assert!(svg.contains(&color.to_hex()), "missing {}", color.to_hex());
        }
    }

    #[test]
    fn svg_escapes_markup_in_name() {
        let svg = export_svg(&config("R&D <Lab>"));
        assert!(svg.contains("R&amp;D &lt;LAB&gt;"));
        assert!(!svg.contains("<LAB>"));
    }

    #[test]
    fn svg_always_draws_a_circle() {
        let filters = FilterSelection::random().with_shape(Shape::Star);
        let c = generate_with("Acme", &filters, &mut Xorshift64::new(9)).unwrap();
        let svg = export_svg(&c);
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn svg_is_400_square() {
        let svg = export_svg(&config("Acme"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="400" height="400""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn escape_xml_handles_quotes() {
        assert_eq!(escape_xml(r#"a"b'c"#), "a&quot;b&apos;c");
    }
}
