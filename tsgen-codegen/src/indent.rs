//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Append one indent unit to `buf`.
    pub fn write_unit(&self, buf: &mut String) {
        match self {
            Self::Spaces(width) => {
                for _ in 0..*width {
                    buf.push(' ');
                }
            }
            Self::Tab => buf.push('\t'),
        }
    }

    /// The string for `level` indent units.
    pub fn repeat(&self, level: usize) -> String {
        let mut buf = String::new();
        for _ in 0..level {
            self.write_unit(&mut buf);
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::Spaces(2).repeat(1), "  ");
        assert_eq!(Indent::Spaces(2).repeat(3), "      ");
        assert_eq!(Indent::Spaces(4).repeat(2), "        ");
        assert_eq!(Indent::Tab.repeat(2), "\t\t");
        assert_eq!(Indent::TYPESCRIPT.repeat(0), "");
    }
}
