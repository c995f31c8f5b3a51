use std::fmt;

/// The two-valued theme selection. Lives in memory only and starts light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(Appearance::default(), Appearance::Light);
    }

    #[test]
    fn toggling_twice_restores_original() {
        for start in [Appearance::Light, Appearance::Dark] {
            let mut appearance = start;
            appearance.toggle();
            assert_ne!(appearance, start);
            appearance.toggle();
            assert_eq!(appearance, start);
        }
    }

    #[test]
    fn names_match_cli_values() {
        assert_eq!(Appearance::Light.to_string(), "light");
        assert_eq!(Appearance::Dark.to_string(), "dark");
        assert!(Appearance::Dark.is_dark());
    }
}
