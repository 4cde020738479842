pub const BRAND: &str = "Lanchas";
pub const NAVY: &str = "#0b1b3a";
pub const CONTACT_EMAIL: &str = "contato@lanchas.com";
pub const FOOTER_TAGLINE: &str = "Conectando portos e pessoas com segurança e transparência.";

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    HowItWorks,
    Captains,
    Boats,
    About,
    Contact,
}

impl Section {
    /// Element id of the section; nav links point at `#{anchor}`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::HowItWorks => "como-funciona",
            Section::Captains => "capitaes",
            Section::Boats => "lanchas",
            Section::About => "sobre",
            Section::Contact => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::HowItWorks => "Como funciona",
            Section::Captains => "Capitães",
            Section::Boats => "Lanchas",
            Section::About => "Sobre",
            Section::Contact => "Contato",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    // Navigation order
    pub fn all() -> [Section; 5] {
        [
            Section::HowItWorks,
            Section::Captains,
            Section::Boats,
            Section::About,
            Section::Contact,
        ]
    }
}

pub fn contact_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_anchors_match_page_sections() {
        let anchors: Vec<&str> = Section::all().iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["como-funciona", "capitaes", "lanchas", "sobre", "contato"]
        );
        let unique: HashSet<&str> = anchors.iter().copied().collect();
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn href_is_fragment_link() {
        assert_eq!(Section::Boats.href(), "#lanchas");
        assert_eq!(contact_href(), "mailto:contato@lanchas.com");
    }
}
