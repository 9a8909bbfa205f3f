//! Catalog domain models.

/// Tool category. Doubles as the category listing for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Finance,
    Business,
    Student,
    Pdf,
    Ai,
}

impl ToolCategory {
    /// All categories, in display order.
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::Finance,
        ToolCategory::Business,
        ToolCategory::Student,
        ToolCategory::Pdf,
        ToolCategory::Ai,
    ];

    /// Human-readable category label.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Finance => "Salary & Finance",
            ToolCategory::Business => "GST & Business",
            ToolCategory::Student => "Student Tools",
            ToolCategory::Pdf => "PDF Tools",
            ToolCategory::Ai => "AI Tools",
        }
    }

    /// URL slug for the category listing.
    pub fn slug(&self) -> &'static str {
        match self {
            ToolCategory::Finance => "salary-tools",
            ToolCategory::Business => "gst-tools",
            ToolCategory::Student => "student-tools",
            ToolCategory::Pdf => "pdf-tools",
            ToolCategory::Ai => "ai-tools",
        }
    }

    /// Resolves a category from its slug. Unknown slugs are `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Closed set of icon identifiers used by the catalog.
///
/// Unknown icon names degrade to the default icon instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolIcon {
    #[default]
    Calculator,
    PiggyBank,
    Coins,
    Percent,
    FileText,
    UserCheck,
    PenTool,
    Image,
    Files,
    Minimize,
    Bot,
}

impl ToolIcon {
    /// Canonical icon name.
    pub fn name(&self) -> &'static str {
        match self {
            ToolIcon::Calculator => "Calculator",
            ToolIcon::PiggyBank => "PiggyBank",
            ToolIcon::Coins => "Coins",
            ToolIcon::Percent => "Percent",
            ToolIcon::FileText => "FileText",
            ToolIcon::UserCheck => "UserCheck",
            ToolIcon::PenTool => "PenTool",
            ToolIcon::Image => "Image",
            ToolIcon::Files => "Files",
            ToolIcon::Minimize => "Minimize2",
            ToolIcon::Bot => "Bot",
        }
    }

    /// Resolves an icon from its name, falling back to the default icon
    /// for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Calculator" => ToolIcon::Calculator,
            "PiggyBank" => ToolIcon::PiggyBank,
            "Coins" => ToolIcon::Coins,
            "Percent" => ToolIcon::Percent,
            "FileText" => ToolIcon::FileText,
            "UserCheck" => ToolIcon::UserCheck,
            "PenTool" => ToolIcon::PenTool,
            "Image" => ToolIcon::Image,
            "Files" => ToolIcon::Files,
            "Minimize2" => ToolIcon::Minimize,
            "Bot" => ToolIcon::Bot,
            _ => ToolIcon::default(),
        }
    }

    /// Short glyph for text surfaces (CLI listings).
    pub fn glyph(&self) -> &'static str {
        match self {
            ToolIcon::Calculator => "[=]",
            ToolIcon::PiggyBank => "(p)",
            ToolIcon::Coins => "(c)",
            ToolIcon::Percent => "(%)",
            ToolIcon::FileText => "[f]",
            ToolIcon::UserCheck => "(u)",
            ToolIcon::PenTool => "(w)",
            ToolIcon::Image => "[i]",
            ToolIcon::Files => "[+]",
            ToolIcon::Minimize => "[-]",
            ToolIcon::Bot => "(a)",
        }
    }
}

/// A catalog entry describing one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Stable tool identifier used in activity records
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// URL slug for the tool screen
    pub slug: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Category the tool is listed under
    pub category: ToolCategory,
    /// Icon shown next to the tool
    pub icon: ToolIcon,
    /// Whether the tool is surfaced on the popular list
    pub is_popular: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_round_trip() {
        for category in ToolCategory::ALL {
            assert_eq!(ToolCategory::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn test_unknown_category_slug() {
        assert_eq!(ToolCategory::from_slug("video-tools"), None);
    }

    #[test]
    fn test_icon_name_round_trip() {
        assert_eq!(ToolIcon::from_name("PiggyBank"), ToolIcon::PiggyBank);
        assert_eq!(ToolIcon::from_name("Minimize2"), ToolIcon::Minimize);
    }

    #[test]
    fn test_unknown_icon_falls_back_to_default() {
        assert_eq!(ToolIcon::from_name("Sparkles"), ToolIcon::default());
    }
}
