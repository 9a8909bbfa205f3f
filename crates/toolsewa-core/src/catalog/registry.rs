//! The static tool registry.

use super::model::{Tool, ToolCategory, ToolIcon};

/// Every tool the application offers, in display order.
pub static TOOLS: &[Tool] = &[
    // Finance
    Tool {
        id: "salary-calc",
        name: "Salary Calculator",
        slug: "salary-calculator",
        description: "Calculate monthly in-hand salary from CTC with 2024-25 Tax Regime.",
        category: ToolCategory::Finance,
        icon: ToolIcon::Calculator,
        is_popular: true,
    },
    Tool {
        id: "pf-calc",
        name: "EPF Calculator",
        slug: "pf-calculator",
        description: "Calculate the maturity amount of your Employee Provident Fund (EPF).",
        category: ToolCategory::Finance,
        icon: ToolIcon::PiggyBank,
        is_popular: false,
    },
    Tool {
        id: "gratuity-calc",
        name: "Gratuity Calculator",
        slug: "gratuity-calculator",
        description: "Calculate gratuity amount based on salary and years of service.",
        category: ToolCategory::Finance,
        icon: ToolIcon::Coins,
        is_popular: false,
    },
    // Business
    Tool {
        id: "gst-calc",
        name: "GST Calculator",
        slug: "gst-calculator",
        description: "Calculate GST exclusive and inclusive amounts instantly.",
        category: ToolCategory::Business,
        icon: ToolIcon::Percent,
        is_popular: true,
    },
    Tool {
        id: "gst-invoice",
        name: "GST Invoice Generator",
        slug: "gst-invoice-generator",
        description: "Generate professional GST invoices and download as PDF.",
        category: ToolCategory::Business,
        icon: ToolIcon::FileText,
        is_popular: false,
    },
    // Student
    Tool {
        id: "resume-builder",
        name: "Resume Builder",
        slug: "resume-builder",
        description: "Create a professional resume formatted for Indian job market.",
        category: ToolCategory::Student,
        icon: ToolIcon::UserCheck,
        is_popular: true,
    },
    Tool {
        id: "handwriting-gen",
        name: "Text to Handwriting",
        slug: "handwriting-generator",
        description: "Convert typed text into realistic handwritten notes.",
        category: ToolCategory::Student,
        icon: ToolIcon::PenTool,
        is_popular: false,
    },
    // PDF
    Tool {
        id: "img-to-pdf",
        name: "Image to PDF",
        slug: "image-to-pdf",
        description: "Convert multiple images (JPG/PNG) into a single PDF file.",
        category: ToolCategory::Pdf,
        icon: ToolIcon::Image,
        is_popular: true,
    },
    Tool {
        id: "pdf-merge",
        name: "PDF Merge",
        slug: "pdf-merge",
        description: "Combine multiple PDF files into a single document.",
        category: ToolCategory::Pdf,
        icon: ToolIcon::Files,
        is_popular: false,
    },
    Tool {
        id: "pdf-compress",
        name: "PDF Compress",
        slug: "pdf-compress",
        description: "Reduce the file size of your PDF documents.",
        category: ToolCategory::Pdf,
        icon: ToolIcon::Minimize,
        is_popular: false,
    },
    // AI
    Tool {
        id: "ai-chat",
        name: "AI Assistant",
        slug: "ai-assistant",
        description: "Get answers to your daily queries using advanced AI.",
        category: ToolCategory::Ai,
        icon: ToolIcon::Bot,
        is_popular: true,
    },
];

/// Finds a tool by its stable id.
pub fn find_by_id(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id)
}

/// Finds a tool by its URL slug.
pub fn find_by_slug(slug: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.slug == slug)
}

/// Tools listed under a category, in display order.
pub fn tools_in_category(category: ToolCategory) -> Vec<&'static Tool> {
    TOOLS.iter().filter(|t| t.category == category).collect()
}

/// Tools surfaced on the popular list.
pub fn popular_tools() -> Vec<&'static Tool> {
    TOOLS.iter().filter(|t| t.is_popular).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_eleven_tools() {
        assert_eq!(TOOLS.len(), 11);
    }

    #[test]
    fn test_find_by_id() {
        let tool = find_by_id("gst-calc").unwrap();
        assert_eq!(tool.name, "GST Calculator");
        assert_eq!(tool.category, ToolCategory::Business);
    }

    #[test]
    fn test_find_by_slug() {
        let tool = find_by_slug("resume-builder").unwrap();
        assert_eq!(tool.id, "resume-builder");
    }

    #[test]
    fn test_unknown_lookups_degrade_to_none() {
        assert!(find_by_id("video-editor").is_none());
        assert!(find_by_slug("video-editor").is_none());
    }

    #[test]
    fn test_every_category_has_tools() {
        for category in ToolCategory::ALL {
            assert!(!tools_in_category(category).is_empty());
        }
    }

    #[test]
    fn test_ids_and_slugs_are_unique() {
        for (i, a) in TOOLS.iter().enumerate() {
            for b in &TOOLS[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_popular_list() {
        let popular = popular_tools();
        assert_eq!(popular.len(), 5);
        assert!(popular.iter().all(|t| t.is_popular));
    }
}
