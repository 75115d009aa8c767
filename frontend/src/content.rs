//! Static page content. Everything here is built once at render time and
//! never mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Projects,
    About,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Projects,
        SectionId::About,
        SectionId::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Projects => "projects",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Services => "Services",
            SectionId::Projects => "Projects",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub fn nav_items() -> Vec<NavItem> {
    SectionId::ALL
        .into_iter()
        .map(|target| NavItem {
            label: target.label(),
            target,
        })
        .collect()
}

/// Every section fades in when it first scrolls into view.
pub fn animated_sections() -> Vec<SectionId> {
    SectionId::ALL.to_vec()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const OWNER_FIRST_NAME: &str = "TARABHAI";
pub const OWNER_LAST_NAME: &str = "PATIDAR";
pub const OWNER_DISPLAY_NAME: &str = "Tarabhai Patidar";
pub const TAGLINE: &str = "Building scalable digital solutions";

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-code",
        title: "Full-Stack Development",
        description: "Enterprise-grade web applications built with Next.js, React, and modern backend technologies. Scalable architecture designed for growth.",
    },
    Service {
        icon: "fas fa-brain",
        title: "AI & Automation",
        description: "Intelligent automation workflows using n8n and AI agents. Streamline operations, reduce costs, and scale effortlessly.",
    },
    Service {
        icon: "fas fa-database",
        title: "Database Solutions",
        description: "Robust data architecture with MongoDB and SQL. Optimized for performance, security, and seamless integration.",
    },
    Service {
        icon: "fas fa-bolt",
        title: "Performance Optimization",
        description: "Lightning-fast applications with advanced caching, CDN integration, and performance-first engineering practices.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        category: "Full-Stack Development",
        description: "Built a scalable e-commerce solution with AI-powered recommendations, reducing cart abandonment by 35%.",
        tech: &["Next.js", "MongoDB", "Stripe", "AI"],
    },
    Project {
        title: "Business Automation Suite",
        category: "AI & Automation",
        description: "Automated 15+ business workflows using n8n and custom AI agents, saving 40 hours per week.",
        tech: &["n8n", "AI Agents", "APIs", "Webhooks"],
    },
    Project {
        title: "SaaS Dashboard",
        category: "Full-Stack Development",
        description: "Real-time analytics dashboard serving 10K+ users with sub-second load times and 99.9% uptime.",
        tech: &["React", "Node.js", "PostgreSQL", "Redis"],
    },
];

pub const TECH_STACK: &[&str] = &[
    "Next.js",
    "React",
    "Node.js",
    "TypeScript",
    "Tailwind CSS",
    "MongoDB",
    "PostgreSQL",
    "Redis",
    "n8n",
    "AI Agents",
    "Docker",
    "AWS",
    "Vercel",
    "Framer Motion",
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Performance-First",
        blurb: "Every solution optimized for speed and efficiency",
    },
    Highlight {
        title: "Scalable Architecture",
        blurb: "Built to grow with your business",
    },
    Highlight {
        title: "AI-Powered",
        blurb: "Leveraging automation to maximize efficiency",
    },
];

// Profile URLs were never filled in on the live page either.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", icon: "fab fa-linkedin", href: "#" },
    SocialLink { label: "GitHub", icon: "fab fa-github", href: "#" },
    SocialLink { label: "Email", icon: "fas fa-envelope", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_and_round_trip() {
        let ids: HashSet<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::from_id("pricing"), None);
        assert_eq!(SectionId::from_id("#services"), None);
    }

    #[test]
    fn nav_follows_page_order() {
        let labels: Vec<_> = nav_items().iter().map(|n| n.label).collect();
        assert_eq!(labels, ["Home", "Services", "Projects", "About", "Contact"]);
        assert_eq!(SectionId::Services.anchor(), "#services");
    }

    #[test]
    fn all_sections_fade_in() {
        assert_eq!(animated_sections(), SectionId::ALL.to_vec());
    }

    #[test]
    fn content_counts_match_the_page() {
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(TECH_STACK.len(), 14);
        assert_eq!(HIGHLIGHTS.len(), 3);
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
    }
}
