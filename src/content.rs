//! Everything the page says about its owner.

pub const OWNER: &str = "Alex Rivera";
pub const INITIALS: &str = "AR";
pub const TAGLINE: &str = "A passionate Full Stack Developer crafting beautiful and functional web experiences. Specializing in AI/ML, graphic design, modern web technologies, and user-centered design.";
pub const PROFILE_IMAGE: &str = "/profile.svg";
pub const RESUME_PATH: &str = "/resume/Alex_Rivera_CV.pdf";
pub const RESUME_FILE: &str = "Alex_Rivera_CV.pdf";
pub const EMAIL: &str = "hello@alexrivera.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        href: "#home",
    },
    NavItem {
        label: "About",
        href: "#about",
    },
    NavItem {
        label: "Projects",
        href: "#projects",
    },
    NavItem {
        label: "Skills",
        href: "#skills",
    },
    NavItem {
        label: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Mail,
}

impl SocialIcon {
    pub fn src(self) -> &'static str {
        match self {
            SocialIcon::GitHub => "/icons/github.svg",
            SocialIcon::LinkedIn => "/icons/linkedin.svg",
            SocialIcon::Mail => "/icons/mail.svg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/alexrivera",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/alexrivera/",
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        label: "Email",
        href: "mailto:hello@alexrivera.dev",
        icon: SocialIcon::Mail,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 6] = [
    Highlight {
        title: "Clean Code",
        description: "Crafting code that's easy to upkeep and effortlessly expands, guided by industry gold standards",
    },
    Highlight {
        title: "Creative Design",
        description: "Crafting beautiful interfaces with attention to detail",
    },
    Highlight {
        title: "Performance",
        description: "Building fast and optimized web applications",
    },
    Highlight {
        title: "AI-Powered Insights",
        description: "Turning raw data into smart decisions with custom ML pipelines and real-time predictive dashboards",
    },
    Highlight {
        title: "Longevity",
        description: "Built on standards that won't vanish next season",
    },
    Highlight {
        title: "Graphic Designing",
        description: "From Illustrator vectors to production CSS, no detail lost",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Experience (in months)",
        value: "6*",
    },
    Stat {
        label: "Projects Delivered",
        value: "6*",
    },
    Stat {
        label: "Certifications",
        value: "23*",
    },
    Stat {
        label: "CGPA",
        value: "7.66/10",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub logo: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
    pub stack: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        company: "Verint",
        logo: "/logos/verint.svg",
        role: "Associate Software Engineer",
        period: "2025 - Present",
        achievements: &[
            "Built a fidget-spinner e-commerce POC that loads, routes and checks out without module federation, pure Single-SPA.",
            "Created a UI-Shell admin-framework demo application as another POC to showcase frontend learning.",
            "Delivered an architecture standard for Import Maps + SystemJS scopes enabling React 17/19 coexistence in Single-SPA, validated via a working PoC.",
            "Finished an intensive React-TypeScript course ahead of cohort average, immediately applying patterns to both POCs.",
        ],
        stack: &["React.js", "TypeScript", "Single-SPA", "Micro-frontends", "Node.js"],
    },
    Experience {
        company: "Unified Mentor",
        logo: "/logos/unified-mentor.svg",
        role: "Data Science Intern",
        period: "2024",
        achievements: &[
            "Designed and implemented end-to-end ETL pipelines for Big Data processing using Python, SQL, and Pandas.",
            "Performed end-to-end data wrangling, feature engineering and statistical tests to tighten BI workflows.",
            "Built real-time visualizations and deployed ML models that automated KPI forecasting for ops teams.",
            "Solved real-world briefs spanning sales forecasting, entertainment analytics, and heart-disease diagnostics.",
        ],
        stack: &["Python", "SQL", "Pandas", "scikit-learn", "Power BI"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with payment integration, inventory management, and analytics dashboard.",
        image: "/projects/e-commerce.svg",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        github: "#",
        demo: "#",
    },
    Project {
        title: "Mobile Fitness App",
        description: "A comprehensive fitness tracking application with workout plans, progress tracking, and social features.",
        image: "/projects/fitness.svg",
        tags: &["React Native", "Firebase", "TypeScript"],
        github: "#",
        demo: "#",
    },
    Project {
        title: "Project Management Tool",
        description: "Collaborative project management platform with real-time updates, task tracking, and team communication.",
        image: "/projects/project-management.svg",
        tags: &["Next.js", "Tailwind CSS", "PostgreSQL"],
        github: "#",
        demo: "#",
    },
    Project {
        title: "AI Content Generator",
        description: "An AI-powered content generation tool that helps users create engaging content for various platforms.",
        image: "/projects/ai-content.svg",
        tags: &["Python", "React", "OpenAI", "FastAPI"],
        github: "#",
        demo: "#",
    },
    Project {
        title: "Portfolio Website",
        description: "A personal portfolio website to showcase projects, skills, and contact information with a modern UI.",
        image: "/projects/portfolio.svg",
        tags: &["Rust", "Leptos", "Tailwind CSS", "WASM"],
        github: "#",
        demo: "#",
    },
    Project {
        title: "Chat Application",
        description: "A real-time chat application with group messaging, emojis, and notifications.",
        image: "/projects/chat.svg",
        tags: &["Socket.io", "React", "Node.js"],
        github: "#",
        demo: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

impl Proficiency {
    pub const MAX_DOTS: usize = 5;

    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Expert => "Expert",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
        }
    }

    pub fn dots(self) -> usize {
        match self {
            Proficiency::Expert => 5,
            Proficiency::Advanced => 4,
            Proficiency::Intermediate => 3,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Proficiency::Expert => "bg-cyan-100 text-cyan-700 border border-cyan-300 dark:bg-cyan-500/20 dark:text-cyan-300 dark:border-cyan-400/30",
            Proficiency::Advanced => "bg-orange-100 text-orange-700 border border-orange-300 dark:bg-orange-500/20 dark:text-orange-300 dark:border-orange-400/30",
            Proficiency::Intermediate => "bg-emerald-100 text-emerald-700 border border-emerald-300 dark:bg-emerald-500/20 dark:text-emerald-300 dark:border-emerald-400/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, proficiency: Proficiency) -> Skill {
    Skill { name, proficiency }
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            skill("React", Proficiency::Advanced),
            skill("TypeScript", Proficiency::Advanced),
            skill("Single-SPA", Proficiency::Advanced),
            skill("Tailwind CSS", Proficiency::Advanced),
            skill("HTML5 & CSS3", Proficiency::Advanced),
        ],
    },
    SkillCategory {
        title: "Backend & Database",
        skills: &[
            skill("Node.js", Proficiency::Advanced),
            skill("Python", Proficiency::Advanced),
            skill("Core Java", Proficiency::Advanced),
            skill("C", Proficiency::Intermediate),
            skill("SQL", Proficiency::Advanced),
        ],
    },
    SkillCategory {
        title: "Tools & Technologies",
        skills: &[
            skill("Git & GitHub", Proficiency::Expert),
            skill("Canva", Proficiency::Expert),
            skill("AWS", Proficiency::Intermediate),
            skill("Figma", Proficiency::Intermediate),
            skill("VS Code", Proficiency::Expert),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECH_STACK: [TechItem; 11] = [
    TechItem {
        name: "React",
        icon: "/icons/react.svg",
    },
    TechItem {
        name: "TypeScript",
        icon: "/icons/typescript.svg",
    },
    TechItem {
        name: "Single-SPA",
        icon: "/icons/single-spa.svg",
    },
    TechItem {
        name: "Vite",
        icon: "/icons/vite.svg",
    },
    TechItem {
        name: "Html-5",
        icon: "/icons/html5.svg",
    },
    TechItem {
        name: "CSS-3",
        icon: "/icons/css3.svg",
    },
    TechItem {
        name: "Tailwind CSS",
        icon: "/icons/tailwind.svg",
    },
    TechItem {
        name: "Python",
        icon: "/icons/python.svg",
    },
    TechItem {
        name: "Node.js",
        icon: "/icons/nodejs.svg",
    },
    TechItem {
        name: "Java",
        icon: "/icons/java.svg",
    },
    TechItem {
        name: "Visual Studio Code (VS Code)",
        icon: "/icons/vscode.svg",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        value: EMAIL,
        href: "mailto:hello@alexrivera.dev",
        icon: "✉",
    },
    ContactChannel {
        label: "Phone",
        value: "+1-555-0100",
        href: "tel:+15550100",
        icon: "☎",
    },
    ContactChannel {
        label: "Location",
        value: "Bangalore, India",
        href: "#",
        icon: "⌖",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_proficiency_dots() {
        assert_eq!(Proficiency::Expert.dots(), 5);
        assert_eq!(Proficiency::Advanced.dots(), 4);
        assert_eq!(Proficiency::Intermediate.dots(), 3);
        for category in SKILL_CATEGORIES {
            for s in category.skills {
                assert!(s.proficiency.dots() <= Proficiency::MAX_DOTS);
            }
        }
    }

    #[test]
    fn test_nav_anchors() {
        let hrefs = NAV_ITEMS.iter().map(|n| n.href).collect::<HashSet<_>>();
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
        assert!(NAV_ITEMS.iter().all(|n| n.href.starts_with('#')));
        assert_eq!(NAV_ITEMS[0].href, "#home");
    }

    #[test]
    fn test_static_paths_are_rooted() {
        assert!(TECH_STACK.iter().all(|t| t.icon.starts_with("/icons/")));
        assert!(PROJECTS.iter().all(|p| p.image.starts_with('/')));
        assert!(RESUME_PATH.ends_with(RESUME_FILE));
    }
}
