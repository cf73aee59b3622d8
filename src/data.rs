use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub hash: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExperienceIcon {
    Graduation,
    Work,
    React,
}

impl ExperienceIcon {
    /// Glyph rendered inside the timeline bubble.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Graduation => "🎓",
            Self::Work => "💼",
            Self::React => "⚛",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub icon: ExperienceIcon,
    pub score: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub title: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
    pub slug: &'static str,
    pub alt_text: &'static str,
}

impl Certificate {
    pub fn href(&self) -> String {
        format!("/certificate/{}", self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub url: &'static str,
}

pub const OWNER_NAME: &str = "Khadon";
pub const OWNER_EMAIL: &str = "nguyendinhdongkha@gmail.com";
pub const CV_PATH: &str = "/Khadon_CV.pdf";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/kha-nguyen1301/";
pub const GITHUB_URL: &str = "https://github.com/khadonnn";

pub const LINKS: &[NavLink] = &[
    NavLink {
        name: "Home",
        hash: "#home",
    },
    NavLink {
        name: "About",
        hash: "#about",
    },
    NavLink {
        name: "Certificate",
        hash: "#certificate",
    },
    NavLink {
        name: "Projects",
        hash: "#projects",
    },
    NavLink {
        name: "Skills",
        hash: "#skills",
    },
    NavLink {
        name: "Experience",
        hash: "#experience",
    },
    NavLink {
        name: "Contact",
        hash: "#contact",
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Business Administration",
        location: "TDTU-University",
        description: "I graduated after 4 years of studying. I have a bachelor's degree in Business Administration.",
        icon: ExperienceIcon::Graduation,
        score: "GPA: 7.1/10",
        date: "2018 - 2023",
    },
    ExperienceEntry {
        title: "Front-End Developer",
        location: "University of Science - VNUHCM",
        description: "I graduated after 4 months of studying. I have enhanced my skills in JavaScript, Bootstrap, Node.js, Cloudinary and MongoDB.",
        icon: ExperienceIcon::Work,
        score: "GPA: 8.5/10",
        date: "02/2024 - 06/2024",
    },
    ExperienceEntry {
        title: "Full-Stack Developer",
        location: "UIT-CITD-University of Information Technology",
        description: "Studying for a second degree in web technology. My stack includes React, Next.js, TypeScript, Tailwind, Cloudinary and MongoDB.",
        icon: ExperienceIcon::React,
        score: "",
        date: "08/2024 - present",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "VNUHCM - University of Science",
        description: "JavaScript, Bootstrap, Node.js, Cloudinary and MongoDB. Score: 8.5/10",
        image_src: "/Certificate.jpg",
        slug: "JavaScript",
        alt_text: "thumbnail",
    },
    Certificate {
        title: "TDTU-University",
        description: "Business Administration GPA: 7.1/10",
        image_src: "/certificate2.jpg",
        slug: "TDTU",
        alt_text: "thumbnail2",
    },
    Certificate {
        title: "Coursera React",
        description: "Certification of React in Coursera",
        image_src: "/courseraReact.jpg",
        slug: "Coursera-React",
        alt_text: "courseraReact",
    },
    Certificate {
        title: "IELTS Certificate",
        description: "Certification of IELTS from IDP",
        image_src: "/IELTS.jpg",
        slug: "IELTS-certificate",
        alt_text: "IELTS",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Pern Store",
        description: "This is a basic project with features related to CRUD, RESTful API, and PostgreSQL.",
        tags: &[
            "Node.js",
            "Express.js",
            "PostgreSQL",
            "MongoDB",
            "Tailwind",
            "Daisyui",
            "Arcjet",
        ],
        image_url: "/pern_store.png",
        url: "https://pern-store-fs5d.onrender.com/",
    },
    Project {
        title: "Store Shop",
        description: "This website offers fashion products and furniture with convenient shopping features, high quality, and beauty designs.",
        tags: &["React", "Next.js", "Wix", "Tailwind", "Stripe", "Zustand"],
        image_url: "/store_shop.png",
        url: "https://nextjs-shop-ten-tawny.vercel.app/",
    },
    Project {
        title: "Blog App",
        description: "This is a blog app that allows user to write and admin can edit or delete blog posts.",
        tags: &[
            "React",
            "Next.js",
            "Css",
            "Cloudinary",
            "MongoDB",
            "React-quill",
            "Next-auth",
            "SWR",
            "Prisma",
        ],
        image_url: "/kblog.png",
        url: "https://k-blog-theta.vercel.app/",
    },
];

pub const SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "Framer Motion",
    "Tailwind",
    "Antd",
    "MUI",
    "Shadcn/ui",
    "Bootstrap",
    "JavaScript",
    "React",
    "Nextjs",
    "TypeScript",
    "Git",
    "MongoDB",
    "Firebase",
    "Wix",
    "Expressjs",
    "FastAPI",
    "Stripe",
    "Rust",
    "Leptos",
];

pub const FOCUS_WORDS: &[&str] = &["Next.js", "React", "Full-Stack Dev"];

/// Linear scan; the list is tiny and static.
pub fn certificate_by_slug(slug: &str) -> Option<&'static Certificate> {
    CERTIFICATES.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_certificate_lookup_hit() {
        let cert = certificate_by_slug("JavaScript").expect("JavaScript certificate exists");
        assert_eq!(cert.title, "VNUHCM - University of Science");
        assert_eq!(cert.image_src, "/Certificate.jpg");
        assert_eq!(cert.href(), "/certificate/JavaScript");
    }

    #[test]
    fn test_certificate_lookup_miss() {
        assert!(certificate_by_slug("does-not-exist").is_none());
        // slugs are case sensitive
        assert!(certificate_by_slug("javascript").is_none());
        assert!(certificate_by_slug("").is_none());
    }

    #[test]
    fn test_every_certificate_resolves_to_itself() {
        for cert in CERTIFICATES {
            assert_eq!(certificate_by_slug(cert.slug), Some(cert));
        }
    }

    #[test]
    fn test_certificate_slugs_unique() {
        let slugs = CERTIFICATES.iter().map(|c| c.slug).collect::<HashSet<_>>();
        assert_eq!(slugs.len(), CERTIFICATES.len());
    }

    #[test]
    fn test_nav_hashes_match_names() {
        for link in LINKS {
            assert_eq!(link.hash, format!("#{}", link.name.to_lowercase()));
        }
        assert_eq!(LINKS.first().map(|l| l.name), Some("Home"));
    }

    #[test]
    fn test_skills_unique() {
        let skills = SKILLS.iter().collect::<HashSet<_>>();
        assert_eq!(skills.len(), SKILLS.len());
    }
}
