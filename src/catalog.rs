//! Static site content: the project catalog, certificate images, rotating
//! role phrases and the page's section anchors.

use std::fmt;
use std::time::Duration;

pub const OWNER_NAME: &str = "Akhil Chauhan";
pub const OWNER_INITIALS: &str = "AC";
pub const OWNER_ROLE: &str = "Backend Developer • Python & Django • MERN Stack";
pub const AVATAR_URL: &str = "https://myportfolio-1zpl.onrender.com/static/images/photo.jpg";
pub const EMAIL: &str = "akhilchauhan883@gmail.com";
pub const LOCATION: &str = "India";
pub const GITHUB: Link = Link::Url("https://github.com/AkhilChauhan-UK");
pub const LINKEDIN: Link = Link::Placeholder;

/// Phrases cycled by the hero's role rotator.
pub const ROLES: [&str; 3] = ["Backend Development", "MERN Full Stack", "Web Development"];

/// How long each role phrase stays on screen.
pub const ROLE_DISPLAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Django,
    Mern,
}

impl ProjectKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Django => "Django",
            Self::Mern => "MERN",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An outbound link, or the `#` placeholder used while real content is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Url(&'static str),
    Placeholder,
}

impl Link {
    pub fn href(self) -> &'static str {
        match self {
            Self::Url(url) => url,
            Self::Placeholder => "#",
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Host name of the destination, e.g. `github.com`.
    pub fn host(self) -> Option<String> {
        match self {
            Self::Url(url) => url::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string())),
            Self::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub stack: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub live: Link,
    pub repo: Link,
    pub kind: ProjectKind,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Recipe Planner",
        stack: "Python • Django • PostgreSQL",
        description: "Searchable recipe planner with shopping list & favourites.",
        image: "https://myportfolio-1zpl.onrender.com/static/images/recipe.planner.png",
        live: Link::Placeholder,
        repo: Link::Url("https://github.com/AkhilChauhan-UK/recipe-planner"),
        kind: ProjectKind::Django,
    },
    Project {
        id: 2,
        title: "CRUD Project",
        stack: "Django • DRF • HTML/CSS",
        description: "CRUD application with JWT auth and editor.",
        image: "https://myportfolio-1zpl.onrender.com/static/images/crudproject.png",
        live: Link::Placeholder,
        repo: Link::Url("https://github.com/AkhilChauhan-UK/blog-app"),
        kind: ProjectKind::Django,
    },
    Project {
        id: 3,
        title: "Code Editor",
        stack: "Django • Ace Editor",
        description: "Online code editor with multi-language support and IO.",
        image: "/images/codeeditor.png.png",
        live: Link::Url("https://code-editor-py.onrender.com"),
        repo: Link::Url("https://github.com/AkhilChauhan-UK/code_Editor.py"),
        kind: ProjectKind::Django,
    },
    Project {
        id: 4,
        title: "Password Manager",
        stack: "MERN • React",
        description: "Encrypted password manager with secure storage and vault features.",
        image: "/images/passwordmanager.png",
        live: Link::Url("https://password-manager-nu-eight.vercel.app"),
        repo: Link::Placeholder,
        kind: ProjectKind::Mern,
    },
    Project {
        id: 5,
        title: "Spotify Clone",
        stack: "MERN • React",
        description: "Music streaming UI clone with playlists and search.",
        image: "/images/spotifyclone.png",
        live: Link::Url("https://spotifyclonee-navy.vercel.app"),
        repo: Link::Placeholder,
        kind: ProjectKind::Mern,
    },
    Project {
        id: 6,
        title: "Netflix Clone",
        stack: "MERN • React",
        description: "Responsive streaming UI clone with search & lists.",
        image: "https://myportfolio-1zpl.onrender.com/static/images/netflix.png",
        live: Link::Url("https://netflix-clone-steel-five.vercel.app"),
        repo: Link::Placeholder,
        kind: ProjectKind::Mern,
    },
];

pub const CERTIFICATES: [&str; 4] = [
    "/images/cert1.png",
    "/images/cert2.png",
    "/images/cert3.jpg",
    "/images/cert4.png",
];

pub const CERTIFICATIONS: [&str; 3] = [
    "Walmart USA - Advanced Software Engineering",
    "Accenture UK Developer & Technology VEP",
    "AWS APAC Solutions Architecture VEP",
];

/// Anchored sections of the page. The navbar and the section ids are both
/// derived from this list, so every link has exactly one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Certificates,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Hero,
        Self::Projects,
        Self::Certificates,
        Self::About,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Hero => "#hero",
            Self::Projects => "#projects",
            Self::Certificates => "#certificates",
            Self::About => "#about",
            Self::Contact => "#contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Projects => "Projects",
            Self::Certificates => "Certificates",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}
