use super::constants::{ABOUT_COLOR, CONTACT_COLOR, WORK_COLOR};
use super::stage::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub text: &'static str,
}

/// Static copy shown in a section overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelContent {
    pub title: &'static str,
    pub accent: [f32; 3],
    pub paragraphs: &'static [&'static str],
    pub links: &'static [ContactLink],
}

const WORK: PanelContent = PanelContent {
    title: "work",
    accent: WORK_COLOR,
    paragraphs: &[
        "Content to be filled.",
        "Check back soon for updates!",
    ],
    links: &[],
};

const ABOUT: PanelContent = PanelContent {
    title: "about",
    accent: ABOUT_COLOR,
    paragraphs: &[
        "Hi, I'm Samuel Goldman, a developer passionate about creating immersive web experiences with cutting-edge technology.",
        "I specialize in building interactive 3D environments and modern web applications, combining technical precision with creative vision to bring ideas to life through code.",
    ],
    links: &[],
};

const CONTACT: PanelContent = PanelContent {
    title: "contact",
    accent: CONTACT_COLOR,
    paragraphs: &["Let's connect! Feel free to reach out through any of the following channels."],
    links: &[
        ContactLink {
            label: "Email",
            href: "mailto:your.email@example.com",
            text: "your.email@example.com",
        },
        ContactLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/yourprofile",
            text: "linkedin.com/in/yourprofile",
        },
        ContactLink {
            label: "GitHub",
            href: "https://github.com/yourusername",
            text: "github.com/yourusername",
        },
        ContactLink {
            label: "Twitter",
            href: "https://twitter.com/yourhandle",
            text: "@yourhandle",
        },
    ],
};

pub fn panel_content(section: Section) -> &'static PanelContent {
    match section {
        Section::Work => &WORK,
        Section::About => &ABOUT,
        Section::Contact => &CONTACT,
    }
}
